use std::{
    borrow::Cow,
    collections::BTreeMap,
    io::{self, Write},
};

use colored::Colorize;
use log::{debug, trace};

use bundlelens_core::{
    FileDetail, FileOverlap, LineOverlap, NetworkView, Node, OutputFile, Summary, format_percent,
    strip_hashes,
};

use crate::color::ColorScale;

fn bundle_name(name: &str, strip: bool) -> Cow<'_, str> {
    if strip { Cow::Owned(strip_hashes(name)) } else { Cow::Borrowed(name) }
}

pub fn print_summary<W: Write>(writer: &mut W, summary: &Summary) -> io::Result<()> {
    debug!("Printing summary");
    writeln!(
        writer,
        "{} {} files were bundled into {} bundles. Of those, {} bundles have overlaps",
        "●".bright_blue(),
        summary.source_file_count.to_string().cyan().bold(),
        summary.bundle_count.to_string().cyan().bold(),
        summary.overlapping_bundle_count.to_string().yellow().bold()
    )?;
    Ok(())
}

pub fn print_file_detail<W: Write>(writer: &mut W, detail: &FileDetail) -> io::Result<()> {
    writeln!(
        writer,
        "{} File {} is: {} overlapping lines across {} bundles",
        "●".bright_blue(),
        detail.0.file.blue().bold(),
        format_percent(detail.0.ratio()).yellow().bold(),
        detail.0.bundle_count.to_string().cyan().bold()
    )?;
    Ok(())
}

/// The bundler's own overlap figure for a selected bundle, when it reported one.
pub fn print_bundle_detail<W: Write>(
    writer: &mut W,
    output: &OutputFile,
    strip: bool,
) -> io::Result<()> {
    let Some(pct) = output.pct_overlap else {
        debug!("No overlap percentage recorded for {}", output.name);
        return Ok(());
    };
    writeln!(
        writer,
        "{} Bundle {} is: {} overlapping",
        "●".bright_blue(),
        bundle_name(&output.name, strip).blue().bold(),
        format_percent(pct).yellow().bold()
    )?;
    Ok(())
}

pub fn print_unknown_selection<W: Write>(writer: &mut W, selection: &str) -> io::Result<()> {
    writeln!(
        writer,
        "{} No bundle or file named {}, showing the summary instead",
        "⚠".yellow().bold(),
        selection.bright_white()
    )?;
    Ok(())
}

/// Per-bundle file counts for the full network, most shared files first.
pub fn print_bundle_overview<W: Write>(
    writer: &mut W,
    view: &NetworkView,
    strip: bool,
) -> io::Result<()> {
    let mut per_bundle: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for node in view.nodes.iter().filter(|n| n.is_output()) {
        per_bundle.entry(node.id.as_str()).or_default();
    }
    for link in &view.links {
        let counts = per_bundle.entry(link.target.id.as_str()).or_default();
        counts.0 += 1;
        if link.source.is_shared() {
            counts.1 += 1;
        }
    }
    debug!("Printing overview of {} bundles", per_bundle.len());

    let mut bundles: Vec<_> = per_bundle.into_iter().collect();
    bundles.sort_by(|a, b| b.1.1.cmp(&a.1.1).then_with(|| a.0.cmp(b.0)));

    writeln!(writer, "\n{}", "Bundles".bold())?;
    for (idx, (name, (files, shared))) in bundles.iter().enumerate() {
        let prefix = if idx == bundles.len() - 1 { "└──" } else { "├──" };
        let shared_label = if *shared > 0 {
            format!("{} shared", shared).yellow().to_string()
        } else {
            "0 shared".dimmed().to_string()
        };
        writeln!(
            writer,
            "{}  {} ({} files, {})",
            prefix.dimmed(),
            bundle_name(name, strip).blue(),
            files.to_string().cyan(),
            shared_label
        )?;
    }
    Ok(())
}

/// The selected node, its shared files, and the other bundles each one is in.
pub fn print_network_tree<W: Write>(
    writer: &mut W,
    view: &NetworkView,
    strip: bool,
) -> io::Result<()> {
    let Some(root) = view.root() else {
        return Ok(());
    };
    debug!("Printing network tree for {}", root.id);

    if !root.is_output() {
        print_file_membership(writer, root, strip)?;
        return Ok(());
    }

    let children: Vec<&Node> = view
        .links
        .iter()
        .filter(|l| l.target.id == root.id)
        .map(|l| l.source)
        .collect();

    writeln!(
        writer,
        "\n{} ({} shared files)",
        bundle_name(&root.id, strip).blue().bold(),
        children.len().to_string().yellow()
    )?;

    if children.is_empty() {
        writeln!(writer, "{}  {}", "└──".dimmed(), "no files shared with other bundles".dimmed())?;
        return Ok(());
    }

    for (idx, child) in children.iter().enumerate() {
        let is_last = idx == children.len() - 1;
        let prefix = if is_last { "└──" } else { "├──" };
        let also_in: Vec<String> = view
            .links
            .iter()
            .filter(|l| l.source.id == child.id && l.target.id != root.id)
            .map(|l| bundle_name(&l.target.id, strip).into_owned())
            .collect();
        trace!("{} is also in {} bundles", child.id, also_in.len());

        writeln!(writer, "{}  {}", prefix.dimmed(), child.id.bright_white())?;
        let indent = if is_last { "   " } else { "│  " };
        for (j, bundle) in also_in.iter().enumerate() {
            let branch = if j == also_in.len() - 1 { "└──" } else { "├──" };
            writeln!(writer, "{}  {}  {}", indent.dimmed(), branch.dimmed(), bundle.blue())?;
        }
    }
    Ok(())
}

fn print_file_membership<W: Write>(writer: &mut W, file: &Node, strip: bool) -> io::Result<()> {
    let bundles = file.in_bundle_files.as_deref().unwrap_or(&[]);
    writeln!(
        writer,
        "\n{} (in {} bundles)",
        file.id.bright_white().bold(),
        bundles.len().to_string().yellow()
    )?;
    for (idx, bundle) in bundles.iter().enumerate() {
        let prefix = if idx == bundles.len() - 1 { "└──" } else { "├──" };
        writeln!(writer, "{}  {}", prefix.dimmed(), bundle_name(bundle, strip).blue())?;
    }
    Ok(())
}

/// Each line prefixed by its bundle count, coloured on the count scale.
pub fn print_source_view<W: Write>(writer: &mut W, rows: &[LineOverlap]) -> io::Result<()> {
    debug!("Printing source view of {} lines", rows.len());
    let scale = ColorScale::for_counts(rows.iter().map(|r| r.bundle_count()));
    let width = rows.len().to_string().len();

    writeln!(writer)?;
    for row in rows {
        let (r, g, b) = scale.color(row.bundle_count());
        writeln!(
            writer,
            "{:>width$} {} {}",
            row.line_number.to_string().dimmed(),
            format!("{:>3}", row.bundle_count()).truecolor(r, g, b).bold(),
            row.content,
            width = width
        )?;
    }
    Ok(())
}

pub fn print_overlap_ranking<W: Write>(
    writer: &mut W,
    ranking: &[FileOverlap],
    top: usize,
) -> io::Result<()> {
    let mut overlapping = ranking.iter().filter(|f| f.overlapping_lines > 0).peekable();
    if overlapping.peek().is_none() {
        writeln!(writer, "\n{} No lines are shared between bundles", "✓".green().bold())?;
        return Ok(());
    }
    let offenders: Vec<_> = overlapping.take(top).collect();
    if offenders.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\n{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Most overlapping files".bold())?;
    for (idx, file) in offenders.iter().enumerate() {
        writeln!(
            writer,
            "    {}. {} ({} of {} lines, {}) in {} bundles",
            idx + 1,
            file.file.blue(),
            file.overlapping_lines.to_string().red(),
            file.total_lines,
            format_percent(file.ratio()),
            file.bundle_count.to_string().cyan()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundlelens_core::{BundleNetwork, LineStat, Link, PerFileLineStats, filter_network};
    use std::collections::HashMap;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn network() -> BundleNetwork {
        let nodes = vec![
            Node::output("main.1a2b3c4d5e.js"),
            Node::source("shared.js", &["main.1a2b3c4d5e.js", "admin.js", "vendor.js"]),
            Node::source("lib.js", &["main.1a2b3c4d5e.js", "admin.js"]),
            Node::source("solo.js", &["main.1a2b3c4d5e.js"]),
            Node::output("admin.js"),
            Node::output("vendor.js"),
        ];
        let links = vec![
            Link::new("shared.js", "main.1a2b3c4d5e.js"),
            Link::new("lib.js", "main.1a2b3c4d5e.js"),
            Link::new("solo.js", "main.1a2b3c4d5e.js"),
            Link::new("shared.js", "admin.js"),
            Link::new("shared.js", "vendor.js"),
            Link::new("lib.js", "admin.js"),
        ];
        BundleNetwork::new(nodes, links).unwrap()
    }

    #[test]
    fn test_print_summary() {
        let summary =
            Summary { source_file_count: 12, bundle_count: 3, overlapping_bundle_count: 2 };
        let out = render(|w| print_summary(w, &summary));
        assert!(out.contains("12 files were bundled into 3 bundles. Of those, 2 bundles"));
    }

    #[test]
    fn test_print_network_tree_for_bundle() {
        let network = network();
        let view = filter_network(Some("main.1a2b3c4d5e.js"), &network).unwrap();
        let out = render(|w| print_network_tree(w, &view, true));

        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], "main.js (2 shared files)");
        assert_eq!(lines[1], "├──  shared.js");
        assert_eq!(lines[2], "│    ├──  admin.js");
        assert_eq!(lines[3], "│    └──  vendor.js");
        assert_eq!(lines[4], "└──  lib.js");
        assert_eq!(lines[5], "     └──  admin.js");
        assert!(!out.contains("solo.js"));
    }

    #[test]
    fn test_print_network_tree_without_shared_files() {
        let network = network();
        let view = filter_network(Some("vendor.js"), &network).unwrap();
        let out = render(|w| print_network_tree(w, &view, false));
        assert!(out.contains("vendor.js (1 shared files)"));

        let network = BundleNetwork::new(vec![Node::output("lonely.js")], vec![]).unwrap();
        let view = filter_network(Some("lonely.js"), &network).unwrap();
        let out = render(|w| print_network_tree(w, &view, false));
        assert!(out.contains("no files shared with other bundles"));
    }

    #[test]
    fn test_print_network_tree_for_file() {
        let network = network();
        let view = filter_network(Some("lib.js"), &network).unwrap();
        let out = render(|w| print_network_tree(w, &view, false));
        assert!(out.contains("lib.js (in 2 bundles)"));
        assert!(out.contains("└──  admin.js"));
    }

    #[test]
    fn test_print_bundle_overview() {
        let network = network();
        let view = filter_network(None, &network).unwrap();
        let out = render(|w| print_bundle_overview(w, &view, false));

        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], "Bundles");
        assert_eq!(lines[1], "├──  admin.js (2 files, 2 shared)");
        assert_eq!(lines[2], "├──  main.1a2b3c4d5e.js (3 files, 2 shared)");
        assert_eq!(lines[3], "└──  vendor.js (1 files, 1 shared)");
    }

    #[test]
    fn test_print_source_view() {
        let mut lines = HashMap::new();
        lines.insert(2, LineStat { in_bundles: vec!["a".into(), "b".into()] });
        let mut stats = PerFileLineStats::new();
        stats.insert("x.js".into(), lines);
        let source = ["const x = 1;", "export default x;"];
        let rows = bundlelens_core::resolve_line_overlap("x.js", &stats, &source[..]);

        let out = render(|w| print_source_view(w, &rows));
        let printed: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(printed, vec!["1   0 const x = 1;", "2   2 export default x;"]);
    }

    #[test]
    fn test_print_overlap_ranking() {
        let ranking = vec![
            FileOverlap {
                file: "a.js".into(),
                total_lines: 4,
                overlapping_lines: 2,
                bundle_count: 3,
            },
            FileOverlap {
                file: "b.js".into(),
                total_lines: 10,
                overlapping_lines: 1,
                bundle_count: 2,
            },
            FileOverlap {
                file: "c.js".into(),
                total_lines: 1,
                overlapping_lines: 0,
                bundle_count: 1,
            },
        ];
        let out = render(|w| print_overlap_ranking(w, &ranking, 5));
        assert!(out.contains("1. a.js (2 of 4 lines, 50.0%) in 3 bundles"));
        assert!(out.contains("2. b.js (1 of 10 lines, 10.0%) in 2 bundles"));
        assert!(!out.contains("c.js"));

        let out = render(|w| print_overlap_ranking(w, &ranking, 1));
        assert!(!out.contains("b.js"));
    }

    #[test]
    fn test_print_overlap_ranking_top_zero_prints_nothing() {
        let ranking = vec![FileOverlap {
            file: "a.js".into(),
            total_lines: 4,
            overlapping_lines: 2,
            bundle_count: 2,
        }];
        let out = render(|w| print_overlap_ranking(w, &ranking, 0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_bundle_detail() {
        let output = OutputFile { name: "main.1a2b3c4d5e.js".into(), pct_overlap: Some(0.125) };
        let out = render(|w| print_bundle_detail(w, &output, true));
        assert_eq!(out.trim_end(), "● Bundle main.js is: 12.5% overlapping");

        let output = OutputFile { name: "admin.js".into(), pct_overlap: None };
        let out = render(|w| print_bundle_detail(w, &output, false));
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_overlap_ranking_clean() {
        let out = render(|w| print_overlap_ranking(w, &[], 5));
        assert!(out.contains("No lines are shared between bundles"));
    }
}
