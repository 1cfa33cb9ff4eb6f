use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::mem;

use bundlelens_core::{BundleNetwork, Summary, load_bundle_data};

use crate::{config::Config, types::Inspection};

pub fn run_inspect(mut cfg: Config) -> Result<Inspection> {
    info!("Starting bundle overlap inspection");

    cfg.initialize()?;
    let stats_path = cfg.stats_path()?.clone();
    info!("Using stats file: {}", stats_path.display());

    let mut data = load_bundle_data(&stats_path)
        .with_context(|| format!("Failed to load bundle stats from {}", stats_path.display()))?;

    let nodes = mem::take(&mut data.network_nodes);
    let links = mem::take(&mut data.network_links);
    debug!("Resolving {} links across {} nodes", links.len(), nodes.len());
    let network = BundleNetwork::new(nodes, links)
        .with_context(|| format!("Invalid bundle network in {}", stats_path.display()))?;

    let summary = Summary::new(&data, &network);
    debug!("Summary: {}", summary);

    let requested = cfg.select.filter(|s| !s.is_empty());
    let (selection, fallback) = match requested {
        Some(name) if network.position(&name).is_some() => {
            info!("Focusing on '{}'", name);
            (Some(name), false)
        }
        Some(name) => {
            warn!("Selection '{}' matches no bundle or file, showing the summary instead", name);
            (None, true)
        }
        None => (None, false),
    };

    info!("Inspection complete");
    Ok(Inspection { data, network, summary, selection, fallback })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::{
        fs,
        path::{Path, PathBuf},
    };
    use tempfile::TempDir;

    const STATS: &str = r#"
{
  "networkNodes": [
    { "id": "src/shared.js", "type": "input", "inBundleFiles": ["main.js", "admin.js"] },
    { "id": "src/main-only.js", "type": "input", "inBundleFiles": ["main.js"] },
    { "id": "main.js", "type": "output" },
    { "id": "admin.js", "type": "output" }
  ],
  "networkLinks": [
    { "source": "src/shared.js", "target": "main.js" },
    { "source": "src/main-only.js", "target": "main.js" },
    { "source": "src/shared.js", "target": "admin.js" }
  ],
  "sourceFiles": {
    "src/shared.js": { "source": ["export const a = 1;", "export const b = 2;"] },
    "src/main-only.js": { "source": ["import { a } from './shared';"] }
  },
  "outputFiles": [{ "name": "main.js", "pctOverlap": 0.5 }, { "name": "admin.js" }],
  "perFileStats": {
    "src/shared.js": {
      "1": { "inBundles": ["main.js", "admin.js"] },
      "2": { "inBundles": ["main.js"] }
    }
  }
}
"#;

    fn write_stats(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("bundle-stats.json");
        fs::write(&path, content).expect("Failed to write stats file");
        path
    }

    fn config(stats: &Path, select: Option<&str>) -> Config {
        let mut args =
            vec!["inspect".to_string(), "--stats".to_string(), stats.display().to_string()];
        if let Some(s) = select {
            args.push("--select".to_string());
            args.push(s.to_string());
        }
        Config::parse_from(args)
    }

    #[test]
    fn test_summary_without_selection() {
        let temp_dir = TempDir::new().unwrap();
        let stats = write_stats(temp_dir.path(), STATS);
        let inspection = run_inspect(config(&stats, None)).unwrap();

        assert!(inspection.selection.is_none());
        assert!(!inspection.fallback);
        assert_eq!(
            inspection.summary.to_string(),
            "2 files were bundled into 2 bundles. Of those, 2 bundles have overlaps"
        );
        assert_eq!(inspection.view().unwrap().nodes.len(), 4);
        assert!(inspection.source_rows().is_none());
    }

    #[test]
    fn test_bundle_selection() {
        let temp_dir = TempDir::new().unwrap();
        let stats = write_stats(temp_dir.path(), STATS);
        let inspection = run_inspect(config(&stats, Some("main.js"))).unwrap();

        let view = inspection.view().unwrap();
        let ids: Vec<&str> = view.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["main.js", "src/shared.js", "admin.js"]);
        assert_eq!(view.links.len(), 2);
        assert!(inspection.detail().is_none());
    }

    #[test]
    fn test_bundle_selection_has_output_record() {
        let temp_dir = TempDir::new().unwrap();
        let stats = write_stats(temp_dir.path(), STATS);

        let inspection = run_inspect(config(&stats, Some("main.js"))).unwrap();
        let output = inspection.selected_output().unwrap();
        assert_eq!(output.pct_overlap, Some(0.5));

        let inspection = run_inspect(config(&stats, Some("src/shared.js"))).unwrap();
        assert!(inspection.selected_output().is_none());

        let inspection = run_inspect(config(&stats, None)).unwrap();
        assert!(inspection.selected_output().is_none());
    }

    #[test]
    fn test_file_selection_has_source_view() {
        let temp_dir = TempDir::new().unwrap();
        let stats = write_stats(temp_dir.path(), STATS);
        let inspection = run_inspect(config(&stats, Some("src/shared.js"))).unwrap();

        let rows = inspection.source_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bundle_count(), 2);
        assert_eq!(rows[1].bundle_count(), 1);

        let detail = inspection.detail().unwrap();
        assert_eq!(
            detail.to_string(),
            "File src/shared.js is: 50.0% overlapping lines across 2 bundles"
        );
    }

    #[test]
    fn test_unknown_selection_falls_back_to_summary() {
        let temp_dir = TempDir::new().unwrap();
        let stats = write_stats(temp_dir.path(), STATS);
        let inspection = run_inspect(config(&stats, Some("lib/components/ui/Card.js"))).unwrap();

        assert!(inspection.fallback);
        assert!(inspection.selection.is_none());
        assert_eq!(inspection.view().unwrap().nodes.len(), 4);
    }

    #[test]
    fn test_dangling_link_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let broken = STATS.replace(r#""target": "admin.js" }"#, r#""target": "vendor.js" }"#);
        let stats = write_stats(temp_dir.path(), &broken);
        let err = run_inspect(config(&stats, None)).unwrap_err();

        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid bundle network"));
        assert!(chain.contains("vendor.js"));
    }

    #[test]
    fn test_missing_stats_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_inspect(config(&temp_dir.path().join("absent.json"), None)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load bundle stats"));
    }
}
