use anyhow::Result;
use bundlelens_overlap::{Config, Inspection};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bundlelens")]
#[command(about = "Inspect source files shared between JavaScript bundles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a bundle overlap report
    Inspect(Config),
    /// Print the selected part of the bundle network as JSON
    Network(Config),
}

fn print_report<W: Write>(writer: &mut W, inspection: &Inspection, cfg: &Config) -> Result<()> {
    bundlelens_overlap::print_summary(writer, &inspection.summary)?;

    if inspection.fallback
        && let Some(requested) = cfg.select.as_deref()
    {
        bundlelens_overlap::print_unknown_selection(writer, requested)?;
    }

    let view = inspection.view()?;
    if inspection.selection.is_none() {
        bundlelens_overlap::print_bundle_overview(writer, &view, cfg.strip_hashes)?;
        bundlelens_overlap::print_overlap_ranking(writer, &inspection.ranking(), cfg.top)?;
        return Ok(());
    }

    bundlelens_overlap::print_network_tree(writer, &view, cfg.strip_hashes)?;
    if let Some(output) = inspection.selected_output().filter(|o| o.pct_overlap.is_some()) {
        writeln!(writer)?;
        bundlelens_overlap::print_bundle_detail(writer, output, cfg.strip_hashes)?;
    }
    if let Some(detail) = inspection.detail() {
        writeln!(writer)?;
        bundlelens_overlap::print_file_detail(writer, &detail)?;
        if !cfg.no_source
            && let Some(rows) = inspection.source_rows()
        {
            bundlelens_overlap::print_source_view(writer, &rows)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Inspect(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!("Running bundle inspection (using {} threads)", num_threads);
            debug!("Config: root={:?}, stats={:?}, select={:?}", cfg.root, cfg.stats, cfg.select);

            let inspection = bundlelens_overlap::run_inspect(cfg.clone())?;
            print_report(&mut stdout, &inspection, &cfg)?;

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                inspection.summary.source_file_count.to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stdout.flush()?;
            Ok(())
        }
        Commands::Network(cfg) => {
            info!("Exporting bundle network");
            let inspection = bundlelens_overlap::run_inspect(cfg)?;
            writeln!(stdout, "{}", inspection.network_json()?)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
