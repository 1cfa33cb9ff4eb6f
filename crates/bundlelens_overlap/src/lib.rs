//! Bundle overlap inspection for JavaScript/TypeScript build output.
//!
//! Loads a bundle stats file, summarises how many bundles ship the same
//! source files, and narrows the file/bundle network to the neighbourhood of
//! a selected bundle or file.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use bundlelens_overlap::{Config, run_inspect};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: None,
//!     stats: Some(std::path::PathBuf::from("/path/to/bundle-stats.json")),
//!     select: Some("main.js".to_string()),
//!     top: 5,
//!     strip_hashes: true,
//!     no_source: false,
//! };
//!
//! let inspection = run_inspect(cfg.clone())?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! bundlelens_overlap::print_summary(&mut stdout, &inspection.summary)?;
//! bundlelens_overlap::print_network_tree(&mut stdout, &inspection.view()?, cfg.strip_hashes)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod color;
mod config;
mod inspect;
mod reporter;
mod types;

// Re-export public API
pub use color::ColorScale;
pub use config::Config;
pub use inspect::run_inspect;
pub use reporter::{
    print_bundle_detail, print_bundle_overview, print_file_detail, print_network_tree,
    print_overlap_ranking, print_source_view, print_summary, print_unknown_selection,
};
pub use types::Inspection;
