use std::{io, path::PathBuf};

/// Which end of a link failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("file '{0}' is not in the source map")]
    FileNotFound(String),
    #[error("link #{link} {endpoint} '{id}' does not name any node")]
    DanglingReference { link: usize, endpoint: Endpoint, id: String },
    #[error("selection '{0}' does not match any node")]
    UnknownSelection(String),
    #[error("failed to read {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse bundle stats in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
