use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the source README.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("README not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
