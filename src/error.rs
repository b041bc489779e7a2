//! src/error.rs
use std::path::PathBuf;

/// Per-file failures. None of them abort the aggregation.
#[derive(thiserror::Error)]
pub enum CountError {
    #[error("Failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to finish reading {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Counting task for {} did not finish", .path.display())]
    Worker {
        path: PathBuf,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl CountError {
    pub fn path(&self) -> &PathBuf {
        match self {
            CountError::Open { path, .. }
            | CountError::Read { path, .. }
            | CountError::Worker { path, .. } => path,
        }
    }
}

impl std::fmt::Debug for CountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
