// crates/iec61850-mapper-cli/src/error.rs

use iec61850_mapper::MapperError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal conditions of a run. Every variant exits with status 1.
#[derive(Debug)]
pub enum CliError {
    /// The invocation is valid syntax but not an acceptable combination.
    Usage(String),

    /// An input file could not be opened or read.
    FileAccess { path: PathBuf, source: io::Error },

    /// An SCL file could not be mapped.
    Document { path: PathBuf, source: MapperError },

    /// The Structured Text program could not be loaded.
    Bindings { path: PathBuf, source: MapperError },

    /// The output destination could not be created or written.
    Output { path: Option<PathBuf>, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "Invalid command: {}", msg),
            CliError::FileAccess { path, source } => match source.kind() {
                io::ErrorKind::NotFound => {
                    write!(f, "Failed to open {}: {}", path.display(), source)
                }
                _ => write!(f, "Failed to read {}: {}", path.display(), source),
            },
            CliError::Document { path, source } => {
                write!(f, "Error parsing SCL file {}: {}", path.display(), source)
            }
            CliError::Bindings { path, source } => {
                write!(f, "Error parsing ST file {}: {}", path.display(), source)
            }
            CliError::Output {
                path: Some(path),
                source,
            } => write!(f, "Failed to open/create output file {}: {}", path.display(), source),
            CliError::Output { path: None, source } => {
                write!(f, "Failed to write mapping to stdout: {}", source)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage(_) => None,
            CliError::FileAccess { source, .. } | CliError::Output { source, .. } => Some(source),
            CliError::Document { source, .. } | CliError::Bindings { source, .. } => Some(source),
        }
    }
}
