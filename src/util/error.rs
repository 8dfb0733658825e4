// LineSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every I/O failure carries the path and the operation that failed.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Top-level error type for all LineSift operations.
#[derive(Debug)]
pub enum SiftError {
    /// I/O error with path context. The only kind the filter pipeline raises.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// An explicitly requested configuration file could not be loaded.
    Config(ConfigError),

    /// The run report could not be serialised.
    Report(serde_json::Error),
}

impl SiftError {
    /// Wrap an `io::Error` with the path and operation it occurred on.
    pub fn io(path: &Path, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }

    /// The underlying `io::ErrorKind`, if this is an I/O error.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::Config(ConfigError::Io { source, .. }) => Some(source.kind()),
            Self::Config(_) | Self::Report(_) => None,
        }
    }
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Report(e) => write!(f, "Failed to serialise run report: {e}"),
        }
    }
}

impl std::error::Error for SiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            Self::Report(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SiftError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LineSift results.
pub type Result<T> = std::result::Result<T, SiftError>;
