use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to finalize a builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("File path is not set.")]
    FilePathNotSet,
}

/// Failure to load the demo configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_message_is_exact() {
        assert_eq!(BuildError::FilePathNotSet.to_string(), "File path is not set.");
    }

    #[test]
    fn read_error_names_the_path() {
        let err = ConfigError::read(
            "missing.toml",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("missing.toml"));
        assert!(message.contains("no such file"));
    }
}
