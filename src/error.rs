//! Error handling for the drip config store
//!
//! Two kinds of failure exist. `IoError` and `ConfigParseError` are fatal and
//! abort startup. `UnknownBlock` and `UnknownFluid` are recoverable: the entry
//! is dropped, a warning is logged and loading carries on.

use std::path::Path;

use crate::persistence::WireEntry;
use crate::world::core::Identifier;

/// Main error type for drip
#[derive(Debug, thiserror::Error)]
pub enum DripError {
    #[error("IO error for {path}: {error}")]
    IoError { path: String, error: String },

    #[error("Config parse error in {path}: {error}")]
    ConfigParseError { path: String, error: String },

    #[error("Unknown block {id} for {entry}")]
    UnknownBlock { id: Identifier, entry: WireEntry },

    #[error("Unknown fluid {fluid} for block {block}")]
    UnknownFluid { block: Identifier, fluid: Identifier },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("Serialization error in {context}: {error}")]
    SerializationError { context: String, error: String },

    #[error("Registry full: no {kind} handles left")]
    RegistryFull { kind: String },
}

impl DripError {
    /// Whether loading may continue after this error with the entry dropped.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DripError::UnknownBlock { .. } | DripError::UnknownFluid { .. }
        )
    }
}

/// Type alias for Results in drip
pub type DripResult<T> = Result<T, DripError>;

/// Attaches the offending path to IO failures
pub trait IoResultExt<T> {
    fn with_path(self, path: &Path) -> DripResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: &Path) -> DripResult<T> {
        self.map_err(|error| DripError::IoError {
            path: path.display().to_string(),
            error: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DripError::UnknownFluid {
            block: Identifier::vanilla("mud").expect("valid identifier"),
            fluid: Identifier::new("ringlings", "goo").expect("valid identifier"),
        };
        assert_eq!(
            err.to_string(),
            "Unknown fluid ringlings:goo for block minecraft:mud"
        );
    }

    #[test]
    fn test_recoverable_kinds() {
        let fatal = DripError::ConfigParseError {
            path: "drip.json".to_string(),
            error: "expected value at line 1 column 1".to_string(),
        };
        assert!(!fatal.is_recoverable());

        let unknown = DripError::UnknownBlock {
            id: Identifier::new("ringlings", "gem").expect("valid identifier"),
            entry: WireEntry {
                fluid: Identifier::vanilla("water").expect("valid identifier"),
                replace: false,
            },
        };
        assert!(unknown.is_recoverable());
    }

    #[test]
    fn test_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = result
            .with_path(Path::new("config/drip.json"))
            .expect_err("io error should map");
        match err {
            DripError::IoError { path, error } => {
                assert_eq!(path, "config/drip.json");
                assert_eq!(error, "file not found");
            }
            other => panic!("Wrong error kind: {other:?}"),
        }
    }
}
