//! Delimiter configuration errors.

use thiserror::Error;

/// Rejected delimiter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The same character was listed as a quote and as an escape.
    #[error("character {0:?} is configured as both a quote and an escape character")]
    OverlappingChar(char),
}
