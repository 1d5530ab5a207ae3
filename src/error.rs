//! Error types for drive analysis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A caller handed the engine input it cannot work with, such as an
    /// empty journey group.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The telemetry source failed before any drive reached the engine.
    #[error("Failed to fetch drives: {0:#}")]
    Fetch(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = AnalysisError::invalid_argument("empty drive group");
        assert_eq!(err.to_string(), "Invalid argument: empty drive group");
        assert!(!err.is_fetch());

        let err = AnalysisError::Fetch(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "Failed to fetch drives: connection refused");
        assert!(err.is_fetch());
    }
}
