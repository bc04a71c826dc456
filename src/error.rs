use thiserror::Error;

/// Errors raised when configuring a [`LevelIndicator`](crate::LevelIndicator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
