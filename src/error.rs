use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    #[error("chain follower has not been initialized")]
    NotInitialized,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("segment index {index} out of range (segment count is {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("tick duration must be positive and finite, got {0}")]
    InvalidTickDuration(f32),
}

pub type Result<T> = std::result::Result<T, ChainError>;
