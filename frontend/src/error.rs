use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("unknown animation variant `{0}`")]
    UnknownVariant(String),

    #[error("invalid motion config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("browser API unavailable: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, MotionError>;
