use thiserror::Error;

pub type Scale2dResult<T> = Result<T, Scale2dError>;

#[derive(Debug, Error)]
pub enum Scale2dError {
    #[error("invalid scale: {0}")]
    InvalidScale(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("render backend failed: {0}")]
    Render(String),
}
