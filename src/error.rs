use thiserror::Error;

/// Errors surfaced to the user. Out-of-bounds cell access is a programming
/// error and panics instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Both dimensions must be at least one cell.
    #[error("invalid maze dimensions {width}x{height}: width and height must be between 1 and 255")]
    InvalidDimensions { width: u8, height: u8 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown maze generation algorithm: {0:?}")]
    UnknownGenerator(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("cannot open log file: {0}")]
    Log(#[from] tracing_appender::rolling::InitError),
}

pub type Result<T> = std::result::Result<T, Error>;
