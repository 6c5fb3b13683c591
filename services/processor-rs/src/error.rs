use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// stdout went away (closed pipe, full disk on redirect, ...)
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
