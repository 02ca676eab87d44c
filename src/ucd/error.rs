use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid code point {0:?}")]
    CodePoint(String),
    #[error("invalid code point range {0:?}")]
    Range(String),
}
