use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Logger error: {0}")]
    Logger(log::SetLoggerError),
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unicode data error: {0}")]
    Ucd(#[from] widthgen::ucd::Error),
}

impl From<log::SetLoggerError> for Error {
    fn from(other: log::SetLoggerError) -> Self {
        Self::Logger(other)
    }
}
