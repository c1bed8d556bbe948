use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamingError {
    #[error("Reset failed: {0}")]
    ResetFailed(String),

    #[error("Unknown naming convention: '{0}'")]
    UnknownConvention(String),
}

pub type Result<T> = std::result::Result<T, NamingError>;
