use thiserror::Error;

pub type Result<T> = std::result::Result<T, RpsError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RpsError {
    #[error("verification failed: {0}")]
    Verification(String),
}
