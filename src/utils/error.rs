use crate::system::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, ZelError>;
