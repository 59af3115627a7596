use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::error::StorageError),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Invalid cost {0}: bcrypt accepts 4 to 31")]
    InvalidCost(u32),
}
