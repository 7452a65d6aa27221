use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("roster fetch failed: {0}")]
    Fetch(#[from] meet_client::ClientError),
}
