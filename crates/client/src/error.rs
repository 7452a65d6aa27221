use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid timezone offset '{value}': expected GMT, a sign and HHMM (e.g GMT +0800, GMT -1130)")]
    InvalidTimezone { value: String },
}
