use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            RepositoryError::Status(status.as_u16())
        } else if err.is_decode() {
            RepositoryError::Malformed(err.to_string())
        } else if err.is_builder() {
            RepositoryError::Unexpected(format!("Bad request definition: {err}"))
        } else {
            RepositoryError::Request(err.to_string())
        }
    }
}
