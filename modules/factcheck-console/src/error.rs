use factcheck_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Why an analysis attempt ended without a report. The display text is what
/// the error surface shows.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Missing input caught before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-success status.
    #[error("{0}")]
    Request(ClientError),

    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(ClientError),

    /// The job reached `failed`.
    #[error("{0}")]
    JobFailed(String),
}

impl From<ClientError> for AnalysisError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request { .. } => AnalysisError::Request(err),
            _ => AnalysisError::Transport(err),
        }
    }
}
