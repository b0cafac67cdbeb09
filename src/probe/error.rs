// src/probe/error.rs

/// Failures while talking to a monitored system. All of them are terminal
/// for the run and end up as an UNKNOWN result.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Authentication against {0} failed")]
    Authentication(String),

    #[error("Response from {url} is missing the {header} header")]
    MissingHeader { url: String, header: &'static str },

    #[error("Unexpected payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("SSH error: {0}")]
    Ssh(#[from] ssh2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ProbeError {
    /// Whether the target could not be reached or refused the request, as
    /// opposed to answering with something we could not understand.
    pub fn is_unreachable(&self) -> bool {
        !matches!(self, ProbeError::Parse(_))
    }
}
