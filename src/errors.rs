use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the client-credentials token exchange.
///
/// A non-200 response from the token endpoint carries the returned status
/// so the user can distinguish bad credentials (401) from service trouble.
/// Authentication failures halt the pipeline; no further requests are made.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("token endpoint returned status {0}")]
    Status(StatusCode),

    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure modes of the free-text summary query.
///
/// Summary failures are non-fatal: the caller surfaces them as a warning
/// and the rest of the artist detail still renders.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("completion endpoint returned status {0}")]
    Status(StatusCode),

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion response contained no choices")]
    EmptyResponse,
}
