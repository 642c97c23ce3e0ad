use thiserror::Error;

/// Failure modes of one weather fetch.
///
/// Both variants are recoverable: the widget shows a failure panel and waits
/// for the next city change.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure reaching the weather provider.
    #[error("failed to reach weather provider: {0}")]
    Network(#[source] reqwest::Error),

    /// HTTP error status, or a response body missing the expected fields.
    #[error("invalid response from weather provider: {0}")]
    InvalidResponse(String),
}

/// The host could not supply a usable user profile.
///
/// Never fatal: the city resolver falls back to the default city.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("host profile request failed: {0}")]
    Unavailable(String),
}
