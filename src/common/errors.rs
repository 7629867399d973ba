use thiserror::Error;

/// Failures talking to the CMS read API.
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("HTTP {status} {reason}")]
    Http { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed CMS response: {0}")]
    Decode(String),
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for CmsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
