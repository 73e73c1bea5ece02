#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Not found")]
    NotFound,

    #[error("Status code: {0}")]
    StatusCode(u16),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid url: {0}")]
    Url(String),

    #[error("Invalid response")]
    InvalidResponse,
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// HTTP status behind the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::StatusCode(code) => Some(*code),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::Url(_) | Self::InvalidResponse => None,
        }
    }
}
