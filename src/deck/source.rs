use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::{Deck, DeckPayload, ParseError, parser};

const SLIDES_ENDPOINT: &str = "/api/slides";

/// Why a deck could not be loaded. Fatal to presenter initialisation.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load slides: {0}")]
    Network(String),
    #[error("Failed to load slides: {reason}")]
    Status { status: u16, reason: String },
    #[error("Invalid slide data: {0}")]
    Malformed(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("No slides found in presentation")]
    Empty,
    #[error("Slide count mismatch: total is {total} but {actual} slides were sent")]
    TotalMismatch { total: usize, actual: usize },
}

impl LoadError {
    /// Build the error for a non-success HTTP answer from its status reason text.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        LoadError::Status { status: status.as_u16(), reason }
    }
}

/// Where the presenter fetches its deck from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// Parse a local markdown file.
    File(PathBuf),
    /// GET a deck payload from another producer (full endpoint URL).
    Remote(String),
}

impl DeckSource {
    /// Accepts either a server base URL or the full `/api/slides` URL.
    pub fn remote(url: &str) -> Self {
        let url = url.trim_end_matches('/');
        if url.ends_with(SLIDES_ENDPOINT) {
            DeckSource::Remote(url.to_string())
        } else {
            DeckSource::Remote(format!("{url}{SLIDES_ENDPOINT}"))
        }
    }

    /// Single attempt, no retry.
    pub async fn load(&self) -> Result<Deck, LoadError> {
        let payload = match self {
            DeckSource::File(path) => parser::load_file(path).await?,
            DeckSource::Remote(url) => fetch_remote(url).await?,
        };
        Deck::from_payload(payload)
    }
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSource::File(path) => write!(f, "{}", path.display()),
            DeckSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

async fn fetch_remote(url: &str) -> Result<DeckPayload, LoadError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::from_status(status));
    }

    response
        .json::<DeckPayload>()
        .await
        .map_err(|e| LoadError::Malformed(e.to_string()))
}
