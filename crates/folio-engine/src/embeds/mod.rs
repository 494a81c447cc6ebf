//! # Embed Resolution
//!
//! Classifies a URL as a YouTube, Twitter/X or Instagram embed and extracts
//! the content id the embed widget needs.
//!
//! Classification never fails: a URL that cannot be embedded comes back
//! with provider [`EmbedProvider::Unknown`] and an [`EmbedError`] explaining
//! why. A recognised host whose id cannot be found is also reported as
//! `Unknown`, since the link is unusable for embedding.

pub mod provider;

pub use provider::EmbedProvider;

use serde::{Serialize, Serializer};
use url::Url;

/// Why a URL could not be classified as an embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    #[error("invalid URL format")]
    InvalidUrl,
    #[error("invalid format")]
    InvalidFormat,
    #[error("unsupported URL type")]
    Unsupported,
}

impl Serialize for EmbedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of classifying a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedInfo {
    pub provider: EmbedProvider,
    pub id: Option<String>,
    pub error: Option<EmbedError>,
}

impl EmbedInfo {
    fn embed(provider: EmbedProvider, id: String) -> Self {
        Self {
            provider,
            id: Some(id),
            error: None,
        }
    }

    fn unknown(error: EmbedError) -> Self {
        Self {
            provider: EmbedProvider::Unknown,
            id: None,
            error: Some(error),
        }
    }

    /// True when the URL resolved to a provider and content id.
    pub fn is_resolved(&self) -> bool {
        self.error.is_none()
    }
}

/// Classifies `url` into an embed provider and content id.
pub fn classify(url: &str) -> EmbedInfo {
    let Ok(parsed) = Url::parse(url) else {
        return EmbedInfo::unknown(EmbedError::InvalidUrl);
    };

    let provider = parsed
        .host_str()
        .map_or(EmbedProvider::Unknown, EmbedProvider::for_host);
    if provider == EmbedProvider::Unknown {
        return EmbedInfo::unknown(EmbedError::Unsupported);
    }

    match provider.extract_id(&parsed) {
        Some(id) => EmbedInfo::embed(provider, id),
        None => EmbedInfo::unknown(EmbedError::InvalidFormat),
    }
}

/// Whether `url` points at a known embed host, whether or not an id can be
/// extracted from it.
pub fn is_embeddable(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(EmbedProvider::for_host))
        .is_some_and(|provider| provider != EmbedProvider::Unknown)
}
