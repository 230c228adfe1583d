//! Résolution d'une URL brute vers un média supporté

use crate::error::{Error, Result};
use crate::medium::{Medium, MediumKey};
use crate::provider::Provider;
use crate::youtube::{self, YouTubeVideo};
use serde::{Deserialize, Serialize};
use url::Url;

/// Médias reconnus par [`resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SupportedMedium {
    YouTube(YouTubeVideo),
}

impl Medium for SupportedMedium {
    fn provider(&self) -> Provider {
        match self {
            SupportedMedium::YouTube(video) => video.provider(),
        }
    }

    fn id(&self) -> &str {
        match self {
            SupportedMedium::YouTube(video) => video.id(),
        }
    }
}

impl From<SupportedMedium> for MediumKey {
    fn from(medium: SupportedMedium) -> Self {
        medium.key()
    }
}

/// Reconnaît un média à partir d'une URL
pub fn resolve(raw_url: &str) -> Result<SupportedMedium> {
    let url = Url::parse(raw_url.trim()).map_err(|_| Error::NotSupported)?;

    match url.host_str() {
        Some(host) if youtube::HOSTS.contains(&host) => {
            YouTubeVideo::from_url(&url).map(SupportedMedium::YouTube)
        }
        host => {
            tracing::debug!(host = ?host, path = url.path(), "Unsupported medium url");
            Err(Error::NotSupported)
        }
    }
}

/// Choisit l'URL candidate d'un message texte
///
/// Le texte lui-même s'il commence par un schéma http(s), sinon la première
/// URL d'entité du message, sinon le texte préfixé par `http://`.
pub fn first_url<'a, I>(text: &str, entity_urls: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let text = text.trim();
    if text.starts_with("https://") || text.starts_with("http://") {
        return text.to_string();
    }
    entity_urls
        .into_iter()
        .find(|url| !url.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("http://{}", text))
}
