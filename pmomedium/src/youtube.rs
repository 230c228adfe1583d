//! Vidéos YouTube

use crate::error::{Error, Result};
use crate::medium::Medium;
use crate::provider::Provider;
use serde::{Deserialize, Serialize};
use url::Url;

/// Longueur minimale d'un identifiant de vidéo YouTube
const MIN_VIDEO_ID_LEN: usize = 11;

/// Hôtes reconnus comme YouTube
pub(crate) const HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "youtu.be"];

/// Une vidéo YouTube, identifiée par son id de vidéo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YouTubeVideo {
    video_id: String,
}

impl YouTubeVideo {
    pub fn new<S: Into<String>>(video_id: S) -> Self {
        Self {
            video_id: video_id.into(),
        }
    }

    /// Extrait la vidéo d'une URL YouTube
    ///
    /// Le paramètre `v=` est prioritaire ; sinon le premier segment du chemin
    /// assez long pour être un id de vidéo est retenu.
    pub fn from_url(url: &Url) -> Result<Self> {
        if let Some((_, v)) = url.query_pairs().find(|(k, v)| k == "v" && !v.is_empty()) {
            return Ok(Self::new(v.into_owned()));
        }

        url.path_segments()
            .into_iter()
            .flatten()
            .find(|segment| segment.len() >= MIN_VIDEO_ID_LEN)
            .map(Self::new)
            .ok_or_else(|| Error::InvalidUrl(url.to_string()))
    }
}

impl Medium for YouTubeVideo {
    fn provider(&self) -> Provider {
        Provider::YOUTUBE
    }

    fn id(&self) -> &str {
        &self.video_id
    }
}
