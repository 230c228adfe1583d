//! Contrat d'identité des médias

use crate::provider::Provider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Un média partageable dans une room (vidéo YouTube, morceau, ...)
///
/// Seule l'identité compte : le contenu d'un média n'est jamais inspecté.
pub trait Medium {
    /// Provider du média
    fn provider(&self) -> Provider;

    /// Identifiant opaque, significatif uniquement pour son provider
    fn id(&self) -> &str;

    /// Identité concrète du média
    fn key(&self) -> MediumKey {
        MediumKey::new(self.provider(), self.id())
    }
}

/// Identité `(provider, id)` d'un média
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MediumKey {
    pub provider: Provider,
    pub id: String,
}

impl MediumKey {
    pub fn new<P: Into<Provider>, S: Into<String>>(provider: P, id: S) -> Self {
        Self {
            provider: provider.into(),
            id: id.into(),
        }
    }
}

impl Medium for MediumKey {
    fn provider(&self) -> Provider {
        self.provider.clone()
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> MediumKey {
        self.clone()
    }
}

impl fmt::Display for MediumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.id)
    }
}

/// Indique si deux médias sont le même média
pub fn identical<A, B>(a: &A, b: &B) -> bool
where
    A: Medium + ?Sized,
    B: Medium + ?Sized,
{
    a.provider() == b.provider() && a.id() == b.id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YouTubeVideo;

    #[test]
    fn test_identical() {
        let cases = [
            (MediumKey::new("foo", "1234"), MediumKey::new("bar", "abcd"), false),
            (MediumKey::new("foo", "1234"), MediumKey::new("foo", "9999"), false),
            (MediumKey::new("foo", "1111"), MediumKey::new("bar", "1111"), false),
            (MediumKey::new("foo", "1111"), MediumKey::new("foo", "1111"), true),
        ];

        for (a, b, expected) in cases {
            assert_eq!(identical(&a, &b), expected, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_identical_across_types() {
        let video = YouTubeVideo::new("cNtZAbq2Ig4");
        let key = MediumKey::new(Provider::YOUTUBE, "cNtZAbq2Ig4");
        assert!(identical(&video, &key));
        assert_eq!(video.key(), key);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(MediumKey::new("youtube", "abc").to_string(), "youtube:abc");
    }
}
