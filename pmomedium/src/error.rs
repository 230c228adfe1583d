//! Erreurs de résolution des médias

/// Erreurs renvoyées par [`crate::resolve`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("medium is not supported")]
    NotSupported,

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Type Result spécialisé pour pmomedium
pub type Result<T> = std::result::Result<T, Error>;
