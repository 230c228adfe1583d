//! Types d'erreurs pour pmoroom

use pmomedium::MediumKey;

/// Erreurs renvoyées par les opérations d'une room
///
/// Aucune n'est fatale : la room reste utilisable après un échec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Participant unknown")]
    UnknownParticipant,

    #[error("Medium unknown: {0}")]
    UnknownMedium(MediumKey),

    #[error("Medium already queued: {0}")]
    DuplicateMedium(MediumKey),
}

/// Type Result spécialisé pour pmoroom
pub type Result<T> = std::result::Result<T, Error>;
