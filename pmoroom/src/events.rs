//! Évènements émis par une room
//!
//! Diffusés sur un canal `tokio::sync::broadcast` : la couche de transport
//! s'y abonne pour rafraîchir ses messages (score d'un média, boutons de
//! vote à retirer, ...). L'absence d'abonné n'est pas une erreur.

use crate::completion::RemovalReason;

/// Capacité par défaut du canal d'évènements d'une room
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent<P, M> {
    Joined(P),
    Left(P),
    Queued { medium: M, owner: P },
    Voted { medium: M, voter: P, score: i64 },
    Played(M),
    Removed { medium: M, reason: RemovalReason },
}
