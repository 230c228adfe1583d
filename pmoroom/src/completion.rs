//! Completion : issue unique d'un média mis en file
//!
//! Chaque entrée de la file possède un [`Resolver`] côté room et rend une
//! [`Completion`] à celui qui l'a ajoutée. Le resolver est consommé par sa
//! résolution, une entrée ne peut donc être notifiée qu'une seule fois.

use tokio::sync::watch;

/// Raison du retrait d'un média qui n'a pas été joué
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    /// Le participant qui l'avait ajouté a quitté la room
    OwnerLeft,
    /// La room a été détruite avec le média encore en file
    RoomClosed,
}

/// Issue finale d'une entrée
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Played,
    Removed(RemovalReason),
}

impl Outcome {
    pub fn is_played(&self) -> bool {
        matches!(self, Outcome::Played)
    }
}

/// Côté room : résout la completion exactement une fois
#[derive(Debug)]
pub(crate) struct Resolver {
    tx: Option<watch::Sender<Option<Outcome>>>,
}

impl Resolver {
    pub(crate) fn resolve(mut self, outcome: Outcome) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Outcome) {
        if let Some(tx) = self.tx.take() {
            // ne bloque jamais, même sans récepteur
            tx.send_replace(Some(outcome));
        }
    }
}

impl Drop for Resolver {
    fn drop(&mut self) {
        self.send(Outcome::Removed(RemovalReason::RoomClosed));
    }
}

/// Côté appelant : attend l'issue d'un média mis en file
///
/// Les clones observent tous la même valeur. Abandonner l'attente (ou
/// dropper la completion) n'a aucun effet sur la room.
#[derive(Debug, Clone)]
pub struct Completion {
    rx: watch::Receiver<Option<Outcome>>,
}

impl Completion {
    /// Issue si elle est déjà connue, sans attendre
    pub fn outcome(&self) -> Option<Outcome> {
        *self.rx.borrow()
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome().is_some()
    }

    /// Attend l'issue de l'entrée
    pub async fn wait(&self) -> Outcome {
        let mut rx = self.rx.clone();
        let outcome = rx.wait_for(Option::is_some).await.ok().and_then(|value| *value);
        outcome.unwrap_or(Outcome::Removed(RemovalReason::RoomClosed))
    }
}

pub(crate) fn channel() -> (Resolver, Completion) {
    let (tx, rx) = watch::channel(None);
    (Resolver { tx: Some(tx) }, Completion { rx })
}
