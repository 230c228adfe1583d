//! Playlist : file ordonnée par score, partagée derrière un RwLock

pub mod core;
pub mod record;

use self::core::PlaylistCore;
use self::record::EntryId;
use std::sync::Arc;
use tokio::sync::RwLock;

/// File ordonnée par score, partageable entre tâches
///
/// Les clones partagent la même file. Toutes les opérations sont totales :
/// la playlist ne renvoie jamais d'erreur.
pub struct Playlist<T> {
    core: Arc<RwLock<PlaylistCore<T>>>,
}

impl<T> Clone for Playlist<T> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T> Default for Playlist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Playlist<T> {
    pub fn new() -> Self {
        Self {
            core: Arc::new(RwLock::new(PlaylistCore::new())),
        }
    }

    /// Ajoute une entrée de score 0 en fin de file
    pub async fn add(&self, payload: T) -> EntryId {
        self.core.write().await.add(payload)
    }

    /// Ordre de lecture (tri en place sous verrou exclusif)
    pub async fn order(&self) -> Vec<EntryId> {
        self.core.write().await.order()
    }

    /// Ordre de lecture calculé sur un snapshot, sous verrou partagé
    pub async fn snapshot_order(&self) -> Vec<EntryId> {
        let core = self.core.read().await;
        core.ordered().iter().map(|r| r.id()).collect()
    }

    /// Supprime une entrée (parcours linéaire)
    pub async fn remove(&self, id: EntryId) -> Option<T> {
        self.core.write().await.remove(id)
    }

    pub async fn score(&self, id: EntryId) -> Option<i64> {
        self.core.read().await.score(id)
    }

    pub async fn set_score(&self, id: EntryId, score: i64) -> bool {
        self.core.write().await.set_score(id, score)
    }

    pub async fn adjust_score(&self, id: EntryId, delta: i64) -> Option<i64> {
        self.core.write().await.adjust_score(id, delta)
    }

    pub async fn payload(&self, id: EntryId) -> Option<T>
    where
        T: Clone,
    {
        self.core.read().await.get(id).map(|r| r.payload.clone())
    }

    pub async fn len(&self) -> usize {
        self.core.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.core.read().await.is_empty()
    }
}
