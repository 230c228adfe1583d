//! RoomRegistry : rooms indexées par la clé de session du transport
//!
//! Le registre est un objet explicite, construit une fois par la couche de
//! transport (par exemple une room par chat) et partagé par `Arc`.

use crate::config_ext::RoomConfigExt;
use crate::events::DEFAULT_EVENT_CAPACITY;
use crate::room::{Participant, Room, RoomMedium};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

pub struct RoomRegistry<K, P, M> {
    rooms: RwLock<HashMap<K, Arc<Room<P, M>>>>,
    event_capacity: usize,
}

impl<K, P, M> Default for RoomRegistry<K, P, M>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    P: Participant,
    M: RoomMedium,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P, M> RoomRegistry<K, P, M>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    P: Participant,
    M: RoomMedium,
{
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Registre dont les rooms créées ont la capacité d'évènements donnée
    pub fn with_event_capacity(event_capacity: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            event_capacity,
        }
    }

    /// Registre configuré depuis pmoconfig
    pub fn from_config(config: &pmoconfig::Config) -> anyhow::Result<Self> {
        Ok(Self::with_event_capacity(config.get_room_event_capacity()?))
    }

    /// Room associée à `key`, si elle existe
    pub async fn room(&self, key: &K) -> Option<Arc<Room<P, M>>> {
        self.rooms.read().await.get(key).cloned()
    }

    /// Room associée à `key`, créée au besoin
    pub async fn get_or_create(&self, key: K) -> Arc<Room<P, M>> {
        if let Some(room) = self.room(&key).await {
            return room;
        }

        let mut rooms = self.rooms.write().await;
        rooms
            .entry(key)
            .or_insert_with_key(|key| {
                info!(room = ?key, "Creating room");
                Arc::new(Room::with_event_capacity(self.event_capacity))
            })
            .clone()
    }

    /// Retire une room du registre
    ///
    /// Les médias encore en file sont résolus en `Removed(RoomClosed)` quand
    /// la dernière référence à la room disparaît.
    pub async fn remove(&self, key: &K) -> Option<Arc<Room<P, M>>> {
        let room = self.rooms.write().await.remove(key);
        if room.is_some() {
            info!(room = ?key, "Room removed");
        }
        room
    }

    pub async fn keys(&self) -> Vec<K> {
        self.rooms.read().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{Outcome, RemovalReason};
    use pmomedium::MediumKey;

    type Registry = RoomRegistry<i64, u32, MediumKey>;

    #[tokio::test]
    async fn test_get_or_create_returns_same_room() {
        let registry = Registry::new();
        assert!(registry.room(&42).await.is_none());

        let room = registry.get_or_create(42).await;
        room.join(1).await;

        let again = registry.get_or_create(42).await;
        assert!(Arc::ptr_eq(&room, &again));
        assert!(again.is_member(&1).await);
        assert_eq!(registry.keys().await, vec![42]);
    }

    #[tokio::test]
    async fn test_rooms_are_independent() {
        let registry = Registry::new();
        let a = registry.get_or_create(1).await;
        let b = registry.get_or_create(2).await;

        a.join(7).await;
        assert!(!b.is_member(&7).await);
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn test_removed_room_closes_pending_media() {
        let registry = Registry::new();
        let room = registry.get_or_create(1).await;
        room.join(7).await;
        let completion = room.queue(7, MediumKey::new("foobar", "x")).await.unwrap();
        drop(room);

        assert!(registry.remove(&1).await.is_some());
        assert!(registry.is_empty().await);
        assert_eq!(
            completion.wait().await,
            Outcome::Removed(RemovalReason::RoomClosed)
        );
    }
}
