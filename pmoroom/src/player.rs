//! Player : consommateur de la file d'une room
//!
//! Attend qu'un média soit en tête de file, le retire en le marquant joué
//! et le rend à l'appelant (typiquement un lecteur web connecté à la room).

use crate::config_ext::RoomConfigExt;
use crate::room::{Participant, Room, RoomMedium};
use std::sync::Arc;
use std::time::Duration;

/// Intervalle par défaut entre deux consultations de la file
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub struct Player<P, M> {
    room: Arc<Room<P, M>>,
    poll_interval: Duration,
}

impl<P: Participant, M: RoomMedium> Player<P, M> {
    pub fn new(room: Arc<Room<P, M>>, poll_interval: Duration) -> Self {
        Self {
            room,
            poll_interval,
        }
    }

    /// Player dont l'intervalle de consultation vient de pmoconfig
    pub fn from_config(room: Arc<Room<P, M>>, config: &pmoconfig::Config) -> anyhow::Result<Self> {
        Ok(Self::new(room, config.get_player_poll_interval()?))
    }

    pub fn room(&self) -> &Arc<Room<P, M>> {
        &self.room
    }

    /// Prochain média à jouer, déjà marqué comme joué
    ///
    /// Se réveille sur les évènements de la room et, à défaut, consulte la
    /// file à intervalle régulier. Dropper le futur annule l'attente sans
    /// rien retirer de la file.
    pub async fn next(&self) -> M {
        let mut events = self.room.subscribe();
        loop {
            if let Some(medium) = self.room.pop_next().await {
                return medium;
            }
            tokio::select! {
                _ = events.recv() => {}
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::Outcome;
    use pmomedium::MediumKey;

    #[tokio::test]
    async fn test_next_takes_the_head() {
        let room: Arc<Room<u32, MediumKey>> = Arc::new(Room::new());
        room.join(1).await;
        let first = room.queue(1, MediumKey::new("foobar", "a")).await.unwrap();
        room.queue(1, MediumKey::new("foobar", "b")).await.unwrap();

        let player = Player::new(room.clone(), Duration::from_millis(10));
        assert_eq!(player.next().await, MediumKey::new("foobar", "a"));
        assert_eq!(first.outcome(), Some(Outcome::Played));
        assert_eq!(room.queue_order().await, vec![MediumKey::new("foobar", "b")]);
    }

    #[tokio::test]
    async fn test_next_waits_for_a_medium() {
        let room: Arc<Room<u32, MediumKey>> = Arc::new(Room::new());
        room.join(1).await;

        let player = Player::new(room.clone(), Duration::from_secs(60));
        let waiting = tokio::spawn(async move { player.next().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiting.is_finished());

        let completion = room.queue(1, MediumKey::new("foobar", "late")).await.unwrap();
        let played = tokio::time::timeout(Duration::from_secs(5), waiting)
            .await
            .expect("player should wake up on queue event")
            .unwrap();

        assert_eq!(played, MediumKey::new("foobar", "late"));
        assert_eq!(completion.wait().await, Outcome::Played);
    }

    #[tokio::test]
    async fn test_cancelled_next_leaves_queue_untouched() {
        let room: Arc<Room<u32, MediumKey>> = Arc::new(Room::new());
        let player = Player::new(room.clone(), Duration::from_millis(5));

        let result = tokio::time::timeout(Duration::from_millis(30), player.next()).await;
        assert!(result.is_err());

        room.join(1).await;
        room.queue(1, MediumKey::new("foobar", "a")).await.unwrap();
        assert_eq!(room.len().await, 1);
    }
}
