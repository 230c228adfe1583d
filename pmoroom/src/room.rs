//! Room : participants, médias en file et votes d'une session partagée

use crate::completion::{self, Completion, Outcome, RemovalReason, Resolver};
use crate::error::{Error, Result};
use crate::events::{RoomEvent, DEFAULT_EVENT_CAPACITY};
use pmomedium::{Medium, MediumKey};
use pmoplaylist::{EntryId, PlaylistCore};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

/// Identité d'un participant, fournie par la couche de transport
pub trait Participant: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> Participant for T where T: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

/// Média pouvant être mis en file dans une room
pub trait RoomMedium: Medium + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> RoomMedium for T where T: Medium + Clone + fmt::Debug + Send + Sync + 'static {}

/// Ramène un vote dans `{-1, 0, +1}`
fn clamp_gravity(gravity: i32) -> i8 {
    gravity.clamp(-1, 1) as i8
}

/// Un média en file, avec son propriétaire et ses votes
///
/// Le score lui-même est porté par la playlist et vaut toujours la somme
/// des `ballots`.
#[derive(Debug)]
struct QueuedMedium<P, M> {
    medium: M,
    key: MediumKey,
    owner: P,
    ballots: HashMap<P, i8>,
    resolver: Resolver,
}

impl<P: Participant, M> QueuedMedium<P, M> {
    /// Enregistre le vote de `voter` et retourne la variation de score
    ///
    /// Un vote à 0 supprime le bulletin au lieu de le stocker.
    fn cast(&mut self, voter: &P, gravity: i8) -> i64 {
        let previous = if gravity == 0 {
            self.ballots.remove(voter)
        } else {
            self.ballots.insert(voter.clone(), gravity)
        };
        i64::from(gravity - previous.unwrap_or(0))
    }
}

/// État protégé par le verrou unique de la room
#[derive(Debug)]
struct RoomState<P, M> {
    participants: HashSet<P>,
    queue: PlaylistCore<QueuedMedium<P, M>>,
    index: HashMap<MediumKey, EntryId>,
}

impl<P: Participant, M: RoomMedium> RoomState<P, M> {
    fn new() -> Self {
        Self {
            participants: HashSet::new(),
            queue: PlaylistCore::new(),
            index: HashMap::new(),
        }
    }

    fn ensure_member(&self, participant: &P) -> Result<()> {
        if self.participants.contains(participant) {
            Ok(())
        } else {
            Err(Error::UnknownParticipant)
        }
    }

    /// Retire une entrée de la file et de l'index
    fn take(&mut self, id: EntryId) -> Option<QueuedMedium<P, M>> {
        let entry = self.queue.remove(id)?;
        self.index.remove(&entry.key);
        Some(entry)
    }
}

/// Room où les participants mettent des médias en file et votent l'ordre
/// de lecture
///
/// Un seul verrou protège ensemble les participants, la file et l'index
/// des médias : chaque opération est atomique vis-à-vis des autres.
pub struct Room<P, M> {
    state: Arc<RwLock<RoomState<P, M>>>,
    events: broadcast::Sender<RoomEvent<P, M>>,
}

impl<P: Participant, M: RoomMedium> Default for Room<P, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Participant, M: RoomMedium> Room<P, M> {
    /// Crée une room vide
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Crée une room vide dont le canal d'évènements a la capacité donnée
    pub fn with_event_capacity(capacity: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(RoomState::new())),
            events: broadcast::channel(capacity.max(1)).0,
        }
    }

    /// S'abonne aux évènements de la room
    pub fn subscribe(&self) -> broadcast::Receiver<RoomEvent<P, M>> {
        self.events.subscribe()
    }

    fn emit(&self, event: RoomEvent<P, M>) {
        // aucun abonné n'est un cas normal
        let _ = self.events.send(event);
    }

    /// Ajoute un participant ; retourne `false` s'il était déjà présent
    pub async fn join(&self, participant: P) -> bool {
        let mut state = self.state.write().await;
        if !state.participants.insert(participant.clone()) {
            return false;
        }
        debug!(participant = ?participant, "Participant joined room");
        self.emit(RoomEvent::Joined(participant));
        true
    }

    /// Retire un participant avec ses médias et ses votes
    ///
    /// Les médias qu'il avait ajoutés sont retirés (completion résolue en
    /// `Removed(OwnerLeft)`) et ses votes sur les autres médias sont annulés,
    /// le tout dans la même section critique. Sans effet si le participant
    /// est inconnu.
    pub async fn leave(&self, participant: &P) -> bool {
        let mut state = self.state.write().await;
        if !state.participants.remove(participant) {
            return false;
        }

        let removed = state.queue.remove_where(|entry| &entry.owner == participant);
        let removed_count = removed.len();
        for (_, entry) in removed {
            state.index.remove(&entry.key);
            let reason = RemovalReason::OwnerLeft;
            entry.resolver.resolve(Outcome::Removed(reason));
            self.emit(RoomEvent::Removed {
                medium: entry.medium,
                reason,
            });
        }

        let mut adjusted = Vec::new();
        for record in state.queue.iter_mut() {
            let delta = record.payload.cast(participant, 0);
            if delta != 0 {
                adjusted.push((record.id(), delta, record.payload.medium.clone()));
            }
        }
        for (id, delta, medium) in &adjusted {
            if let Some(score) = state.queue.adjust_score(*id, *delta) {
                self.emit(RoomEvent::Voted {
                    medium: medium.clone(),
                    voter: participant.clone(),
                    score,
                });
            }
        }

        info!(
            participant = ?participant,
            removed_media = removed_count,
            cleared_votes = adjusted.len(),
            "Participant left room"
        );
        self.emit(RoomEvent::Left(participant.clone()));
        true
    }

    /// Met un média en file pour le compte de `participant`
    ///
    /// La [`Completion`] rendue sera résolue exactement une fois : `Played`
    /// quand le média est joué, `Removed` s'il quitte la file sans l'être.
    pub async fn queue(&self, participant: P, medium: M) -> Result<Completion> {
        let key = medium.key();
        let mut state = self.state.write().await;

        if let Err(e) = state.ensure_member(&participant) {
            debug!(participant = ?participant, medium = %key, "Queue rejected: {}", e);
            return Err(e);
        }
        if state.index.contains_key(&key) {
            debug!(participant = ?participant, medium = %key, "Queue rejected: duplicate");
            return Err(Error::DuplicateMedium(key));
        }

        let (resolver, completion) = completion::channel();
        let id = state.queue.add(QueuedMedium {
            medium: medium.clone(),
            key: key.clone(),
            owner: participant.clone(),
            ballots: HashMap::new(),
            resolver,
        });
        state.index.insert(key.clone(), id);

        debug!(participant = ?participant, medium = %key, "Medium queued");
        self.emit(RoomEvent::Queued {
            medium,
            owner: participant,
        });
        Ok(completion)
    }

    /// Marque un média comme joué et le retire de la file
    ///
    /// Sans effet (retourne `false`) si le média n'est pas en file.
    pub async fn mark_played(&self, medium: &M) -> bool {
        let key = medium.key();
        let mut state = self.state.write().await;
        let Some(id) = state.index.get(&key).copied() else {
            return false;
        };
        self.finish_played(&mut state, id).is_some()
    }

    /// Prend la tête de file et la marque comme jouée, atomiquement
    pub async fn pop_next(&self) -> Option<M> {
        let mut state = self.state.write().await;
        let id = state.queue.head()?.id();
        self.finish_played(&mut state, id)
    }

    fn finish_played(&self, state: &mut RoomState<P, M>, id: EntryId) -> Option<M> {
        let entry = state.take(id)?;
        entry.resolver.resolve(Outcome::Played);
        info!(medium = %entry.key, "Medium played");
        self.emit(RoomEvent::Played(entry.medium.clone()));
        Some(entry.medium)
    }

    /// Enregistre le vote d'un participant sur un média
    ///
    /// `gravity` vaut +1 pour un vote pour, -1 contre, 0 pour annuler ; toute
    /// autre valeur est ramenée à la borne la plus proche. Retourne le
    /// nouveau score du média.
    pub async fn vote(&self, participant: &P, medium: &M, gravity: i32) -> Result<i64> {
        let gravity = clamp_gravity(gravity);
        let key = medium.key();
        let mut state = self.state.write().await;

        state.ensure_member(participant)?;
        let id = match state.index.get(&key) {
            Some(id) => *id,
            None => return Err(Error::UnknownMedium(key)),
        };
        let delta = match state.queue.get_mut(id) {
            Some(record) => record.payload.cast(participant, gravity),
            None => return Err(Error::UnknownMedium(key)),
        };
        let score = state
            .queue
            .adjust_score(id, delta)
            .ok_or_else(|| Error::UnknownMedium(key.clone()))?;

        debug!(participant = ?participant, medium = %key, gravity, score, "Vote applied");
        self.emit(RoomEvent::Voted {
            medium: medium.clone(),
            voter: participant.clone(),
            score,
        });
        Ok(score)
    }

    /// Score d'un média, `None` s'il n'est pas en file
    pub async fn score(&self, medium: &M) -> Option<i64> {
        let key = medium.key();
        let state = self.state.read().await;
        let id = state.index.get(&key)?;
        state.queue.score(*id)
    }

    /// Médias dans leur ordre de lecture
    pub async fn queue_order(&self) -> Vec<M> {
        let state = self.state.read().await;
        state
            .queue
            .ordered()
            .into_iter()
            .map(|record| record.payload.medium.clone())
            .collect()
    }

    /// Médias dans leur ordre de lecture, avec leur score
    pub async fn standings(&self) -> Vec<(M, i64)> {
        let state = self.state.read().await;
        state
            .queue
            .ordered()
            .into_iter()
            .map(|record| (record.payload.medium.clone(), record.score()))
            .collect()
    }

    pub async fn is_member(&self, participant: &P) -> bool {
        self.state.read().await.participants.contains(participant)
    }

    pub async fn participant_count(&self) -> usize {
        self.state.read().await.participants.len()
    }

    /// Nombre de médias en file
    pub async fn len(&self) -> usize {
        self.state.read().await.queue.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.queue.is_empty()
    }
}
