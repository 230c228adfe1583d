//! Record : entrée de la file ordonnée par score

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static LAST_ADDED_AT: AtomicI64 = AtomicI64::new(0);

/// Identifiant d'une entrée, stable pendant toute sa vie dans la file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) u64);

impl EntryId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Un enregistrement dans la file
///
/// Le score est modifiable ; `added_at` ne sert qu'à départager les
/// entrées de même score.
#[derive(Debug, Clone)]
pub struct Record<T> {
    pub(crate) id: EntryId,
    pub(crate) score: i64,
    pub(crate) added_at: SystemTime,
    pub payload: T,
}

impl<T> Record<T> {
    pub(crate) fn new(id: EntryId, payload: T) -> Self {
        Self {
            id,
            score: 0,
            added_at: next_timestamp(),
            payload,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Timestamp d'ajout, strictement croissant d'un record à l'autre
    pub fn added_at(&self) -> SystemTime {
        self.added_at
    }

    /// Ordre de lecture : score décroissant puis ancienneté
    pub(crate) fn play_order(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.added_at.cmp(&other.added_at))
    }
}

/// Horloge d'insertion strictement monotone, même si l'horloge système recule
fn next_timestamp() -> SystemTime {
    let now_nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as i64;

    let mut last = LAST_ADDED_AT.load(Ordering::Relaxed);
    loop {
        let candidate = if now_nanos > last {
            now_nanos
        } else {
            last.saturating_add(1)
        };

        match LAST_ADDED_AT.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return UNIX_EPOCH + Duration::from_nanos(candidate as u64),
            Err(updated) => last = updated,
        }
    }
}
