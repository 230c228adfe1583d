//! PlaylistCore : file ordonnée par score (structure non verrouillée)
//!
//! Les recherches par [`EntryId`] et les suppressions sont des parcours
//! linéaires, en O(n). Les files manipulées (une room, quelques dizaines de
//! médias) restent petites.

use super::record::{EntryId, Record};

/// Noyau de la playlist (protégé par le RwLock de son propriétaire)
#[derive(Debug)]
pub struct PlaylistCore<T> {
    records: Vec<Record<T>>,
    next_id: u64,
}

impl<T> Default for PlaylistCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PlaylistCore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
        }
    }

    /// Ajoute une entrée de score 0
    pub fn add(&mut self, payload: T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.records.push(Record::new(id, payload));
        id
    }

    /// Trie la file en place et retourne l'ordre de lecture
    pub fn order(&mut self) -> Vec<EntryId> {
        self.sort();
        self.records.iter().map(|r| r.id).collect()
    }

    /// Ordre de lecture calculé sur une copie, sans toucher à la file
    pub fn ordered(&self) -> Vec<&Record<T>> {
        let mut snapshot: Vec<&Record<T>> = self.records.iter().collect();
        snapshot.sort_by(|a, b| a.play_order(b));
        snapshot
    }

    /// Première entrée dans l'ordre de lecture
    pub fn head(&self) -> Option<&Record<T>> {
        self.records.iter().min_by(|a, b| a.play_order(b))
    }

    fn sort(&mut self) {
        self.records.sort_by(|a, b| a.play_order(b));
    }

    /// Supprime une entrée (parcours linéaire)
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos).payload)
    }

    /// Supprime toutes les entrées dont le payload vérifie `pred`
    ///
    /// L'ordre relatif des entrées restantes est conservé.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<(EntryId, T)>
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            if pred(&record.payload) {
                removed.push((record.id, record.payload));
            } else {
                kept.push(record);
            }
        }
        self.records = kept;
        removed
    }

    pub fn get(&self, id: EntryId) -> Option<&Record<T>> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Record<T>> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    pub fn score(&self, id: EntryId) -> Option<i64> {
        self.get(id).map(|r| r.score)
    }

    /// Fixe le score d'une entrée ; `false` si l'entrée n'existe pas
    pub fn set_score(&mut self, id: EntryId, score: i64) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.score = score;
                true
            }
            None => false,
        }
    }

    /// Ajoute `delta` au score d'une entrée et retourne le nouveau score
    pub fn adjust_score(&mut self, id: EntryId, delta: i64) -> Option<i64> {
        let record = self.get_mut(id)?;
        record.score += delta;
        Some(record.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record<T>> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Record<T>> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Vide la file et rend les payloads
    pub fn clear(&mut self) -> Vec<T> {
        self.records.drain(..).map(|r| r.payload).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_with(names: &[&'static str]) -> (PlaylistCore<&'static str>, Vec<EntryId>) {
        let mut core = PlaylistCore::new();
        let ids = names.iter().map(|n| core.add(*n)).collect();
        (core, ids)
    }

    fn payloads(core: &mut PlaylistCore<&'static str>) -> Vec<&'static str> {
        core.order()
            .into_iter()
            .map(|id| core.get(id).unwrap().payload)
            .collect()
    }

    #[test]
    fn test_new_entries_keep_insertion_order() {
        let (mut core, ids) = core_with(&["a", "b", "c"]);
        assert_eq!(core.order(), ids);
        assert!(ids.iter().all(|id| core.score(*id) == Some(0)));
    }

    #[test]
    fn test_order_by_score_then_age() {
        let (mut core, ids) = core_with(&["a", "b", "c"]);
        core.set_score(ids[0], 2);
        core.set_score(ids[1], 2);
        assert_eq!(payloads(&mut core), vec!["a", "b", "c"]);

        core.set_score(ids[1], 3);
        assert_eq!(payloads(&mut core), vec!["b", "a", "c"]);

        core.set_score(ids[0], -1);
        assert_eq!(payloads(&mut core), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_order_is_idempotent() {
        let (mut core, ids) = core_with(&["a", "b", "c", "d"]);
        core.set_score(ids[3], 1);
        core.set_score(ids[2], 1);
        let first = core.order();
        assert_eq!(core.order(), first);
        assert_eq!(core.order(), first);
        assert_eq!(first, vec![ids[2], ids[3], ids[0], ids[1]]);
    }

    #[test]
    fn test_ordered_snapshot_matches_order() {
        let (mut core, ids) = core_with(&["a", "b", "c"]);
        core.adjust_score(ids[2], 5);
        let snapshot: Vec<EntryId> = core.ordered().iter().map(|r| r.id()).collect();
        assert_eq!(core.head().map(|r| r.id()), Some(ids[2]));
        assert_eq!(snapshot, core.order());
    }

    #[test]
    fn test_remove() {
        let (mut core, ids) = core_with(&["a", "b", "c"]);
        assert_eq!(core.remove(ids[1]), Some("b"));
        assert_eq!(core.remove(ids[1]), None);
        assert_eq!(core.len(), 2);
        assert_eq!(payloads(&mut core), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_where() {
        let (mut core, ids) = core_with(&["keep", "drop", "keep too", "drop"]);
        let removed = core.remove_where(|p| *p == "drop");
        assert_eq!(removed, vec![(ids[1], "drop"), (ids[3], "drop")]);
        assert_eq!(payloads(&mut core), vec!["keep", "keep too"]);
    }

    #[test]
    fn test_adjust_score() {
        let (mut core, ids) = core_with(&["a"]);
        assert_eq!(core.adjust_score(ids[0], 1), Some(1));
        assert_eq!(core.adjust_score(ids[0], -2), Some(-1));
        core.remove(ids[0]);
        assert_eq!(core.adjust_score(ids[0], 1), None);
        assert!(!core.set_score(ids[0], 1));
    }
}
