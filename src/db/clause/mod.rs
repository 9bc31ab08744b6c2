/*!
The clause database --- the unprocessed and processed clause sets of a saturation.

Clauses live in a single [SlotMap] store, and the two sets are lists of keys into the store:

- **Unprocessed** clauses are waiting to be picked as a given clause, in insertion order.
- **Processed** clauses have been given, and every pair of processed clauses has had its resolvents computed.

Backward subsumption removes clauses from the store directly, leaving stale keys in the lists.
Stale keys are harmless --- a removed slot yields nothing --- and are compacted away when a list is next walked.

The [given-clause pick](ClauseDB::pick_given) implements the clause-selection heuristics.
Ties fall to the clause recorded first, so a pick is deterministic for a given store history.
*/

use slotmap::SlotMap;

use crate::{
    config::ClauseHeuristic,
    db::ClauseKey,
    misc::log::targets,
    procedures::subsumption::{properly_subsumes, subsumes},
    structures::clause::Clause,
};

/// The clause sets of a saturation.
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// Backing storage for both clause sets.
    store: SlotMap<ClauseKey, Clause>,

    /// Keys of clauses waiting to be given, in insertion order.
    unprocessed: Vec<ClauseKey>,

    /// Keys of clauses which have been given.
    processed: Vec<ClauseKey>,
}

impl ClauseDB {
    /// Stores `clause` and appends it to the unprocessed set.
    pub fn insert(&mut self, clause: Clause) -> ClauseKey {
        log::trace!(target: targets::CLAUSE_DB, "+c{}: {clause}", clause.id);
        let key = self.store.insert(clause);
        self.unprocessed.push(key);
        key
    }

    /// The clause under `key`, if it has not been removed.
    pub fn get(&self, key: ClauseKey) -> Option<&Clause> {
        self.store.get(key)
    }

    /// Sets the selection bitmap of the clause under `key`.
    pub fn set_selection(&mut self, key: ClauseKey, selected: Vec<bool>) {
        if let Some(clause) = self.store.get_mut(key) {
            clause.selected = selected;
        }
    }

    /// Removes the clause under `key` from the store.
    pub fn remove(&mut self, key: ClauseKey) -> Option<Clause> {
        self.store.remove(key)
    }

    /// Every live clause, processed or unprocessed.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.store.values()
    }

    /// The number of live unprocessed clauses.
    pub fn unprocessed_count(&self) -> usize {
        self.unprocessed.iter().filter(|key| self.store.contains_key(**key)).count()
    }

    /// The number of live processed clauses.
    pub fn processed_count(&self) -> usize {
        self.processed.iter().filter(|key| self.store.contains_key(**key)).count()
    }

    /// Removes and returns the key of the next given clause, per `heuristic`.
    ///
    /// `picks` counts the picks made so far, for the round-robin of [PickGiven](ClauseHeuristic::PickGiven).
    pub fn pick_given(&mut self, heuristic: &ClauseHeuristic, picks: &mut usize) -> Option<ClauseKey> {
        let store = &self.store;
        self.unprocessed.retain(|key| store.contains_key(*key));

        if self.unprocessed.is_empty() {
            return None;
        }

        let by_age = 0;
        let by_weight = self
            .unprocessed
            .iter()
            .enumerate()
            .min_by_key(|(_, key)| (self.store[**key].weight, self.store[**key].id))
            .map(|(position, _)| position)
            .expect("unprocessed is non-empty");

        let position = match heuristic {
            ClauseHeuristic::Fifo => by_age,
            ClauseHeuristic::SymbolCount => by_weight,
            ClauseHeuristic::PickGiven(ratio) => match *picks % (*ratio as usize) == 0 {
                true => by_age,
                false => by_weight,
            },
        };
        *picks += 1;

        Some(self.unprocessed.remove(position))
    }

    /// Appends `key` to the processed set.
    pub fn activate(&mut self, key: ClauseKey) {
        self.processed.push(key);
    }

    /// The keys of the live processed clauses, as a snapshot safe to walk while the store changes.
    pub fn processed_snapshot(&self) -> Vec<ClauseKey> {
        self.processed
            .iter()
            .copied()
            .filter(|key| self.store.contains_key(*key))
            .collect()
    }

    /// The live processed clauses, in identifier order.
    pub fn processed_clauses(&self) -> Vec<&Clause> {
        let mut clauses: Vec<&Clause> = self
            .processed
            .iter()
            .filter_map(|key| self.store.get(*key))
            .collect();
        clauses.sort_by_key(|clause| clause.id);
        clauses
    }

    /// The identifier of a processed clause subsuming `clause`, if any.
    pub fn subsumed_by_processed(&self, clause: &Clause) -> Option<usize> {
        self.processed
            .iter()
            .filter_map(|key| self.store.get(*key))
            .find(|processed| subsumes(processed, clause))
            .map(|processed| processed.id)
    }

    /// The identifier of any kept clause --- processed or unprocessed --- subsuming `clause`.
    pub fn subsumed_by_any(&self, clause: &Clause) -> Option<usize> {
        self.store
            .values()
            .find(|kept| subsumes(kept, clause))
            .map(|kept| kept.id)
    }

    /// Removes every kept clause properly subsumed by `clause`, except the clause under `exclude`.
    ///
    /// Returns the number of clauses removed.
    pub fn backward_subsume(&mut self, clause: &Clause, exclude: Option<ClauseKey>) -> usize {
        let victims: Vec<ClauseKey> = self
            .store
            .iter()
            .filter(|(key, kept)| Some(*key) != exclude && properly_subsumes(clause, kept))
            .map(|(key, _)| key)
            .collect();

        for victim in &victims {
            if let Some(removed) = self.store.remove(*victim) {
                log::debug!(target: targets::SUBSUMPTION,
                    "c{} backward subsumed by c{}", removed.id, clause.id);
            }
        }

        victims.len()
    }
}
