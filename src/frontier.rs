use crate::state::FusionState;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// The live states at a generation boundary. No two members share a
/// remainder pair: states with equal remainders expand identically, so one
/// representative per class is enough to bound the frontier by the number
/// of distinct remainder pairs instead of by path history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    states: Vec<FusionState>,
}

impl Frontier {
    pub fn seed() -> Self {
        Frontier {
            states: vec![FusionState::seed()],
        }
    }

    /// Collapse a raw candidate generation by remainder-pair identity.
    /// Within a class the shorter-fused representative is retained (it can
    /// only complete to a shorter or equal result); first found wins on
    /// equal length.
    pub fn from_candidates(candidates: Vec<FusionState>) -> Self {
        let mut classes: FxHashMap<(String, String), FusionState> =
            FxHashMap::default();
        let mut order: Vec<(String, String)> = Vec::new();
        for state in candidates {
            let key = (
                state.left_remainder().to_string(),
                state.right_remainder().to_string(),
            );
            match classes.entry(key) {
                Entry::Occupied(mut slot) => {
                    if state.fused().len() < slot.get().fused().len() {
                        slot.insert(state);
                    }
                }
                Entry::Vacant(slot) => {
                    order.push(slot.key().clone());
                    slot.insert(state);
                }
            }
        }
        // Insertion order, not map order, so identical inputs walk the
        // next generation identically.
        let states = order
            .iter()
            .map(|key| classes.remove(key).unwrap())
            .collect();
        Frontier { states }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FusionState> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn into_states(self) -> Vec<FusionState> {
        self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::Genotype;

    fn ongoing(fused: &str, left_remainder: &str) -> FusionState {
        // Build a real Ongoing state with the given fused prefix and left
        // remainder by extending the seed; keeps tests off any private
        // constructor.
        let state = FusionState::seed()
            .extend(&Genotype::new(
                &format!("{}{}", fused, left_remainder),
                fused,
            ))
            .unwrap();
        assert_eq!(state.fused(), fused);
        assert_eq!(state.remainder_key(), (left_remainder, ""));
        state
    }

    #[test]
    fn test_seed_frontier_has_one_state() {
        let frontier = Frontier::seed();
        assert_eq!(frontier.len(), 1);
        assert!(!frontier.is_empty());
    }

    #[test]
    fn test_dedup_collapses_equal_remainder_pairs() {
        let a = ongoing("ab", "c");
        let b = ongoing("xy", "c");
        let frontier = Frontier::from_candidates(vec![a, b]);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_dedup_keeps_distinct_remainder_pairs() {
        let a = ongoing("ab", "c");
        let b = ongoing("ab", "d");
        let frontier = Frontier::from_candidates(vec![a, b]);
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_dedup_retains_shorter_fused() {
        let short = ongoing("ab", "c");
        let long = ongoing("abab", "c");
        let frontier =
            Frontier::from_candidates(vec![long.clone(), short.clone()]);
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.iter().next().unwrap().fused(), "ab");
    }

    #[test]
    fn test_dedup_first_found_wins_on_equal_length() {
        let first = ongoing("ab", "c");
        let second = ongoing("xy", "c");
        let frontier =
            Frontier::from_candidates(vec![first.clone(), second]);
        assert_eq!(frontier.into_states(), vec![first]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let candidates = vec![
            ongoing("ab", "c"),
            ongoing("xy", "c"),
            ongoing("ab", "d"),
        ];
        let once = Frontier::from_candidates(candidates);
        let twice = Frontier::from_candidates(once.clone().into_states());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_candidates_make_empty_frontier() {
        let frontier = Frontier::from_candidates(vec![]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.len(), 0);
    }
}
