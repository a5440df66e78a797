// src/core/ranking.rs
use crate::core::trie::NodeArena;
use crate::core::types::NodeId;
use std::cmp::Ordering;

/// Ordering policy for one query's candidate set, configured at call time
/// from the queried fragment and the counts observed among its completions.
///
/// The effective sort key is computed per comparison, so ranking never
/// writes to a node. Reported counts stay truthful either way.
#[derive(Debug, Clone, Copy)]
pub struct CompletionOrder {
    /// The node matching the query fragment exactly.
    pub fragment: NodeId,
    /// The fragment node's true occurrence count.
    pub fragment_count: u64,
    /// The highest occurrence count among the fragment's whole-word
    /// descendants, or zero if it has none.
    pub max_descendant_count: u64,
}

impl CompletionOrder {
    /// The count a candidate sorts by. Equal to the true count for every
    /// candidate except one case: when the fragment is itself a trained word
    /// but rarer than its best completion, it is lifted just above the
    /// maximum so an exact match always lists first.
    pub fn effective_count(&self, arena: &NodeArena, id: NodeId) -> u64 {
        let count = arena.node(id).occurrence_count();
        if id == self.fragment && count > 0 && count < self.max_descendant_count {
            self.max_descendant_count + 1
        } else {
            count
        }
    }

    /// Effective count descending, then token ascending.
    pub fn compare(&self, arena: &NodeArena, a: NodeId, b: NodeId) -> Ordering {
        self.effective_count(arena, b)
            .cmp(&self.effective_count(arena, a))
            .then_with(|| arena.node(a).token().cmp(arena.node(b).token()))
    }
}
