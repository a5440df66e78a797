// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A stable identifier for a node slot in the arena.
///
/// Nodes are only ever appended, never removed, so an id stays valid for the
/// lifetime of the arena that issued it.
pub type NodeId = usize;

/// One ranked completion returned by a query: a previously trained whole
/// word together with the number of times it was trained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub word: String,
    /// The true occurrence count, never a synthetic ranking key.
    pub occurrence_count: u64,
}

impl Completion {
    pub fn new(word: impl Into<String>, occurrence_count: u64) -> Self {
        Self {
            word: word.into(),
            occurrence_count,
        }
    }
}
