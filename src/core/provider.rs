// src/core/provider.rs
use crate::core::ranking::CompletionOrder;
use crate::core::tokenizer::edge_ngrams;
use crate::core::trie::NodeArena;
use crate::core::types::{Completion, NodeId};
use std::collections::HashMap;

/// The autocomplete index: learns vocabulary from passages of text and
/// serves ranked completions for word fragments.
///
/// Every distinct edge n-gram ever trained gets exactly one node, found
/// through the token map; the nodes themselves live in the arena. Nodes are
/// never removed or merged. `train` is the only mutator; `query` only reads.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteProvider {
    arena: NodeArena,
    ids: HashMap<String, NodeId>,
}

impl AutocompleteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tokens (whole words and fragments) seen so far.
    pub fn token_count(&self) -> usize {
        self.arena.len()
    }

    /// Learns every whitespace-delimited word of `passage`.
    ///
    /// Each word is lowercased and walked through its edge n-grams shortest
    /// to longest. A token seen for the first time gets a fresh node, linked
    /// as the last child of the previous token's node; a known token is
    /// reused as-is, so no duplicate nodes or child edges ever appear. The
    /// final token is the whole word and has its occurrence count bumped.
    ///
    /// Empty or all-whitespace passages are a no-op. Never fails.
    pub fn train(&mut self, passage: &str) {
        for word in passage.split_whitespace() {
            let word = word.to_lowercase();
            let mut previous: Option<NodeId> = None;
            for token in edge_ngrams(&word) {
                let id = match self.ids.get(&token) {
                    Some(&id) => id,
                    None => {
                        let id = self.arena.alloc(token.clone());
                        self.ids.insert(token, id);
                        if let Some(parent) = previous {
                            self.arena.add_child(parent, id);
                        }
                        id
                    }
                };
                previous = Some(id);
            }
            // The last token of the walk is the full word. A fragment that
            // later shows up as a word of its own transitions from count
            // zero to positive here without losing its children.
            if let Some(full_word) = previous {
                self.arena.increment_count(full_word);
            }
        }
    }

    /// Returns every trained whole word starting with `fragment`, ordered by
    /// occurrence count descending and then alphabetically, with one bias:
    /// if the fragment is itself a trained word, it lists first even when
    /// some longer completion is more frequent.
    ///
    /// An unknown fragment yields an empty vector, never an error.
    pub fn query(&self, fragment: &str) -> Vec<Completion> {
        let fragment = fragment.to_lowercase();
        let Some(&fragment_id) = self.ids.get(&fragment) else {
            return Vec::new();
        };
        let fragment_count = self.arena.node(fragment_id).occurrence_count();

        // Whole words only; fragments below this node carry count zero.
        let mut candidates: Vec<NodeId> = self
            .arena
            .collect_descendants(fragment_id)
            .into_iter()
            .filter(|&id| self.arena.node(id).occurrence_count() > 0)
            .collect();
        let max_descendant_count = candidates
            .iter()
            .map(|&id| self.arena.node(id).occurrence_count())
            .max()
            .unwrap_or(0);
        if fragment_count > 0 {
            candidates.push(fragment_id);
        }

        let order = CompletionOrder {
            fragment: fragment_id,
            fragment_count,
            max_descendant_count,
        };
        candidates.sort_by(|&a, &b| order.compare(&self.arena, a, b));

        candidates
            .into_iter()
            .map(|id| {
                let node = self.arena.node(id);
                Completion::new(node.token(), node.occurrence_count())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::AutocompleteProvider;
    use crate::core::types::Completion;

    #[test]
    fn trained_word_is_retrievable_lowercased() {
        let mut provider = AutocompleteProvider::new();
        provider.train("There");
        let completions = provider.query("There");
        assert_eq!(completions[0], Completion::new("there", 1));
    }

    #[test]
    fn completions_sort_alphabetically_on_equal_counts() {
        let mut provider = AutocompleteProvider::new();
        provider.train("There are more than three words here.");
        assert_eq!(
            provider.query("th"),
            vec![
                Completion::new("than", 1),
                Completion::new("there", 1),
                Completion::new("three", 1),
            ]
        );
    }

    #[test]
    fn retraining_accumulates_without_duplicating_nodes() {
        let mut provider = AutocompleteProvider::new();
        provider.train("hello");
        let tokens_after_first = provider.token_count();
        provider.train("hello");
        assert_eq!(provider.token_count(), tokens_after_first);
        assert_eq!(provider.query("hello"), vec![Completion::new("hello", 2)]);
    }

    #[test]
    fn exact_match_word_lists_first_with_its_true_count() {
        let mut provider = AutocompleteProvider::new();
        provider.train("the there there");
        assert_eq!(
            provider.query("the"),
            vec![Completion::new("the", 1), Completion::new("there", 2)]
        );
    }

    #[test]
    fn fragment_becoming_a_word_keeps_its_children() {
        let mut provider = AutocompleteProvider::new();
        provider.train("there");
        // "the" exists only as a fragment so far.
        assert_eq!(provider.query("the"), vec![Completion::new("there", 1)]);
        provider.train("the");
        assert_eq!(
            provider.query("the"),
            vec![Completion::new("the", 1), Completion::new("there", 1)]
        );
    }

    #[test]
    fn unknown_fragment_yields_empty_not_error() {
        let provider = AutocompleteProvider::new();
        assert!(provider.query("zzz").is_empty());
        assert!(provider.query("").is_empty());
    }

    #[test]
    fn single_letter_word_completes_itself() {
        let mut provider = AutocompleteProvider::new();
        provider.train("a");
        assert_eq!(provider.query("a"), vec![Completion::new("a", 1)]);
    }

    #[test]
    fn every_prefix_of_a_trained_word_reaches_it() {
        let mut provider = AutocompleteProvider::new();
        provider.train("thoroughly thoroughly thing");
        let word = "thoroughly";
        for end in 1..=word.len() {
            let prefix = &word[..end];
            let hit = provider
                .query(prefix)
                .into_iter()
                .find(|c| c.word == word)
                .unwrap_or_else(|| panic!("missing {word} for prefix {prefix}"));
            assert_eq!(hit.occurrence_count, 2);
        }
    }

    #[test]
    fn empty_passage_is_a_noop() {
        let mut provider = AutocompleteProvider::new();
        provider.train("");
        provider.train("   \t  ");
        assert_eq!(provider.token_count(), 0);
    }
}
