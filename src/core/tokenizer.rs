// src/core/tokenizer.rs

/// Returns the edge n-grams of a word: every prefix from one character up to
/// the full word, shortest first. The full word is always the last element.
///
/// `edge_ngrams("there")` is `["t", "th", "the", "ther", "there"]`.
///
/// An empty word yields an empty vector. No case folding happens here;
/// callers lowercase before tokenizing. O(k^2) in the word length, which is
/// fine for keyboard-sized words.
pub fn edge_ngrams(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }
    // Indexing by chars rather than bytes keeps prefixes well-formed even if
    // a caller hands us multi-byte input.
    let chars: Vec<char> = word.chars().collect();
    (1..=chars.len())
        .map(|len| chars[..len].iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::edge_ngrams;

    #[test]
    fn all_prefixes_shortest_first() {
        assert_eq!(
            edge_ngrams("there"),
            vec!["t", "th", "the", "ther", "there"]
        );
    }

    #[test]
    fn single_letter_word_is_its_own_ngram() {
        assert_eq!(edge_ngrams("a"), vec!["a"]);
    }

    #[test]
    fn empty_word_yields_nothing() {
        assert_eq!(edge_ngrams(""), Vec::<String>::new());
    }

    #[test]
    fn full_word_is_always_last() {
        assert_eq!(edge_ngrams("word").last().map(String::as_str), Some("word"));
    }
}
