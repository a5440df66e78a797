pub mod provider;
pub mod ranking;
pub mod tokenizer;
pub mod trie;
pub mod types;
