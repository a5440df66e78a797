// src/lib.rs

pub mod core;
pub mod fixture;

pub use crate::core::provider::AutocompleteProvider;
pub use crate::core::types::Completion;
