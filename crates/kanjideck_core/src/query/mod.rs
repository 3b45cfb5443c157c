//! Deck browser query construction.
//!
//! # Responsibility
//! - Turn extracted kanji into the flashcard browser's search grammar.
//! - Keep the deck/field literals in one place.
//!
//! # Invariants
//! - Output is byte-for-byte stable for a given input.
//! - Query construction never fails.

pub mod browser;
