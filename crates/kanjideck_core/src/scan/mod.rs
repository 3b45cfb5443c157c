//! Kanji extraction from free-form text.
//!
//! # Responsibility
//! - Identify characters in the CJK Unified Ideographs block.
//! - Produce match sequences in scan order, with and without repeats.
//!
//! # Invariants
//! - Only code points in `U+4E00..=U+9FFF` are ever reported.
//! - Output order follows the input's left-to-right character order.

pub mod kanji;
