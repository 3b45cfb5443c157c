//! Browser search query for the kanji deck.
//!
//! # Invariants
//! - The query always starts with `deck:漢字 `, trailing space included.
//! - Each distinct kanji yields exactly one `kanji:<c>` clause, in
//!   first-occurrence order.
//! - Clauses are joined with ` OR ` and nothing else.

use crate::scan::kanji::unique_kanji;
use std::fmt::{Display, Formatter};

/// Deck filter understood by the flashcard browser.
pub const DECK_FILTER: &str = "deck:漢字";
/// Note field holding the single kanji of each card.
pub const KANJI_FIELD: &str = "kanji";
/// Boolean separator between field clauses.
pub const OR_SEPARATOR: &str = " OR ";

/// Search query selecting cards for a set of kanji.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserQuery {
    kanji: Vec<char>,
}

impl BrowserQuery {
    /// Builds a query for every distinct kanji found in `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            kanji: unique_kanji(text),
        }
    }

    /// Distinct kanji in clause order.
    pub fn kanji(&self) -> &[char] {
        &self.kanji
    }

    pub fn len(&self) -> usize {
        self.kanji.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kanji.is_empty()
    }
}

impl Display for BrowserQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{DECK_FILTER} ")?;
        for (index, kanji) in self.kanji.iter().enumerate() {
            if index > 0 {
                f.write_str(OR_SEPARATOR)?;
            }
            write!(f, "{KANJI_FIELD}:{kanji}")?;
        }
        Ok(())
    }
}

/// Builds the deck browser query for `text`.
///
/// Returns `deck:漢字 ` unchanged when `text` contains no kanji.
pub fn build_query(text: &str) -> String {
    BrowserQuery::from_text(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::{build_query, BrowserQuery};

    #[test]
    fn empty_query_keeps_trailing_space() {
        assert_eq!(BrowserQuery::default().to_string(), "deck:漢字 ");
    }

    #[test]
    fn single_kanji_has_no_separator() {
        assert_eq!(build_query("天"), "deck:漢字 kanji:天");
    }

    #[test]
    fn from_text_exposes_distinct_kanji() {
        let query = BrowserQuery::from_text("- [ ] 温泉\n- [ ] 温");
        assert_eq!(query.kanji(), &['温', '泉']);
        assert_eq!(query.len(), 2);
        assert!(!query.is_empty());
    }
}
