//! Embedded vocabulary checklist and a read-only view over its entries.
//!
//! # Responsibility
//! - Hold the vocabulary list the default query is built from.
//! - Expose markdown checklist items for diagnostics.
//!
//! # Invariants
//! - `VOCABULARY_CHECKLIST` is the only built-in source text.
//! - Query construction scans raw text and never depends on entry parsing.

use crate::scan::kanji::unique_kanji;
use once_cell::sync::Lazy;
use regex::Regex;

/// Vocabulary checklist scanned when no other input is given.
pub const VOCABULARY_CHECKLIST: &str = "
- [ ] 標
- [ ] 反対
- [ ] 許
- [ ] 同棲
- [ ] 婚
- [ ] 是非
- [ ] 挨拶
- [ ] 温泉
- [ ] 素敵
- [ ] 聴く
- [ ] 街
- [ ] 天
";

static CHECKLIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-*]\s+\[([ xX])\]\s*(.*)$").expect("valid checklist item regex")
});

/// One markdown task-list line, e.g. `- [ ] 温泉`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    /// `true` for `[x]` items.
    pub checked: bool,
    /// Trimmed text after the checkbox.
    pub term: String,
}

impl ChecklistEntry {
    /// Distinct kanji of this entry's term, in first-occurrence order.
    pub fn kanji(&self) -> Vec<char> {
        unique_kanji(&self.term)
    }
}

/// Parses markdown checklist lines from `text`.
///
/// Lines that are not checklist items are skipped.
pub fn parse_checklist(text: &str) -> Vec<ChecklistEntry> {
    text.lines()
        .filter_map(|line| CHECKLIST_ITEM_RE.captures(line))
        .map(|caps| ChecklistEntry {
            checked: !caps[1].trim().is_empty(),
            term: caps[2].trim().to_string(),
        })
        .collect()
}

/// Entry counts reported in diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistSummary {
    pub entries: usize,
    pub checked: usize,
    /// Entries whose term has no kanji, e.g. kana-only words.
    pub without_kanji: usize,
}

/// Counts checklist entries in `text` by state.
pub fn summarize_checklist(text: &str) -> ChecklistSummary {
    parse_checklist(text)
        .iter()
        .fold(ChecklistSummary::default(), |mut summary, entry| {
            summary.entries += 1;
            if entry.checked {
                summary.checked += 1;
            }
            if entry.kanji().is_empty() {
                summary.without_kanji += 1;
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_checklist, summarize_checklist, ChecklistSummary, VOCABULARY_CHECKLIST};

    #[test]
    fn embedded_checklist_has_twelve_unchecked_entries() {
        let entries = parse_checklist(VOCABULARY_CHECKLIST);
        assert_eq!(entries.len(), 12);
        assert!(entries.iter().all(|entry| !entry.checked));
        assert_eq!(entries[0].term, "標");
        assert_eq!(entries[9].term, "聴く");
        assert_eq!(entries[11].term, "天");
    }

    #[test]
    fn checked_items_and_prose_lines() {
        let entries = parse_checklist("# 語彙\n- [x] 街 \n* [X] 天\nplain 言葉\n- [] 無効");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].checked);
        assert_eq!(entries[0].term, "街");
        assert!(entries[1].checked);
        assert_eq!(entries[1].term, "天");
    }

    #[test]
    fn entry_kanji_skips_kana() {
        let entries = parse_checklist("- [ ] 聴く");
        assert_eq!(entries[0].kanji(), vec!['聴']);
    }

    #[test]
    fn summary_counts_checked_and_kana_only_entries() {
        let summary = summarize_checklist("- [x] 温泉\n- [ ] ひらがな\n- [X] 街\nnote 天");
        assert_eq!(
            summary,
            ChecklistSummary {
                entries: 3,
                checked: 2,
                without_kanji: 1,
            }
        );
    }

    #[test]
    fn embedded_checklist_summary() {
        let summary = summarize_checklist(VOCABULARY_CHECKLIST);
        assert_eq!(summary.entries, 12);
        assert_eq!(summary.checked, 0);
        assert_eq!(summary.without_kanji, 0);
    }
}
