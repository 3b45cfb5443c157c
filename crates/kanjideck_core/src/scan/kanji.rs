//! CJK Unified Ideographs scanner.
//!
//! # Invariants
//! - Characters are compared as raw code points; no Unicode normalization.
//! - `unique_kanji` keeps the first occurrence of each character.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

const KANJI_FIRST: char = '\u{4E00}';
const KANJI_LAST: char = '\u{9FFF}';

static KANJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{4E00}-\x{9FFF}]").expect("valid kanji regex"));

/// Returns whether `c` lies in the CJK Unified Ideographs block.
pub fn is_kanji(c: char) -> bool {
    (KANJI_FIRST..=KANJI_LAST).contains(&c)
}

/// Collects every kanji in `text` in order of appearance, repeats included.
pub fn match_kanji(text: &str) -> Vec<char> {
    KANJI_RE
        .find_iter(text)
        .filter_map(|found| found.as_str().chars().next())
        .collect()
}

/// Collects the distinct kanji in `text`, ordered by first occurrence.
pub fn unique_kanji(text: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    match_kanji(text)
        .into_iter()
        .filter(|c| seen.insert(*c))
        .collect()
}
