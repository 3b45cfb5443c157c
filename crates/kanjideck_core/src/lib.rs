//! Core logic for kanjideck.
//! This crate is the single source of truth for the browser query contract.

pub mod checklist;
pub mod logging;
pub mod query;
pub mod scan;

pub use checklist::{
    parse_checklist, summarize_checklist, ChecklistEntry, ChecklistSummary, VOCABULARY_CHECKLIST,
};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use query::browser::{build_query, BrowserQuery, DECK_FILTER, KANJI_FIELD, OR_SEPARATOR};
pub use scan::kanji::{is_kanji, match_kanji, unique_kanji};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
