/// Splits a rendered query into the kanji of its `kanji:` clauses.
///
/// Panics when the query does not follow the deck browser grammar.
pub fn clause_kanji(query: &str) -> Vec<char> {
    let clauses = query
        .strip_prefix("deck:漢字 ")
        .expect("query should start with the deck filter");
    if clauses.is_empty() {
        return Vec::new();
    }
    clauses
        .split(" OR ")
        .map(|clause| {
            let value = clause
                .strip_prefix("kanji:")
                .expect("clause should use the kanji field");
            let mut chars = value.chars();
            let kanji = chars.next().expect("clause should carry one character");
            assert!(chars.next().is_none(), "clause `{clause}` has extra text");
            kanji
        })
        .collect()
}
