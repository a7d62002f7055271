//! Heuristic for routing queries to the expression parser.

/// Decides whether a query looks like a boolean search expression.
///
/// Returns true when the query contains a parenthesis anywhere, or one of
/// the operators `AND`, `OR`, `NOT` as a whole word (case-insensitive,
/// bounded by non-word characters).
///
/// This is a cheap routing check, not a parse: it can flag queries that
/// then fail to parse (a literal standalone "AND"), which is why a parse
/// failure downstream falls back to substring matching instead of
/// erroring out.
pub fn is_search_expression(query: &str) -> bool {
    if query.contains('(') || query.contains(')') {
        return true;
    }

    // Word boundaries are runs of non-word characters, matching the
    // usual \b semantics (word characters: alphanumerics and '_').
    query
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .any(|word| {
            word.eq_ignore_ascii_case("AND")
                || word.eq_ignore_ascii_case("OR")
                || word.eq_ignore_ascii_case("NOT")
        })
}
