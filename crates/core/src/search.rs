//! Case-insensitive substring search helpers.
//!
//! Repositories match with `column ILIKE $1`, where `$1` is the pattern built
//! here. PostgreSQL's default `LIKE` escape character is the backslash.

/// Normalize a raw search term. Blank input means "no filter".
pub fn normalize_term(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|t| !t.is_empty())
}

/// Build an `ILIKE` pattern that matches `term` anywhere in the column.
///
/// `%`, `_` and `\` inside the term are escaped so they match literally.
///
/// ```
/// use quintet_core::search::contains_pattern;
/// assert_eq!(contains_pattern("title"), "%title%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Normalize and convert in one step; `None` means the unfiltered set.
pub fn optional_pattern(raw: Option<&str>) -> Option<String> {
    normalize_term(raw).map(contains_pattern)
}
