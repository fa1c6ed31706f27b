//! Identifier normalization helpers shared by the catalog and selection layers.

use crate::constants::catalog::CATEGORY_SEPARATOR;
use crate::types::CategoryId;

/// Canonical form of a category identifier.
///
/// Trims, lowercases, and collapses runs of whitespace, `_` and `-` into a
/// single `-`. Leading and trailing separators are dropped.
pub fn normalize_category_id<T: AsRef<str>>(raw: T) -> CategoryId {
    let mut normalized = String::new();
    let mut pending_separator = false;
    for ch in raw.as_ref().trim().chars() {
        if is_separator(ch) {
            pending_separator = true;
            continue;
        }
        if pending_separator && !normalized.is_empty() {
            normalized.push(CATEGORY_SEPARATOR);
        }
        pending_separator = false;
        normalized.extend(ch.to_lowercase());
    }
    normalized
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '_' || ch == CATEGORY_SEPARATOR
}
