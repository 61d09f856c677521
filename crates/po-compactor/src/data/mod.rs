//! Static dictionaries. Built once, shared read-only by every call.

pub mod locations;
pub mod nature;
pub mod stop_words;
pub mod technology;
pub mod terms;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Every (term, abbreviation) pair the general dictionary pass knows,
/// sorted longest term first. Later tables win on duplicate terms.
pub static ABBREVIATIONS: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    let mut merged: HashMap<&'static str, &'static str> = HashMap::new();
    let tables = locations::all()
        .chain(nature::all())
        .chain(technology::all())
        .chain(terms::all())
        .chain(locations::VARIATIONS.iter().copied());
    for (term, abbrev) in tables {
        merged.insert(term, abbrev);
    }
    let mut sorted: Vec<_> = merged.into_iter().collect();
    sorted.sort_by_key(|&(term, _)| (Reverse(term.chars().count()), term));
    sorted
});

/// Lowercase and strip diacritics, for accent-insensitive lookups.
pub fn fold(text: &str) -> String {
    crate::text::remove_accents(&text.to_lowercase())
}
