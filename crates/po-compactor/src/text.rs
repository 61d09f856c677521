//! Text cleanup stages: whitespace, punctuation, stop words, accents.

use crate::data::stop_words;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_TRAILING_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.,;:]+\s*$").unwrap());

/// Punctuation collapsed when it repeats back to back.
const REPEATABLE_PUNCT: &[char] = &['.', '!', '?', ',', '-', ';', ':', '"'];

static PORTUGUESE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| stop_words::PORTUGUESE.iter().copied().collect());
static ENGLISH: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| stop_words::ENGLISH.iter().copied().collect());
static EMPTY: LazyLock<HashSet<&'static str>> = LazyLock::new(HashSet::new);

/// Slice `text[start..end]`, clamped to the text and widened to the
/// nearest char boundaries.
pub fn window(text: &str, start: usize, end: usize) -> &str {
    let mut start = start.min(text.len());
    let mut end = end.min(text.len()).max(start);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

/// Collapse whitespace runs to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// "!!!" -> "!", "..." -> ".".
pub fn collapse_repeated_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if prev == Some(c) && REPEATABLE_PUNCT.contains(&c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Drop list-style punctuation dangling at the end of the text.
pub fn strip_trailing_punctuation(text: &str) -> String {
    RE_TRAILING_PUNCT.replace(text, "").to_string()
}

/// Collapse repeated punctuation, then strip trailing list punctuation.
pub fn remove_redundant_punctuation(text: &str) -> String {
    strip_trailing_punctuation(&collapse_repeated_punctuation(text))
}

/// Stop-word set for a language code. Unknown languages get an empty set.
pub fn stop_words_for(language: &str) -> &'static HashSet<&'static str> {
    match language {
        "pt" => &*PORTUGUESE,
        "en" => &*ENGLISH,
        _ => &*EMPTY,
    }
}

/// Remove the first `floor(count * ratio)` stop words, left to right.
pub fn remove_stop_words(text: &str, language: &str, ratio: f64) -> String {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return text.to_string();
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let set = stop_words_for(language);
    let stop_indices: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| {
            let folded = w.to_lowercase();
            set.contains(folded.trim_matches(|c: char| c.is_ascii_punctuation()))
        })
        .map(|(i, _)| i)
        .collect();

    let remove_count = (stop_indices.len() as f64 * ratio).floor() as usize;
    let removed: HashSet<usize> = stop_indices.into_iter().take(remove_count).collect();
    tracing::trace!(language, removed = removed.len(), "stop words removed");

    words
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, w)| *w)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip diacritics via canonical decomposition.
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Delete every ASCII punctuation character.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
