//! Dictionary-driven abbreviation engine.
//!
//! Two passes: known place-name variants first, then every dictionary term,
//! longest first, each guarded by the numeric classifier and (optionally) a
//! context check around the match.

use crate::data::{self, locations};
use crate::entities::Entity;
use crate::numbers;
use crate::text::window;
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;

/// Radius, in bytes, of the context window checked before replacing.
pub const CONTEXT_WINDOW: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementCategory {
    Location,
    Abbreviation,
}

/// One accepted substitution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplacementResult {
    pub original: String,
    pub replacement: String,
    /// Byte offset of the match in the text the pass ran over.
    pub position: usize,
    pub characters_saved: usize,
    pub category: ReplacementCategory,
}

/// Potential savings reported without touching the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsEstimate {
    pub original_length: usize,
    pub estimated_savings: usize,
    pub estimated_final_length: usize,
    pub opportunities_found: usize,
    pub savings_percentage: f64,
}

struct DictionaryEntry {
    term: &'static str,
    abbrev: &'static str,
    regex: Regex,
}

static VARIATIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    locations::VARIATION_PATTERNS
        .iter()
        .map(|(pattern, abbrev)| (Regex::new(pattern).unwrap(), *abbrev))
        .collect()
});

/// Compiled once, in longest-term-first order.
static DICTIONARY: LazyLock<Vec<DictionaryEntry>> = LazyLock::new(|| {
    data::ABBREVIATIONS
        .iter()
        .map(|&(term, abbrev)| DictionaryEntry {
            term,
            abbrev,
            regex: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).unwrap(),
        })
        .collect()
});

static RE_NEGATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:não|never|not)\b").unwrap());
static RE_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s*$").unwrap());
static RE_SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+\p{Lu}").unwrap());

/// Accept an abbreviation only if it is strictly shorter and saves at least
/// `1 - aggressiveness` of the original's characters.
pub fn should_abbreviate(original: &str, abbrev: &str, aggressiveness: f64) -> bool {
    let (orig_len, abbrev_len) = (original.chars().count(), abbrev.chars().count());
    if abbrev_len >= orig_len {
        return false;
    }
    let savings_ratio = (orig_len - abbrev_len) as f64 / orig_len as f64;
    savings_ratio >= 1.0 - aggressiveness
}

/// False when the text around `position` suggests the replacement would
/// change meaning: a negation before it, a sentence ending right after it,
/// or a new sentence opening just before it.
///
/// Only the window before `position` is read for the sentence-start check,
/// so a match that is itself the first word of a sentence stays eligible.
pub fn is_safe_context(text: &str, position: usize) -> bool {
    let from = position.saturating_sub(CONTEXT_WINDOW);
    let before = window(text, from, position);
    let around = window(text, from, position + CONTEXT_WINDOW);
    !(RE_NEGATION.is_match(&before.to_lowercase())
        || RE_SENTENCE_END.is_match(around)
        || RE_SENTENCE_START.is_match(before))
}

/// Match the casing of the source word.
fn cased(abbrev: &str, matched: &str) -> String {
    if matched.starts_with(char::is_uppercase) {
        if abbrev.chars().count() <= 3 {
            abbrev.to_uppercase()
        } else {
            let lower = abbrev.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    } else {
        abbrev.to_lowercase()
    }
}

/// Byte ranges copied through verbatim. Kept sorted and disjoint, and
/// remapped after every pass so they keep pointing at the same text.
struct Protected(Vec<(usize, usize)>);

impl Protected {
    fn new(text: &str, entities: &[Entity]) -> Self {
        let mut spans: Vec<(usize, usize)> = entities
            .iter()
            .filter(|e| e.start < e.end && text.get(e.start..e.end).is_some())
            .map(|e| (e.start, e.end))
            .collect();
        spans.sort_unstable();
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start < last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        Self(merged)
    }

    fn covers(&self, start: usize, end: usize) -> bool {
        self.0.iter().any(|&(s, e)| s < end && start < e)
    }

    /// `edits` are `(start, old_len, new_len)`, ascending, none inside a span.
    fn remap(&mut self, edits: &[(usize, usize, usize)]) {
        for span in &mut self.0 {
            let before = edits.iter().take_while(|edit| edit.0 < span.0);
            let (grown, shrunk) = before.fold((0, 0), |(g, s), e| (g + e.2, s + e.1));
            span.0 = span.0 + grown - shrunk;
            span.1 = span.1 + grown - shrunk;
        }
    }
}

/// Replace every match of `re` outside the protected spans for which
/// `replace` returns a value. Matches and context stay relative to the
/// whole of `text`.
fn substitute<F>(text: &str, re: &Regex, protected: &mut Protected, mut replace: F) -> String
where
    F: FnMut(&Captures) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut edits = Vec::new();
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        if protected.covers(m.start(), m.end()) {
            continue;
        }
        let Some(replacement) = replace(&caps) else {
            continue;
        };
        out.push_str(&text[last..m.start()]);
        out.push_str(&replacement);
        edits.push((m.start(), m.len(), replacement.len()));
        last = m.end();
    }
    if edits.is_empty() {
        return text.to_string();
    }
    out.push_str(&text[last..]);
    protected.remap(&edits);
    out
}

fn normalize_locations(
    text: &str,
    protected: &mut Protected,
    results: &mut Vec<ReplacementResult>,
) -> String {
    let mut current = text.to_string();
    for (re, abbrev) in VARIATIONS.iter() {
        if !re.is_match(&current) {
            continue;
        }
        current = substitute(&current, re, protected, |caps| {
            let m = caps.get(0)?;
            let (orig_len, new_len) = (m.as_str().chars().count(), abbrev.chars().count());
            if new_len >= orig_len {
                return None;
            }
            results.push(ReplacementResult {
                original: m.as_str().to_string(),
                replacement: abbrev.to_string(),
                position: m.start(),
                characters_saved: orig_len - new_len,
                category: ReplacementCategory::Location,
            });
            Some(abbrev.to_string())
        });
    }
    current
}

fn replace_term(
    text: &str,
    entry: &DictionaryEntry,
    preserve_context: bool,
    protected: &mut Protected,
    results: &mut Vec<ReplacementResult>,
) -> String {
    substitute(text, &entry.regex, protected, |caps| {
        let m = caps.get(0)?;
        let matched = m.as_str();
        if numbers::is_important(matched) {
            return None;
        }
        if preserve_context && !is_safe_context(text, m.start()) {
            return None;
        }
        let replacement = cased(entry.abbrev, matched);
        let (orig_len, new_len) = (matched.chars().count(), replacement.chars().count());
        if new_len >= orig_len {
            return None;
        }
        results.push(ReplacementResult {
            original: matched.to_string(),
            replacement: replacement.clone(),
            position: m.start(),
            characters_saved: orig_len - new_len,
            category: ReplacementCategory::Abbreviation,
        });
        Some(replacement)
    })
}

/// Rewrite known terms to their abbreviations.
pub fn apply(
    text: &str,
    aggressiveness: f64,
    preserve_context: bool,
) -> (String, Vec<ReplacementResult>) {
    apply_protected(text, aggressiveness, preserve_context, &[])
}

/// Like [`apply`], but matches touching any `protected` span (byte offsets
/// into `text`) are left alone. Context checks still see the whole text.
pub fn apply_protected(
    text: &str,
    aggressiveness: f64,
    preserve_context: bool,
    protected: &[Entity],
) -> (String, Vec<ReplacementResult>) {
    if text.is_empty() {
        return (String::new(), Vec::new());
    }

    let mut protected = Protected::new(text, protected);
    let mut results = Vec::new();
    let mut current = normalize_locations(text, &mut protected, &mut results);
    for entry in DICTIONARY.iter() {
        if !should_abbreviate(entry.term, entry.abbrev, aggressiveness)
            || !entry.regex.is_match(&current)
        {
            continue;
        }
        current = replace_term(
            &current,
            entry,
            preserve_context,
            &mut protected,
            &mut results,
        );
    }

    tracing::trace!(replacements = results.len(), "abbreviations applied");
    (current, results)
}

/// Report what [`apply`] would save without context checks.
pub fn estimate_savings(text: &str, aggressiveness: f64) -> SavingsEstimate {
    let (_, results) = apply(text, aggressiveness, false);
    let original_length = text.chars().count();
    let estimated_savings: usize = results.iter().map(|r| r.characters_saved).sum();
    let savings_percentage = if original_length > 0 {
        po_core::types::round2(estimated_savings as f64 / original_length as f64 * 100.0)
    } else {
        0.0
    };
    SavingsEstimate {
        original_length,
        estimated_savings,
        estimated_final_length: original_length.saturating_sub(estimated_savings),
        opportunities_found: results.len(),
        savings_percentage,
    }
}
