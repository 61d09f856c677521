//! Numeric importance classifier: decides whether a token must survive
//! abbreviation and compression untouched.

use crate::text::window;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Radius, in bytes, of the context window searched for keywords.
pub const CONTEXT_WINDOW: usize = 50;

/// Bare unit-of-measure and operator symbols.
#[rustfmt::skip]
const MEASUREMENT_UNITS: &[&str] = &[
    "kg", "g", "mg", "ton", "t",
    "km", "m", "cm", "mm",
    "l", "ml", "cl",
    "h", "min", "s", "ms",
    "º", "°", "c",
    "mb", "gb", "tb", "kb",
    "hz", "khz", "mhz", "ghz",
    "v", "w", "kw", "mw",
    "a", "ma", "ka",
    "r$", "usd", "eur", "$",
    "%", "pct", "x", "×",
];

const UNIT_TRIM: &[char] = &['.', ',', '!', '?', '(', ')', '[', ']', '{', '}'];

static IMPORTANT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:10|20|30|40|50|60|70|80|90|100|1000)\b",
        r"(?i)\b\d+(?:\.\d+)?\s*(?:por\s*cento|percent)\b",
        r"(?i)\b(?:[1-9]|[1-9][0-9])\s*anos?\b",
        r"(?i)\b\d+\s*(?:unidades?|peças?|itens?|vezes?|units?|items?|times)\b",
        r"(?i)(?:versão|version|v\.?)\s*\d+(?:\.\d+)*",
        r"(?i)(?:capítulo|chapter|cap\.?)\s*\d+",
        r"(?i)(?:página|page|p\.?)\s*\d+",
        r"\b\d+\.\d+\b",
        r"\b\d+[.,]\s*\d+[.,]?\s*\d*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Financial,
    Measurement,
    Temporal,
    Version,
    Quantity,
}

#[rustfmt::skip]
const CONTEXT_KEYWORDS: &[(KeywordCategory, &[&str])] = &[
    (KeywordCategory::Financial, &["preço", "custo", "valor", "price", "cost", "value", "real", "dollar", "euro"]),
    (KeywordCategory::Measurement, &["metros", "km", "kg", "litros", "meters", "kilometers", "kilograms"]),
    (KeywordCategory::Temporal, &["anos", "meses", "dias", "horas", "years", "months", "days", "hours"]),
    (KeywordCategory::Version, &["versão", "version", "release", "update"]),
    (KeywordCategory::Quantity, &["quantidade", "total", "quantity", "amount"]),
];

/// Why a token was (or was not) classified as important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImportanceReason {
    ContainsDigits,
    MeasurementUnit,
    MatchedPattern,
    Context(KeywordCategory),
    NotImportant,
}

impl ImportanceReason {
    pub fn is_important(&self) -> bool {
        !matches!(self, Self::NotImportant)
    }
}

/// Classify a token on its own.
pub fn classify(token: &str) -> ImportanceReason {
    classify_with_context(token, None)
}

/// Classify a token, optionally looking for keywords around `position`
/// (a byte offset into `text`). The context check is skipped at position 0.
pub fn classify_with_context(token: &str, context: Option<(&str, usize)>) -> ImportanceReason {
    let token = token.trim();

    if token.chars().any(char::is_numeric) {
        return ImportanceReason::ContainsDigits;
    }

    let bare = token.to_lowercase();
    let bare = bare.trim_matches(UNIT_TRIM);
    if MEASUREMENT_UNITS.iter().any(|unit| *unit == bare) {
        return ImportanceReason::MeasurementUnit;
    }

    if IMPORTANT_PATTERNS.iter().any(|re| re.is_match(token)) {
        return ImportanceReason::MatchedPattern;
    }

    if let Some((text, position)) = context {
        if position > 0 {
            let from = position.saturating_sub(CONTEXT_WINDOW);
            let ctx = window(text, from, position + CONTEXT_WINDOW).to_lowercase();
            for (category, keywords) in CONTEXT_KEYWORDS {
                if keywords.iter().any(|kw| ctx.contains(kw)) {
                    return ImportanceReason::Context(*category);
                }
            }
        }
    }

    ImportanceReason::NotImportant
}

/// Shorthand for `classify(token).is_important()`.
pub fn is_important(token: &str) -> bool {
    classify(token).is_important()
}

/// A number found in running text that must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportantNumber {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub reason: ImportanceReason,
}

/// Every decimal number in `text` the classifier deems important.
pub fn important_numbers(text: &str) -> Vec<ImportantNumber> {
    RE_NUMBER
        .find_iter(text)
        .filter_map(|m| {
            let reason = classify_with_context(m.as_str(), Some((text, m.start())));
            reason.is_important().then(|| ImportantNumber {
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
                reason,
            })
        })
        .collect()
}
