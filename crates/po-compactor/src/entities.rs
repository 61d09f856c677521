//! Entity extraction and preservation classifier.
//!
//! Finds spans that must not be freely compressed (money, dates, contacts,
//! known names) and assigns each a compression floor.

use crate::data::{self, locations, nature, technology};
use regex::Regex;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const DEFAULT_CONFIDENCE: f64 = 0.9;

/// Longest run of words tested against the name dictionaries.
const MAX_NAME_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Money,
    Percentage,
    Date,
    Time,
    Measurement,
    Location,
    Organism,
    Technology,
    Email,
    Url,
    Phone,
}

/// How much of an entity must survive compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreservationLevel {
    Never,
    High,
    Medium,
    Low,
}

impl PreservationLevel {
    /// Minimum fraction of characters that must remain.
    pub fn floor(&self) -> f64 {
        match self {
            Self::Never => 1.0,
            Self::High => 0.9,
            Self::Medium => 0.7,
            Self::Low => 0.5,
        }
    }
}

pub fn compression_floor(level: PreservationLevel) -> f64 {
    level.floor()
}

impl EntityType {
    /// Level for pattern-detected types. Dictionary types are tiered per term.
    pub fn default_level(&self) -> PreservationLevel {
        match self {
            Self::Money | Self::Percentage | Self::Email | Self::Url | Self::Phone => {
                PreservationLevel::Never
            }
            Self::Date | Self::Time | Self::Measurement => PreservationLevel::High,
            Self::Location | Self::Organism => PreservationLevel::Medium,
            Self::Technology => PreservationLevel::Low,
        }
    }
}

/// A protected span `[start, end)` of byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub text: String,
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
    pub preservation_level: PreservationLevel,
    pub confidence: f64,
}

impl Entity {
    fn new(
        text: &str,
        entity_type: EntityType,
        start: usize,
        end: usize,
        level: PreservationLevel,
    ) -> Self {
        Self {
            text: text[start..end].to_string(),
            entity_type,
            start,
            end,
            preservation_level: level,
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    pub fn floor(&self) -> f64 {
        self.preservation_level.floor()
    }
}

#[rustfmt::skip]
static PATTERNS: LazyLock<Vec<(EntityType, Regex)>> = LazyLock::new(|| {
    let months = "janeiro|fevereiro|março|abril|maio|junho|julho|agosto|setembro|outubro|novembro|dezembro";
    let table: Vec<(EntityType, String)> = vec![
        (EntityType::Money, r"\$\d+(?:\.\d{2})?".into()),
        (EntityType::Money, r"(?i)R\$\s?\d+(?:\.\d{3})*(?:,\d{2})?".into()),
        (EntityType::Money, r"(?i)\d+\s*(?:reais|real|d[óo]lares|d[óo]lar|euros?|libras?)\b".into()),
        (EntityType::Money, r"(?i)(?:US\$|USD)\s?\d+".into()),
        (EntityType::Percentage, r"\d+(?:[.,]\d+)?\s*%".into()),
        (EntityType::Percentage, r"(?i)\d+\s*por\s*cento".into()),
        (EntityType::Date, r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}".into()),
        (EntityType::Date, r"(?i)\d{1,2}\s+de\s+\w+\s+de\s+\d{4}".into()),
        (EntityType::Date, format!(r"(?i)(?:{months})\s+\d{{1,2}}")),
        (EntityType::Time, r"\d{1,2}:\d{2}(?::\d{2})?".into()),
        (EntityType::Time, r"(?i)\d{1,2}h\d{2}(?:min)?".into()),
        (EntityType::Time, r"(?i)\d{1,2}\s*(?:am|pm)\b".into()),
        (EntityType::Measurement, r"(?i)\d+(?:[.,]\d+)?\s*(?:km|cm|mm|kg|mg|ml|°C|°F|m|g|l)\b".into()),
        (EntityType::Measurement, r"(?i)\d+\s*(?:metros?|quilômetros?|centímetros?|quilogramas?|gramas?|litros?)\b".into()),
        (EntityType::Email, r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b".into()),
        (EntityType::Url, r"https?://\S+".into()),
        (EntityType::Url, r"www\.\S+".into()),
        (EntityType::Phone, r"\(\d{2}\)\s*\d{4,5}-\d{4}".into()),
        (EntityType::Phone, r"\+\d{2}\s*\d{2}\s*\d{4,5}-\d{4}".into()),
        (EntityType::Phone, r"\d{2}\s*\d{4,5}-\d{4}".into()),
    ];
    table
        .into_iter()
        .map(|(ty, p)| (ty, Regex::new(&p).unwrap()))
        .collect()
});

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

static LOCATION_NAMES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    locations::all()
        .chain(locations::VARIATIONS.iter().copied())
        .map(|(name, _)| name.to_lowercase())
        .collect()
});

static LOCATION_FOLDED: LazyLock<HashSet<String>> =
    LazyLock::new(|| LOCATION_NAMES.iter().map(|name| data::fold(name)).collect());

/// Exact (case-insensitive) names always match; unaccented spellings only
/// when capitalized, so "para" is not read as "Pará".
fn is_location(phrase: &str) -> bool {
    LOCATION_NAMES.contains(&phrase.to_lowercase())
        || (phrase.starts_with(char::is_uppercase) && LOCATION_FOLDED.contains(&data::fold(phrase)))
}

static ORGANISM_TIERS: LazyLock<HashMap<String, PreservationLevel>> = LazyLock::new(|| {
    let tiers: [(&[(&str, &str)], PreservationLevel); 5] = [
        (nature::PLANTS, PreservationLevel::Low),
        (nature::INSECTS, PreservationLevel::Medium),
        (nature::AQUATIC, PreservationLevel::Medium),
        (nature::DOMESTIC, PreservationLevel::High),
        (nature::WILD, PreservationLevel::High),
    ];
    let mut m = HashMap::new();
    for (table, level) in tiers {
        for (name, short) in table {
            m.insert(name.to_lowercase(), level);
            m.insert(short.to_lowercase(), level);
        }
    }
    m
});

static TECHNOLOGY_TIERS: LazyLock<HashMap<&'static str, PreservationLevel>> = LazyLock::new(|| {
    let acronyms_in =
        |table: &[(&str, &str)], acronym: &str| table.iter().any(|(_, a)| *a == acronym);
    let level_for = |acronym: &str| {
        if technology::NEVER_COMPRESS.iter().any(|a| *a == acronym) {
            PreservationLevel::Never
        } else if acronyms_in(technology::AI_ML, acronym)
            || acronyms_in(technology::PROTOCOLS, acronym)
        {
            PreservationLevel::High
        } else if acronyms_in(technology::FRAMEWORKS, acronym)
            || acronyms_in(technology::DATABASES, acronym)
        {
            PreservationLevel::Medium
        } else {
            PreservationLevel::Low
        }
    };
    let mut m = HashMap::new();
    for (name, acronym) in technology::all() {
        let level = level_for(acronym);
        m.insert(name, level);
        m.insert(acronym, level);
    }
    for acronym in technology::NEVER_COMPRESS {
        m.insert(*acronym, PreservationLevel::Never);
    }
    m
});

fn organism_level(phrase: &str) -> Option<PreservationLevel> {
    let lower = phrase.to_lowercase();
    let singular = lower.strip_suffix('s');
    ORGANISM_TIERS
        .get(&lower)
        .or_else(|| singular.and_then(|s| ORGANISM_TIERS.get(s)))
        .copied()
}

/// Classify a phrase against the name dictionaries.
fn dictionary_match(phrase: &str) -> Option<(EntityType, PreservationLevel)> {
    if is_location(phrase) {
        return Some((EntityType::Location, EntityType::Location.default_level()));
    }
    if let Some(level) = organism_level(phrase) {
        return Some((EntityType::Organism, level));
    }
    TECHNOLOGY_TIERS
        .get(phrase)
        .map(|level| (EntityType::Technology, *level))
}

fn is_edge_punct(c: char) -> bool {
    c.is_ascii_punctuation() && c != '+' && c != '#'
}

/// Whitespace-delimited words with surrounding punctuation trimmed.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    RE_TOKEN
        .find_iter(text)
        .filter_map(|m| {
            let raw = m.as_str();
            let lead = raw.len() - raw.trim_start_matches(is_edge_punct).len();
            let trimmed = raw.trim_matches(is_edge_punct);
            let start = m.start() + lead;
            if trimmed.is_empty() {
                None
            } else {
                Some((start, start + trimmed.len()))
            }
        })
        .collect()
}

fn pattern_entities(text: &str) -> Vec<Entity> {
    PATTERNS
        .iter()
        .flat_map(|(ty, re)| {
            re.find_iter(text)
                .map(move |m| Entity::new(text, *ty, m.start(), m.end(), ty.default_level()))
        })
        .collect()
}

fn dictionary_entities(text: &str) -> Vec<Entity> {
    let spans = word_spans(text);
    let mut found = Vec::new();
    for i in 0..spans.len() {
        for n in 1..=MAX_NAME_WORDS.min(spans.len() - i) {
            let (start, end) = (spans[i].0, spans[i + n - 1].1);
            let words: Vec<&str> = text[start..end].split_whitespace().collect();
            if let Some((ty, level)) = dictionary_match(&words.join(" ")) {
                found.push(Entity::new(text, ty, start, end, level));
            }
        }
    }
    found
}

/// Keep the earliest, then longest, of any overlapping candidates.
pub fn resolve_overlaps(mut candidates: Vec<Entity>) -> Vec<Entity> {
    candidates.sort_by_key(|e| (e.start, Reverse(e.len())));
    let mut kept: Vec<Entity> = Vec::with_capacity(candidates.len());
    let mut last_end = 0;
    for entity in candidates {
        if kept.is_empty() || entity.start >= last_end {
            last_end = entity.end;
            kept.push(entity);
        }
    }
    kept
}

/// Extract ordered, non-overlapping entities from `text`.
pub fn extract(text: &str) -> Vec<Entity> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut candidates = pattern_entities(text);
    candidates.extend(dictionary_entities(text));
    let entities = resolve_overlaps(candidates);
    tracing::trace!(count = entities.len(), "entities extracted");
    entities
}

/// Compression floor for the entity covering `position`, if any.
pub fn should_preserve(position: usize, entities: &[Entity]) -> Option<f64> {
    entities
        .iter()
        .find(|e| e.contains(position))
        .map(Entity::floor)
}

/// Highest floor among entities overlapping `[start, end)`.
pub fn floor_for_span(start: usize, end: usize, entities: &[Entity]) -> Option<f64> {
    entities
        .iter()
        .filter(|e| e.overlaps(start, end))
        .map(Entity::floor)
        .reduce(f64::max)
}
