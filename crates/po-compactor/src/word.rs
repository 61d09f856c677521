//! Adaptive word compression: drop letters from the middle of a word,
//! vowels before consonants, never reordering what is kept.

const VOWELS: &str = "aeiouáéíóúàèìòùâêîôûãõ";

fn is_vowel(c: char) -> bool {
    c.to_lowercase().any(|l| VOWELS.contains(l))
}

/// Shorten `word` toward `ratio` of its characters, keeping at least
/// `min_length`. Returns the word unchanged when it is already short enough
/// or `ratio` is outside `(0, 1)`.
pub fn compress(word: &str, ratio: f64, min_length: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if len <= min_length || !(ratio > 0.0 && ratio < 1.0) {
        return word.to_string();
    }

    let effective = ratio.max(min_length as f64 / len as f64);
    let target = min_length.max((len as f64 * effective).round() as usize);
    if target >= len {
        return word.to_string();
    }

    if len <= 3 {
        return chars[..target].iter().collect();
    }

    let first = chars[0];
    let last = chars[len - 1];
    let middle = &chars[1..len - 1];
    let keep = target.saturating_sub(2);

    let mut out = String::with_capacity(word.len());
    out.push(first);
    if keep >= middle.len() {
        out.extend(middle);
    } else {
        let mut kept = select_middle(first, middle, keep);
        kept.sort_unstable();
        out.extend(kept.into_iter().map(|i| middle[i]));
    }
    out.push(last);
    out
}

/// Indices of the `keep` middle characters with the lowest removal priority.
/// Ties break on original position.
fn select_middle(first: char, middle: &[char], keep: usize) -> Vec<usize> {
    let mut prev_vowel = is_vowel(first).then(|| fold(first));
    let mut ranked: Vec<(u8, usize)> = middle
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let priority = if !is_vowel(c) {
                0
            } else if prev_vowel == Some(fold(c)) {
                2
            } else {
                1
            };
            if is_vowel(c) {
                prev_vowel = Some(fold(c));
            }
            (priority, i)
        })
        .collect();
    ranked.sort_unstable();
    ranked.into_iter().take(keep).map(|(_, i)| i).collect()
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
