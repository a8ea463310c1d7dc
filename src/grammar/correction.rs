//! Apostrophe toggling for a matched phrase.

/// Surface forms of the contraction that get toggled. Anything else ("iT's")
/// is left alone.
const CONTRACTIONS: [&str; 3] = ["it's", "IT'S", "It's"];

const PLACEHOLDER: &str = "\u{0}swap\u{0}";

/// Exchanges every `a` with `b` and every `b` with `a` in one pass.
///
/// Going through a placeholder keeps the second replacement from undoing the
/// first one.
pub fn swap(a: &str, b: &str, text: &str) -> String {
    text.replace(a, PLACEHOLDER)
        .replace(b, a)
        .replace(PLACEHOLDER, b)
}

/// "its not" -> "it's not", "of it's" -> "of its", casing preserved.
///
/// Applying it twice gives back the original phrase.
pub fn toggle_apostrophe(phrase: &str) -> String {
    CONTRACTIONS.iter().fold(phrase.to_string(), |acc, contraction| {
        swap(contraction, &contraction.replace('\'', ""), &acc)
    })
}
