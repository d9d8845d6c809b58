//! Normalization of handwritten entry names into title case.

use crate::error::{Error, Result};

/// Normalize a free-text name into its canonical display form.
///
/// Hyphens and underscores become spaces, anything that is not an ASCII
/// letter or whitespace is dropped, whitespace runs collapse to a single
/// space, and every word is capitalised. Fails if no letters survive.
pub fn normalize(raw: &str) -> Result<String> {
    let letters: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let words: Vec<String> = letters.split_whitespace().map(capitalize).collect();
    if words.is_empty() {
        return Err(Error::invalid_input("invalid name"));
    }

    Ok(words.join(" "))
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    out
}
