// crates/doctree/src/id.rs

use unicode_normalization::UnicodeNormalization;

/// Converts arbitrary title or target text into an identifier the way
/// docutils does: lowercase ASCII letters and digits, single hyphens between
/// runs, no leading digits or hyphens, no trailing hyphen.
///
/// Accented letters are decomposed (NFKD) and keep their base letter; a few
/// letters without a decomposition are transliterated. Anything still
/// outside ASCII is dropped.
pub fn make_id(text: &str) -> String {
    let mut lowered = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        match transliterate(c) {
            Some(replacement) => lowered.push_str(replacement),
            None => lowered.push(c),
        }
    }
    let ascii: String = lowered.nfkd().filter(char::is_ascii).collect();

    let joined = ascii
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    joined
        .trim_start_matches(|c: char| !c.is_ascii_lowercase())
        .trim_end_matches('-')
        .to_string()
}

/// Lowercase letters that NFKD leaves alone but that still have an obvious
/// ASCII spelling.
fn transliterate(c: char) -> Option<&'static str> {
    let replacement = match c {
        'ß' => "sz",
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'đ' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ł' | 'ŀ' => "l",
        'ƀ' => "b",
        'ƒ' => "f",
        'ȷ' => "j",
        _ => return None,
    };
    Some(replacement)
}

/// Normalises a reference name: whitespace runs collapse to one space and
/// the result is lowercased.
pub fn normalize_name(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
