// crates/doctree_rst/src/adornment.rs

/// Characters allowed in section adornments, transitions and quoted
/// literal blocks.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Shortest underline accepted regardless of title length.
pub(crate) const MIN_UNDERLINE: usize = 4;

/// Shortest adornment line that forms a transition.
pub(crate) const MIN_TRANSITION: usize = 4;

pub(crate) fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Returns the adornment character if `text` is a run of at least two
/// copies of one punctuation character.
pub(crate) fn adornment_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let first = chars.next()?;
    if !is_punctuation(first) || text.chars().count() < 2 {
        return None;
    }
    chars.all(|c| c == first).then_some(first)
}

/// Adornment style of a section title. Titles sharing a style share a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    pub underline: char,
    pub overline: bool,
}

/// Decides whether `underline` adorns `title`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Underline {
    /// Not an underline for this title.
    No,
    Yes,
    /// Accepted, but shorter than the title text.
    TooShort,
}

pub(crate) fn check_underline(title: &str, underline: &str) -> Underline {
    if adornment_char(underline).is_none() {
        return Underline::No;
    }
    let title_len = title.trim().chars().count();
    let underline_len = underline.chars().count();
    if underline_len >= title_len {
        Underline::Yes
    } else if underline_len >= MIN_UNDERLINE {
        Underline::TooShort
    } else {
        Underline::No
    }
}
