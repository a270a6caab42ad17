// crates/doctree_rst/src/inline.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered rewrite rules; earlier rules see the raw markup first.
static INLINE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // ``inline literal``
        (r"``(.+?)``", "$1"),
        // :role:`text`
        (r":[A-Za-z0-9_.+-]+:`([^`]+)`", "$1"),
        // `text <target>`_ and `text <target>`__
        (r"`([^`<]+?)\s*<[^>`]+>`__?", "$1"),
        // `interpreted` / `reference`_
        (r"`([^`]+)`(?:__?)?", "$1"),
        // **strong**
        (r"\*\*(.+?)\*\*", "$1"),
        // *emphasis*
        (r"\*([^*\s][^*]*?)\*", "$1"),
        // reference_ and anonymous reference__
        (r"([A-Za-z0-9])__?(\s|[.,;:!?)]|$)", "$1$2"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("inline markup pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Removes inline markup delimiters, keeping the text they wrap.
pub(crate) fn strip_inline_markup(text: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}
