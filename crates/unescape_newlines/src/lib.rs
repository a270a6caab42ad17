// crates/unescape_newlines/src/lib.rs

/// Converts the escape sequences `\n`, `\t`, `\0` and `\\` typed on a command
/// line into the characters they stand for. Other backslashes are kept.
pub fn unescape_newlines(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => output.push('\n'),
            Some('t') => output.push('\t'),
            Some('0') => output.push('\0'),
            Some('\\') => output.push('\\'),
            Some(other) => {
                output.push('\\');
                output.push(other);
            }
            None => output.push('\\'),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_escape_sequences() {
        let input = "This is a test.";
        assert_eq!(unescape_newlines(input), input);
    }

    #[test]
    fn test_single_escape_sequence() {
        assert_eq!(unescape_newlines("Line1\\nLine2"), "Line1\nLine2");
    }

    #[test]
    fn test_escape_at_beginning_and_end() {
        assert_eq!(unescape_newlines("\\nLine1\\n"), "\nLine1\n");
    }

    #[test]
    fn test_tab_and_nul() {
        assert_eq!(unescape_newlines("a\\tb\\0"), "a\tb\0");
    }

    #[test]
    fn test_escaped_backslash_is_not_a_newline() {
        assert_eq!(unescape_newlines("a\\\\nb"), "a\\nb");
    }

    #[test]
    fn test_unknown_and_trailing_backslashes_are_kept() {
        assert_eq!(unescape_newlines("x\\qy\\"), "x\\qy\\");
    }
}
