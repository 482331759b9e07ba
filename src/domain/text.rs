use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Makes user-supplied text safe to place into a terminal buffer.
///
/// ANSI escape sequences are removed, line breaks and tabs are folded into
/// spaces and any remaining control character is replaced with U+FFFD, so a
/// stored value can never move the cursor, recolor the screen or break the
/// row it is drawn in.
pub fn escape_text(s: &str) -> String {
    // the stripper drops tabs and carriage returns, so fold them first
    let folded = s.replace(['\n', '\r', '\t'], " ");
    strip_ansi_escapes::strip_str(folded)
        .chars()
        .map(|c| {
            if c.is_control() {
                char::REPLACEMENT_CHARACTER
            } else {
                c
            }
        })
        .collect()
}

/// Returns `placeholder` for blank values.
pub fn or_placeholder<'a>(s: &'a str, placeholder: &'a str) -> &'a str {
    if s.trim().is_empty() {
        placeholder
    } else {
        s
    }
}

pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut acc = String::new();
    let mut acc_width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        // keep one cell for the ellipsis
        if acc_width + w > width - 1 {
            break;
        }
        acc.push(c);
        acc_width += w;
    }
    acc.push('…');
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("Ana", "Ana")]
    #[case("\x1b[31mred\x1b[0m", "red")]
    #[case("line1\nline2", "line1 line2")]
    #[case("a\tb", "a b")]
    #[case("<b>bold</b>", "<b>bold</b>")]
    #[case("", "")]
    fn test_escape_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_text(input), expected);
    }

    #[test]
    fn test_escape_text_leaves_no_control_characters() {
        let actual = escape_text("x\x07y\x00z\x1b]0;title\x07w\u{9b}");
        assert!(actual.chars().all(|c| !c.is_control()), "{actual:?}");
        assert!(actual.starts_with('x'));
    }

    #[test]
    fn test_escape_text_keeps_wide_characters() {
        assert_eq!(escape_text("こんにちは 🫲"), "こんにちは 🫲");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "-"), "-");
        assert_eq!(or_placeholder("   ", "-"), "-");
        assert_eq!(or_placeholder("a@x.com", "-"), "a@x.com");
    }

    #[test]
    fn test_truncate_to_width_no_truncate() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_to_width_truncate() {
        assert_eq!(truncate_to_width("hello, world", 6), "hello…");
    }

    #[test]
    fn test_truncate_to_width_double_width() {
        assert_eq!(truncate_to_width("こんにちは", 5), "こん…");
    }

    #[test]
    fn test_truncate_to_width_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
