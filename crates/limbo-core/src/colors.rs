//! Legacy chat color codes.
//!
//! Settings authors write `&a`, `&l`, ... because the section sign used by
//! the client (`§`) is awkward to type. [`expand`] rewrites those codes.

/// Marker the client expects in front of a formatting code.
pub const SECTION_SIGN: char = '\u{00A7}';

/// Marker used in the settings document.
pub const ALT_CODE_CHAR: char = '&';

/// Returns `true` for characters that form a valid formatting code:
/// colors `0-9a-f`, styles `k-o`, and reset `r`.
pub fn is_format_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Replaces `&` with `§` wherever it introduces a valid formatting code.
///
/// An `&` that is not followed by a code character (`"Tom & Jerry"`) is kept.
pub fn expand(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ALT_CODE_CHAR && chars.peek().is_some_and(|&next| is_format_code(next)) {
            out.push(SECTION_SIGN);
        } else {
            out.push(c);
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_color_code() {
        assert_eq!(expand("&aWelcome"), "§aWelcome");
    }

    #[test]
    fn test_expand_multiple_codes_and_styles() {
        assert_eq!(expand("&9&lLimbo &rserver"), "§9§lLimbo §rserver");
    }

    #[test]
    fn test_expand_is_case_insensitive() {
        assert_eq!(expand("&Ehi"), "§Ehi");
    }

    #[test]
    fn test_lone_ampersand_is_kept() {
        assert_eq!(expand("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(expand("trailing&"), "trailing&");
        assert_eq!(expand("&zinvalid"), "&zinvalid");
    }

    #[test]
    fn test_text_without_codes_is_unchanged() {
        assert_eq!(expand(r#"{"text": "hello"}"#), r#"{"text": "hello"}"#);
    }
}
