//! Identifier escaping for class names and labels.
//!
//! [CSSOM § 2.1 Common serializing idioms](https://drafts.csswg.org/cssom/#serialize-an-identifier)

use std::fmt::Write;

/// [CSSOM § 2.1](https://drafts.csswg.org/cssom/#serialize-an-identifier)
///
/// Escape `raw` so it can be used as a CSS identifier.
///
/// ASCII letters, digits, `-`, `_` and non-ASCII characters are kept. A
/// digit in first position (or second, after a leading `-`) and control
/// characters are written as hex escapes. A lone `-` and every other ASCII
/// character get a backslash. `,` is written as `\2c ` so that the class
/// survives selector-list splitting.
#[must_use]
pub fn escape_selector(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() * 2);
    let starts_with_dash = raw.starts_with('-');
    let single = raw.chars().nth(1).is_none();

    for (index, c) in raw.chars().enumerate() {
        match c {
            '\0' => escaped.push('\u{FFFD}'),
            ',' => escaped.push_str("\\2c "),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_hex(&mut escaped, c),
            '0'..='9' if index == 0 || (index == 1 && starts_with_dash) => {
                push_hex(&mut escaped, c);
            }
            '-' if index == 0 && single => escaped.push_str("\\-"),
            c if !c.is_ascii() || c.is_ascii_alphanumeric() || c == '-' || c == '_' => {
                escaped.push(c);
            }
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }
    escaped
}

fn push_hex(out: &mut String, c: char) {
    let _ = write!(out, "\\{:x} ", u32::from(c));
}

/// Class selector for a utility token: `.` followed by the escaped token.
#[must_use]
pub fn class_selector(token: &str) -> String {
    format!(".{}", escape_selector(token))
}

#[cfg(test)]
mod tests {
    use super::{class_selector, escape_selector};

    #[test]
    fn keeps_identifier_characters() {
        assert_eq!(escape_selector("text-red_500"), "text-red_500");
        assert_eq!(escape_selector("café"), "café");
    }

    #[test]
    fn escapes_punctuation() {
        assert_eq!(escape_selector("hover:text-red"), "hover\\:text-red");
        assert_eq!(escape_selector("/foo"), "\\/foo");
        assert_eq!(escape_selector("w-[1px]"), "w-\\[1px\\]");
    }

    #[test]
    fn escapes_leading_digits_as_code_points() {
        assert_eq!(escape_selector("2xl"), "\\32 xl");
        assert_eq!(escape_selector("-2"), "-\\32 ");
        assert_eq!(escape_selector("a2"), "a2");
    }

    #[test]
    fn escapes_lone_dash_and_comma() {
        assert_eq!(escape_selector("-"), "\\-");
        assert_eq!(escape_selector("a,b"), "a\\2c b");
    }

    #[test]
    fn class_selector_prefixes_dot() {
        assert_eq!(class_selector("hover:p-2"), ".hover\\:p-2");
    }
}
