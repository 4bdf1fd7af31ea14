//! Arbitrary bracket values in variant tokens.
//!
//! A token such as `group-[&_.active]:text-red` carries a literal selector
//! between square brackets. [`extract`] finds the bracket and splits the
//! token around it; [`bracket_value`] decodes the payload into selector text.

/// A bracketed payload split out of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch<'a> {
    /// Text between the outer `[` and its matching `]`.
    pub payload: &'a str,
    /// Text between `]` and the first following `:` or `-`.
    pub label: &'a str,
    /// Everything after that separator.
    pub residual: &'a str,
}

impl BracketMatch<'_> {
    /// Number of bytes of the original token consumed by this match.
    #[must_use]
    pub const fn consumed(&self, token_len: usize) -> usize {
        token_len - self.residual.len()
    }
}

/// Length of the bracket group at the start of `input`, including both
/// delimiters.
///
/// `input` must start with `[`. Nested `[]` and `()` are honored and a
/// backslash escapes the next character. Returns `None` when the group is
/// not closed or the parentheses inside it are unbalanced.
#[must_use]
pub fn bracket_len(input: &str) -> Option<usize> {
    if !input.starts_with('[') {
        return None;
    }

    let mut brackets = 0usize;
    let mut parens = 0usize;
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                let _ = chars.next();
            }
            '(' => parens += 1,
            ')' => parens = parens.checked_sub(1)?,
            '[' => brackets += 1,
            ']' => {
                brackets -= 1;
                if brackets == 0 {
                    return (parens == 0).then_some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `token` of the form `{prefix}[payload]{label}{sep}{residual}`
/// where `sep` is `:` or `-`.
///
/// Declines when the prefix is missing, the bracket is unterminated or
/// empty, nothing follows it, or no separator follows the label.
#[must_use]
pub fn extract<'a>(token: &'a str, prefix: &str) -> Option<BracketMatch<'a>> {
    let after_prefix = token.strip_prefix(prefix)?;
    let len = bracket_len(after_prefix)?;
    let payload = &after_prefix[1..len - 1];
    if payload.trim().is_empty() {
        return None;
    }

    let rest = &after_prefix[len..];
    let sep = rest.find([':', '-'])?;
    Some(BracketMatch {
        payload,
        label: &rest[..sep],
        residual: &rest[sep + 1..],
    })
}

/// Type hints accepted at the start of a payload (`[string:a_b]`).
const TYPE_HINTS: &[&str] = &["color", "length", "position", "quoted", "string"];

/// Decode a bracket payload into CSS text.
///
/// - a leading type hint (`string:`, `quoted:`, ...) is stripped;
/// - an empty payload or the literal `=""` is rejected;
/// - `--name` becomes `var(--name)`;
/// - `_` becomes a space and `\_` a literal underscore, except inside
///   `url(...)` where underscores are kept;
/// - with the `quoted` hint, the result is wrapped in double quotes.
///
/// Returns `None` when square brackets in the payload are unbalanced.
#[must_use]
pub fn bracket_value(payload: &str) -> Option<String> {
    let (hint, base) = split_type_hint(payload);
    if base.is_empty() || base == "=\"\"" {
        return None;
    }

    let mut depth = 0usize;
    for c in base.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }

    let base = if base.starts_with("--") {
        format!("var({base})")
    } else {
        base.to_string()
    };

    let value = match hint {
        Some("string") => spaces_from_underscores(&base, false),
        Some("quoted") => {
            let unquoted = spaces_from_underscores(&base, false);
            let mut quoted = String::with_capacity(unquoted.len() + 2);
            quoted.push('"');
            for c in unquoted.chars() {
                if c == '"' || c == '\\' {
                    quoted.push('\\');
                }
                quoted.push(c);
            }
            quoted.push('"');
            quoted
        }
        _ => spaces_from_underscores(&base, true),
    };
    Some(value)
}

fn split_type_hint(payload: &str) -> (Option<&'static str>, &str) {
    for &hint in TYPE_HINTS {
        let Some(head) = payload.get(..hint.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(hint) && payload[hint.len()..].starts_with(':') {
            return (Some(hint), &payload[hint.len() + 1..]);
        }
    }
    (None, payload)
}

/// Replace unescaped `_` with a space and `\_` with `_`.
fn spaces_from_underscores(input: &str, keep_in_url: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_url = false;
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if keep_in_url && !in_url && rest.starts_with("url(") {
            in_url = true;
            out.push_str("url(");
            rest = &rest[4..];
            continue;
        }
        rest = &rest[c.len_utf8()..];
        match c {
            ')' if in_url => {
                in_url = false;
                out.push(')');
            }
            '\\' if rest.starts_with('_') => {
                out.push('_');
                rest = &rest[1..];
            }
            '_' if !in_url => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{bracket_len, bracket_value, spaces_from_underscores, split_type_hint};

    #[test]
    fn bracket_len_nested() {
        assert_eq!(bracket_len("[a[b]c]rest"), Some(7));
        assert_eq!(bracket_len("[:not(.x)]:"), Some(10));
        assert_eq!(bracket_len("[a\\]b]"), Some(6));
    }

    #[test]
    fn bracket_len_rejects_unbalanced() {
        assert_eq!(bracket_len("[abc"), None);
        assert_eq!(bracket_len("[a(b]"), None);
        assert_eq!(bracket_len("[a)b]"), None);
        assert_eq!(bracket_len("abc]"), None);
    }

    #[test]
    fn type_hint_is_case_insensitive() {
        assert_eq!(split_type_hint("STRING:a_b"), (Some("string"), "a_b"));
        assert_eq!(split_type_hint("stringy"), (None, "stringy"));
    }

    #[test]
    fn underscores_inside_url_survive() {
        assert_eq!(
            spaces_from_underscores("url(a_b.png)_x", true),
            "url(a_b.png) x"
        );
        assert_eq!(spaces_from_underscores("a\\_b_c", true), "a_b c");
    }

    #[test]
    fn custom_property_becomes_var() {
        assert_eq!(bracket_value("--x").as_deref(), Some("var(--x)"));
        assert_eq!(bracket_value("color:--brand").as_deref(), Some("var(--brand)"));
    }

    #[test]
    fn quoted_hint_wraps_and_escapes() {
        assert_eq!(bracket_value("quoted:a_b").as_deref(), Some("\"a b\""));
        assert_eq!(bracket_value("quoted:a_\"b").as_deref(), Some("\"a \\\"b\""));
        assert_eq!(bracket_value("quoted:a\\b").as_deref(), Some("\"a\\\\b\""));
    }

    #[test]
    fn string_hint_ignores_url() {
        assert_eq!(bracket_value("url(a_b)").as_deref(), Some("url(a_b)"));
        assert_eq!(bracket_value("string:url(a_b)").as_deref(), Some("url(a b)"));
        assert_eq!(bracket_value("STRING:a_b").as_deref(), Some("a b"));
    }

    #[test]
    fn rejects_empty_and_unbalanced() {
        assert_eq!(bracket_value(""), None);
        assert_eq!(bracket_value("string:"), None);
        assert_eq!(bracket_value("=\"\""), None);
        assert_eq!(bracket_value("[a"), None);
        assert_eq!(bracket_value("a]"), None);
    }
}
