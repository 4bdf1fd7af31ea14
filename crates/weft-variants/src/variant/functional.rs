//! `not-`, `is-`, `where-` and `has-` variants.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{MatchContext, Rewrite, SortHint, VariantMatch};
use crate::registry::Registry;

/// [§ 3 Logical Combinations](https://www.w3.org/TR/selectors-4/#logical-combination)
///
/// A functional pseudo-class that takes a selector argument.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FunctionalWrapper {
    /// `:not(...)`, the negation pseudo-class.
    Not,
    /// `:is(...)`, the matches-any pseudo-class.
    Is,
    /// `:where(...)`, like `:is` with zero specificity.
    Where,
    /// `:has(...)`, the relational pseudo-class.
    Has,
}

impl FunctionalWrapper {
    /// `:fn(inner)`.
    #[must_use]
    pub fn wrap(self, inner: &str) -> String {
        format!(":{self}({inner})")
    }

    /// Split a leading `fn-` off `input`.
    #[must_use]
    pub fn strip_from(input: &str) -> Option<(Self, &str)> {
        Self::iter().find_map(|wrapper| {
            let name: &'static str = wrapper.into();
            input
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('-'))
                .map(|rest| (wrapper, rest))
        })
    }

    /// Wrapper names joined with `|`.
    #[must_use]
    pub fn alternation() -> String {
        Self::iter()
            .map(<&'static str>::from)
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Match `fn-key` followed by a boundary and wrap the key's pseudo-class.
///
/// Only pseudo-class keys qualify; a pseudo-element is not a valid
/// argument to a functional pseudo-class.
pub(super) fn try_match(token: &str, ctx: &MatchContext) -> Option<VariantMatch> {
    let token = ctx.theme.transform_rules.restore(token);
    let (wrapper, rest) = FunctionalWrapper::strip_from(&token)?;
    let found = Registry::global().match_key(rest, true, false)?;
    let consumed = token.len() - rest.len() + found.len;

    Some(VariantMatch {
        variant: "pseudo-functions",
        consumed,
        residual: token[consumed..].to_string(),
        label: String::new(),
        rewrite: Rewrite::AppendSelector(wrapper.wrap(&found.lookup.entry.fragment)),
        sort: SortHint::Unchanged,
        no_merge: false,
    })
}

/// Editor suggestion pattern.
pub(super) fn autocomplete() -> String {
    format!(
        "({})-({}):",
        FunctionalWrapper::alternation(),
        Registry::global().alternation(true)
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::FunctionalWrapper;

    #[test]
    fn wrapper_names() {
        assert_eq!(FunctionalWrapper::Where.to_string(), "where");
        assert_eq!(FunctionalWrapper::from_str("has"), Ok(FunctionalWrapper::Has));
        assert_eq!(FunctionalWrapper::alternation(), "not|is|where|has");
    }

    #[test]
    fn strip_requires_dash() {
        assert_eq!(
            FunctionalWrapper::strip_from("not-hover:x"),
            Some((FunctionalWrapper::Not, "hover:x"))
        );
        assert_eq!(FunctionalWrapper::strip_from("nothover:x"), None);
        assert_eq!(FunctionalWrapper::strip_from("isnt-x"), None);
    }

    #[test]
    fn wrap_formats_call() {
        assert_eq!(FunctionalWrapper::Is.wrap(":focus"), ":is(:focus)");
    }
}
