//! Bare pseudo-class and pseudo-element variants (`hover:`, `before:`).

use super::{MatchContext, Rewrite, SortHint, VariantMatch};
use crate::registry::Registry;

pub(super) fn try_match(token: &str, ctx: &MatchContext) -> Option<VariantMatch> {
    let token = ctx.theme.transform_rules.restore(token);
    let found = Registry::global().match_key(&token, false, false)?;
    let entry = found.lookup.entry;

    let rewrite = if entry.is_element {
        Rewrite::AppendPseudoElement(entry.fragment.clone())
    } else {
        Rewrite::AppendSelector(entry.fragment.clone())
    };

    Some(VariantMatch {
        variant: "pseudo",
        consumed: found.len,
        residual: token[found.len..].to_string(),
        label: String::new(),
        rewrite,
        sort: SortHint::Rank(found.lookup.rank),
        // Two variants resolving to the same fragment must still produce
        // separate rules.
        no_merge: true,
    })
}

pub(super) fn autocomplete() -> String {
    format!("({}):", Registry::global().alternation(false))
}
