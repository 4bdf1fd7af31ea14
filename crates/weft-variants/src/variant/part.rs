//! `part-[name]:` variant for shadow parts.
//!
//! [CSS Shadow Parts § 4.1](https://drafts.csswg.org/css-shadow-parts/#part)

use super::{Rewrite, SortHint, VariantMatch};
use crate::bracket::bracket_len;

const PREFIX: &str = "part-";

/// Match `part-[payload]:rest` with a non-empty payload.
pub(super) fn try_match(token: &str) -> Option<VariantMatch> {
    let after_prefix = token.strip_prefix(PREFIX)?;
    let len = bracket_len(after_prefix)?;
    let payload = &after_prefix[1..len - 1];
    if payload.is_empty() {
        return None;
    }
    let residual = after_prefix[len..].strip_prefix(':')?;

    Some(VariantMatch {
        variant: "part",
        consumed: token.len() - residual.len(),
        residual: residual.to_string(),
        label: String::new(),
        rewrite: Rewrite::AppendPseudoElement(format!("::part({payload})")),
        sort: SortHint::Unchanged,
        no_merge: false,
    })
}
