//! Relation variants: `group-*`, `peer-*`, `parent-*` and `previous-*`.
//!
//! Each relation names a marker element (`class="group"`) and a combinator
//! tying the marker to the element carrying the utility. A relation variant
//! puts `marker<state><combinator>` in front of the rule:
//!
//! ```text
//! group-hover:underline       .group:hover .group-hover\:underline
//! peer-not-checked:hidden     .peer:not(:checked)~.peer-not-checked\:hidden
//! group-hover/item:underline  .group\/item:hover .group-hover\/item\:underline
//! group-[&_.active]:block     .group .active .group-\[\&_\.active\]\:block
//! ```
//!
//! The `/item` label scopes the marker so nested groups do not interfere.
//! Labels are still experimental; the first labeled match prints a notice.

use strum_macros::{EnumIter, IntoStaticStr};
use weft_common::warning::warn_once;

use super::functional::FunctionalWrapper;
use super::{Rewrite, SortHint, VariantMatch};
use crate::bracket::{bracket_value, extract};
use crate::escape::escape_selector;
use crate::registry::Registry;
use crate::selector::{Ancestor, Combinator, PrefixSegment};

/// Notice printed once for the first labeled relation variant.
pub const LABELED_NOTICE: &str = "The labeled variant is experimental and may not follow semver.";

/// The four supported element relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Relation {
    /// Marker is an ancestor.
    Group,
    /// Marker is an earlier sibling.
    Peer,
    /// Marker is the direct parent.
    Parent,
    /// Marker is the immediately preceding sibling.
    Previous,
}

impl Relation {
    /// Tag name as written in tokens.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Combinator between the marker and the subject.
    #[must_use]
    pub const fn combinator(self) -> Combinator {
        match self {
            Self::Group => Combinator::Descendant,
            Self::Peer => Combinator::SubsequentSibling,
            Self::Parent => Combinator::Child,
            Self::Previous => Combinator::NextSibling,
        }
    }

    /// Name of the variant built for this relation.
    #[must_use]
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Group => "pseudo:group",
            Self::Peer => "pseudo:peer",
            Self::Parent => "pseudo:parent",
            Self::Previous => "pseudo:previous",
        }
    }
}

/// A relation together with the selector text it renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSpec {
    /// Which relation.
    pub relation: Relation,
    /// Marker selector: `.group`, or `[group=""]` in attributify mode.
    pub base_selector: String,
    /// Combinator placed after the marker.
    pub combinator: Combinator,
}

impl RelationSpec {
    /// Relation `relation`, with the marker rendered as a class or, when
    /// `attributify` is set, as an empty attribute.
    #[must_use]
    pub fn new(relation: Relation, attributify: bool) -> Self {
        let tag = relation.tag();
        let base_selector = if attributify {
            format!("[{tag}=\"\"]")
        } else {
            format!(".{tag}")
        };
        Self {
            relation,
            base_selector,
            combinator: relation.combinator(),
        }
    }

    /// Marker selector scoped by `label`.
    fn scoped_base(&self, label: &str) -> String {
        format!("{}{}", self.base_selector, escape_selector(label))
    }

    /// Try the bracket form, then the keyword form.
    pub(super) fn try_match(&self, token: &str) -> Option<VariantMatch> {
        if !token.starts_with(self.relation.tag()) {
            return None;
        }

        let found = self
            .match_bracket(token)
            .or_else(|| self.match_keyword(token))?;

        if !found.label.is_empty() {
            let _ = warn_once("Variants", LABELED_NOTICE);
        }
        Some(found)
    }

    /// `tag-[payload]label:rest`
    fn match_bracket(&self, token: &str) -> Option<VariantMatch> {
        let prefix = format!("{}-", self.relation.tag());
        let bracket = extract(token, &prefix)?;
        let value = bracket_value(bracket.payload)?;

        let base = self.scoped_base(bracket.label);
        let ancestor = if value.contains('&') {
            Ancestor::Literal(value.replace('&', &base))
        } else {
            Ancestor::Scoped {
                base,
                compound: value,
                labeled: !bracket.label.is_empty(),
            }
        };

        Some(self.matched(
            token,
            bracket.consumed(token.len()),
            bracket.label,
            ancestor,
            SortHint::Unranked,
        ))
    }

    /// `tag-[fn-]key[/label]:rest`
    fn match_keyword(&self, token: &str) -> Option<VariantMatch> {
        let rest = token
            .strip_prefix(self.relation.tag())
            .and_then(|rest| rest.strip_prefix('-'))?;

        let registry = Registry::global();
        let (wrapper, inner, found) = FunctionalWrapper::strip_from(rest)
            .and_then(|(wrapper, inner)| {
                registry
                    .match_key(inner, true, true)
                    .map(|found| (Some(wrapper), inner, found))
            })
            .or_else(|| {
                registry
                    .match_key(rest, true, true)
                    .map(|found| (None, rest, found))
            })?;

        let fragment = &found.lookup.entry.fragment;
        let compound = wrapper.map_or_else(|| fragment.clone(), |w| w.wrap(fragment));
        let consumed = token.len() - inner.len() + found.len;

        Some(self.matched(
            token,
            consumed,
            found.label,
            Ancestor::Scoped {
                base: self.scoped_base(found.label),
                compound,
                labeled: !found.label.is_empty(),
            },
            SortHint::Rank(found.lookup.rank),
        ))
    }

    fn matched(
        &self,
        token: &str,
        consumed: usize,
        label: &str,
        ancestor: Ancestor,
        sort: SortHint,
    ) -> VariantMatch {
        VariantMatch {
            variant: self.relation.variant_name(),
            consumed,
            residual: token[consumed..].to_string(),
            label: label.to_string(),
            rewrite: Rewrite::PrependRelation(PrefixSegment {
                ancestor,
                combinator: self.combinator,
            }),
            sort,
            no_merge: false,
        }
    }

    /// Editor suggestion pattern.
    pub(super) fn autocomplete(&self) -> String {
        format!(
            "{}-(({})-)?({}):",
            self.relation.tag(),
            FunctionalWrapper::alternation(),
            Registry::global().alternation(true)
        )
    }
}
