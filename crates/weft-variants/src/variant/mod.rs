//! Variant matchers and the multi-pass resolver.
//!
//! A variant recognizes a prefix of a utility token (`hover:`,
//! `group-focus:`) and describes how the rule built for the rest of the
//! token must change. Matching and applying are separate steps: a
//! [`VariantMatch`] records the rewrite, and [`VariantMatch::apply`]
//! performs it on a [`RuleContext`].
//!
//! [`VariantSet::resolve`] strips variants off a token one pass at a time,
//! then applies every rewrite in the order the variants appeared.

mod functional;
mod part;
mod plain;
mod tagged;

use strum::IntoEnumIterator;
use weft_common::{PresetOptions, Theme};

pub use functional::FunctionalWrapper;
pub use tagged::{LABELED_NOTICE, Relation, RelationSpec};

use crate::selector::{PrefixSegment, RuleContext};

/// Read-only input shared by every matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchContext {
    /// Theme values, including the selector transform rules applied before
    /// bare and functional pseudo matching.
    pub theme: Theme,
}

impl From<Theme> for MatchContext {
    fn from(theme: Theme) -> Self {
        Self { theme }
    }
}

/// How a match changes the rule under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Append a pseudo-class to the subject selector.
    AppendSelector(String),
    /// Append to the trailing pseudo-element slot.
    AppendPseudoElement(String),
    /// Put a relation in front of the prefix.
    PrependRelation(PrefixSegment),
}

/// How a match changes the rule's sort rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortHint {
    /// Leave the rank alone.
    Unchanged,
    /// Set the rank to a registry position.
    Rank(usize),
    /// Clear the rank; the variant has no canonical position.
    Unranked,
}

/// A successful match of one variant against the start of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMatch {
    /// Name of the variant that matched.
    pub variant: &'static str,
    /// Bytes of the (restored) token this variant consumed.
    pub consumed: usize,
    /// What is left of the token for the next pass.
    pub residual: String,
    /// Relation label (`/item`), empty when absent.
    pub label: String,
    /// Selector change.
    pub rewrite: Rewrite,
    /// Sort change.
    pub sort: SortHint,
    /// Whether the rule must stay out of declaration merging.
    pub no_merge: bool,
}

impl VariantMatch {
    /// Apply this match to `rule`.
    #[must_use]
    pub fn apply(&self, mut rule: RuleContext) -> RuleContext {
        match &self.rewrite {
            Rewrite::AppendSelector(fragment) => rule.selector.push_str(fragment),
            Rewrite::AppendPseudoElement(fragment) => rule.pseudo.push_str(fragment),
            Rewrite::PrependRelation(segment) => rule.prefix.prepend(segment.clone()),
        }
        match self.sort {
            SortHint::Unchanged => {}
            SortHint::Rank(rank) => rule.sort = Some(rank),
            SortHint::Unranked => rule.sort = None,
        }
        rule.no_merge |= self.no_merge;
        rule
    }
}

/// The closed set of matcher kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Bare registry keys: `hover:`, `before:`, `backdrop:`.
    Plain,
    /// `not-`, `is-`, `where-`, `has-` around a pseudo-class key.
    Functional,
    /// A relation: `group-`, `peer-`, `parent-`, `previous-`.
    Tagged(RelationSpec),
    /// `part-[name]:`.
    Part,
}

impl Variant {
    /// Variant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Plain => "pseudo",
            Self::Functional => "pseudo-functions",
            Self::Tagged(tagged) => tagged.relation.variant_name(),
            Self::Part => "part",
        }
    }

    /// Match the start of `token`, or decline with `None`.
    #[must_use]
    pub fn try_match(&self, token: &str, ctx: &MatchContext) -> Option<VariantMatch> {
        match self {
            Self::Plain => plain::try_match(token, ctx),
            Self::Functional => functional::try_match(token, ctx),
            Self::Tagged(tagged) => tagged.try_match(token),
            Self::Part => part::try_match(token),
        }
    }

    /// Pattern of the tokens this variant recognizes, for editor
    /// suggestions.
    #[must_use]
    pub fn autocomplete(&self) -> Option<String> {
        match self {
            Self::Plain => Some(plain::autocomplete()),
            Self::Functional => Some(functional::autocomplete()),
            Self::Tagged(tagged) => Some(tagged.autocomplete()),
            Self::Part => None,
        }
    }
}

/// Result of resolving every variant on a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Matches in the order they were stripped.
    pub variants: Vec<VariantMatch>,
    /// The utility left after the last variant.
    pub body: String,
    /// Rule with every rewrite applied.
    pub rule: RuleContext,
}

impl Resolution {
    /// Final selector text.
    #[must_use]
    pub fn selector(&self) -> String {
        self.rule.render()
    }
}

/// Ordered variant list; the first variant that matches a pass wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    variants: Vec<Variant>,
}

impl VariantSet {
    /// Plain, functional, the four relations, then part.
    #[must_use]
    pub fn new(options: &PresetOptions) -> Self {
        let mut variants = vec![Variant::Plain, Variant::Functional];
        variants.extend(Self::relations(options));
        variants.push(Variant::Part);
        Self { variants }
    }

    /// Only the four relation variants.
    #[must_use]
    pub fn relations(options: &PresetOptions) -> Vec<Variant> {
        Relation::iter()
            .map(|relation| {
                Variant::Tagged(RelationSpec::new(relation, options.attributify_pseudo))
            })
            .collect()
    }

    /// Variants in match order.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// First variant matching the start of `token`.
    #[must_use]
    pub fn try_match(&self, token: &str, ctx: &MatchContext) -> Option<VariantMatch> {
        self.variants
            .iter()
            .find_map(|variant| variant.try_match(token, ctx))
    }

    /// Strip variants off `token` until none matches, then build the rule.
    ///
    /// Passes are strictly sequential: each pass sees the residual of the
    /// previous one. Resolution stops early if a pass would not shorten the
    /// token.
    #[must_use]
    pub fn resolve(&self, token: &str, ctx: &MatchContext) -> Resolution {
        let mut variants = Vec::new();
        let mut body = token.to_string();

        while !body.is_empty() {
            let Some(found) = self.try_match(&body, ctx) else {
                break;
            };
            if found.consumed == 0 || found.residual.len() >= body.len() {
                break;
            }
            body.clone_from(&found.residual);
            variants.push(found);
        }

        let rule = variants
            .iter()
            .fold(RuleContext::for_class(token), |rule, found| found.apply(rule));

        Resolution {
            variants,
            body,
            rule,
        }
    }

    /// Autocomplete patterns of every variant that has one.
    #[must_use]
    pub fn autocomplete(&self) -> Vec<(&'static str, String)> {
        self.variants
            .iter()
            .filter_map(|variant| variant.autocomplete().map(|pattern| (variant.name(), pattern)))
            .collect()
    }
}

impl Default for VariantSet {
    fn default() -> Self {
        Self::new(&PresetOptions::default())
    }
}
