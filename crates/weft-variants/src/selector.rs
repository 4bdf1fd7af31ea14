//! Selector fragments produced by variants.
//!
//! A rule under construction is a [`RuleContext`]: a relation prefix, the
//! subject selector with appended pseudo-classes, and a trailing
//! pseudo-element slot. Relation variants grow the prefix one
//! [`PrefixSegment`] at a time.

use std::fmt;

use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::escape::class_selector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(to_string = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(to_string = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A."
    #[strum(to_string = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that follows
    /// element A (not necessarily immediately)."
    #[strum(to_string = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The combinator as written between two compound selectors.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The left-hand side of a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ancestor {
    /// A relation base such as `.group` (or `.group\/item` when labeled)
    /// followed by the compound that constrains it (`:hover`).
    Scoped {
        /// Relation base, label included.
        base: String,
        /// Text appended to the base.
        compound: String,
        /// Whether the base carries a user label.
        labeled: bool,
    },

    /// Selector text used as-is, e.g. a bracket payload after `&`
    /// substitution.
    Literal(String),
}

impl fmt::Display for Ancestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoped { base, compound, .. } => write!(f, "{base}{compound}"),
            Self::Literal(text) => f.write_str(text),
        }
    }
}

/// One `ancestor combinator` step of a relation prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSegment {
    /// Selector on the left of the combinator.
    pub ancestor: Ancestor,
    /// How the ancestor relates to what follows.
    pub combinator: Combinator,
}

impl PrefixSegment {
    /// Segment with a literal ancestor.
    #[must_use]
    pub fn literal(text: impl Into<String>, combinator: Combinator) -> Self {
        Self {
            ancestor: Ancestor::Literal(text.into()),
            combinator,
        }
    }

    /// Fold `inner` into `self` when both constrain the same unlabeled
    /// relation base with pseudo-classes: `.group:focus .group:hover `
    /// becomes `.group:focus:hover `.
    fn absorb(&mut self, inner: &Self) -> bool {
        if self.combinator != inner.combinator {
            return false;
        }
        let (
            Ancestor::Scoped {
                base,
                compound,
                labeled: false,
            },
            Ancestor::Scoped {
                base: inner_base,
                compound: inner_compound,
                labeled: false,
            },
        ) = (&mut self.ancestor, &inner.ancestor)
        else {
            return false;
        };

        let joinable = |c: &str| c.len() > 1 && c.starts_with(':');
        if *base != *inner_base
            || !joinable(compound.as_str())
            || !joinable(inner_compound.as_str())
            || compound.contains(char::is_whitespace)
        {
            return false;
        }
        compound.push_str(inner_compound);
        true
    }
}

impl fmt::Display for PrefixSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ancestor, self.combinator)
    }
}

/// Relation prefix of a rule, outermost relation first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorPrefix {
    segments: Vec<PrefixSegment>,
}

impl SelectorPrefix {
    /// An empty prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PrefixSegment] {
        &self.segments
    }

    /// `true` when no relation has been applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Put `segment` in front of the prefix, then collapse it with the
    /// previous head if both constrain the same relation base.
    pub fn prepend(&mut self, segment: PrefixSegment) {
        self.segments.insert(0, segment);
        self.normalize();
    }

    /// Collapse a duplicated leading ancestor.
    ///
    /// Only the first two segments are compared: every prepend normalizes,
    /// so deeper pairs are already in normal form.
    pub fn normalize(&mut self) {
        if self.segments.len() < 2 {
            return;
        }
        let inner = self.segments[1].clone();
        if self.segments[0].absorb(&inner) {
            let _ = self.segments.remove(1);
        }
    }
}

impl fmt::Display for SelectorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A rule under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleContext {
    /// Relation prefix.
    pub prefix: SelectorPrefix,
    /// Subject selector plus appended pseudo-classes.
    pub selector: String,
    /// Trailing pseudo-element slot.
    pub pseudo: String,
    /// Sort rank contributed by the last ranked variant.
    pub sort: Option<usize>,
    /// Keep this rule out of declaration-block merging.
    pub no_merge: bool,
}

impl RuleContext {
    /// Context whose subject is `selector`.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    /// Context whose subject is the class selector for `token`.
    #[must_use]
    pub fn for_class(token: &str) -> Self {
        Self::new(class_selector(token))
    }

    /// Final selector text: prefix, subject, pseudo-element.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}{}{}", self.prefix, self.selector, self.pseudo)
    }
}
