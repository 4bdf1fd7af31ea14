//! Pseudo-class, pseudo-element and relation variants for utility-first CSS.
//!
//! # Scope
//!
//! This crate implements:
//! - **Pseudo-Class Registry** - ordered key tables with canonical sort ranks
//! - **Bracket Extractor** - arbitrary `[...]` selector payloads in tokens
//! - **Variant Matchers**
//!   - bare pseudo-classes and pseudo-elements (`hover:`, `before:`)
//!   - functional wrappers (`not-`, `is-`, `where-`, `has-`)
//!   - relations (`group-`, `peer-`, `parent-`, `previous-`)
//!   - shadow parts (`part-[name]:`)
//! - **Selector Rewriting** - relation prefixes with duplicate-ancestor
//!   collapsing
//! - **Multi-pass Resolution** - stripping every variant off a token and
//!   rendering the final selector
//!
//! # Example
//!
//! ```
//! use weft_variants::{MatchContext, VariantSet};
//!
//! let variants = VariantSet::default();
//! let resolved = variants.resolve("group-hover:underline", &MatchContext::default());
//! assert_eq!(resolved.body, "underline");
//! assert_eq!(resolved.selector(), ".group:hover .group-hover\\:underline");
//! ```
//!
//! # Not Implemented
//!
//! - Emitting CSS text; callers render declarations themselves
//! - Relations other than the four above

/// Bracket payload extraction and decoding.
pub mod bracket;
/// Identifier escaping per [CSSOM § 2.1](https://drafts.csswg.org/cssom/#serialize-an-identifier).
pub mod escape;
/// Pseudo-class and pseudo-element key tables.
pub mod registry;
/// Selector fragments and the rule under construction.
pub mod selector;
/// Variant matchers and the multi-pass resolver.
pub mod variant;

// Re-exports for convenience
pub use escape::{class_selector, escape_selector};
pub use registry::{PseudoEntry, Registry};
pub use selector::{Ancestor, Combinator, PrefixSegment, RuleContext, SelectorPrefix};
pub use variant::{
    FunctionalWrapper, MatchContext, Relation, RelationSpec, Resolution, Rewrite, SortHint,
    Variant, VariantMatch, VariantSet,
};
