//! Integration tests for the individual variant matchers.

use strum::IntoEnumIterator;
use weft_common::warning::was_warned;
use weft_common::{PresetOptions, Theme, TransformRules};
use weft_variants::{
    Combinator, MatchContext, Relation, RelationSpec, Rewrite, RuleContext, SortHint, Variant,
    VariantSet, registry::rank, variant::LABELED_NOTICE,
};

fn matched(token: &str) -> weft_variants::VariantMatch {
    VariantSet::default()
        .try_match(token, &MatchContext::default())
        .unwrap_or_else(|| panic!("no variant matched {token}"))
}

fn applied(token: &str) -> RuleContext {
    matched(token).apply(RuleContext::new(".x"))
}

#[test]
fn test_bare_pseudo_class() {
    let found = matched("hover:text-red");
    assert_eq!(found.variant, "pseudo");
    assert_eq!(found.residual, "text-red");
    assert_eq!(found.rewrite, Rewrite::AppendSelector(":hover".to_string()));
    assert_eq!(found.sort, SortHint::Rank(22));
    assert!(found.no_merge);

    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), ".x:hover");
    assert_eq!(rule.sort, rank("hover"));
    assert!(rule.no_merge);
}

#[test]
fn test_bare_pseudo_element() {
    let found = matched("before:content-empty");
    assert_eq!(found.residual, "content-empty");
    assert_eq!(
        found.rewrite,
        Rewrite::AppendPseudoElement("::before".to_string())
    );

    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.selector, ".x");
    assert_eq!(rule.pseudo, "::before");
    assert_eq!(rule.render(), ".x::before");
}

#[test]
fn test_bare_keys_with_dash_boundary() {
    let found = matched("first-letter-uppercase");
    assert_eq!(found.residual, "uppercase");
    assert_eq!(applied("focus-visible:ring").render(), ".x:focus-visible");
    assert_eq!(applied("even-of-type:bg-gray").render(), ".x:nth-of-type(even)");
    assert_eq!(applied("open:block").render(), ".x:open");
}

#[test]
fn test_colon_only_keys() {
    assert_eq!(applied("backdrop:bg-black").render(), ".x::backdrop");
    assert!(
        VariantSet::default()
            .try_match("backdrop-blur-md", &MatchContext::default())
            .is_none()
    );
}

#[test]
fn test_functional_wrappers() {
    let found = matched("not-focus:outline");
    assert_eq!(found.variant, "pseudo-functions");
    assert_eq!(found.residual, "outline");
    assert_eq!(found.sort, SortHint::Unchanged);
    assert!(!found.no_merge);

    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), ".x:not(:focus)");
    assert!(rule.prefix.is_empty());

    assert_eq!(applied("is-checked:x").render(), ".x:is(:checked)");
    assert_eq!(applied("where-first:x").render(), ".x:where(:first-child)");
    assert_eq!(applied("has-disabled-x").render(), ".x:has(:disabled)");
}

#[test]
fn test_functional_declines_pseudo_elements_and_unknown_keys() {
    let ctx = MatchContext::default();
    let set = VariantSet::default();
    assert!(set.try_match("not-before:x", &ctx).is_none());
    assert!(set.try_match("not-foo:x", &ctx).is_none());
    assert!(set.try_match("nothover:x", &ctx).is_none());
}

#[test]
fn test_group_hover() {
    let found = matched("group-hover:underline");
    assert_eq!(found.variant, "pseudo:group");
    assert_eq!(found.residual, "underline");
    assert_eq!(found.consumed, "group-hover:".len());
    assert_eq!(found.sort, SortHint::Rank(22));

    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.prefix.to_string(), ".group:hover ");
    assert_eq!(rule.render(), ".group:hover .x");
}

#[test]
fn test_every_relation_combinator() {
    assert_eq!(applied("peer-checked:x").render(), ".peer:checked~.x");
    assert_eq!(applied("parent-focus:x").render(), ".parent:focus>.x");
    assert_eq!(applied("previous-hover:x").render(), ".previous:hover+.x");

    assert_eq!(Relation::Peer.combinator(), Combinator::SubsequentSibling);
    assert_eq!(Relation::Previous.variant_name(), "pseudo:previous");
}

#[test]
fn test_relation_tags_and_names() {
    let tags: Vec<_> = Relation::iter().map(Relation::tag).collect();
    assert_eq!(tags, ["group", "peer", "parent", "previous"]);
    for relation in Relation::iter() {
        assert_eq!(relation.variant_name(), format!("pseudo:{}", relation.tag()));
    }
}

#[test]
fn test_relation_with_functional_wrapper() {
    let found = matched("peer-not-checked:hidden");
    assert_eq!(found.residual, "hidden");
    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), ".peer:not(:checked)~.x");
}

#[test]
fn test_relation_declines_pseudo_elements() {
    let ctx = MatchContext::default();
    let set = VariantSet::default();
    assert!(set.try_match("group-before:x", &ctx).is_none());
    assert!(set.try_match("group-unknown:x", &ctx).is_none());
    assert!(set.try_match("grouphover:x", &ctx).is_none());
}

#[test]
fn test_labeled_relation() {
    let found = matched("group-hover/item:underline");
    assert_eq!(found.label, "/item");
    assert_eq!(found.residual, "underline");
    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), ".group\\/item:hover .x");
    assert!(was_warned("Variants", LABELED_NOTICE));
}

#[test]
fn test_bracket_relation_with_ampersand() {
    let found = matched("group-[&_.active]:block");
    assert_eq!(found.residual, "block");
    assert_eq!(found.sort, SortHint::Unranked);

    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.prefix.to_string(), ".group .active ");
    assert_eq!(rule.sort, None);
}

#[test]
fn test_bracket_relation_without_ampersand() {
    assert_eq!(applied("group-[:hover]:x").render(), ".group:hover .x");
    assert_eq!(applied("peer-[.is-open]:x").render(), ".peer.is-open~.x");
    assert_eq!(
        applied("group-[[data-state=open]]:x").render(),
        ".group[data-state=open] .x"
    );
}

#[test]
fn test_bracket_relation_decodes_payload() {
    assert_eq!(applied("group-[--x]:y").render(), ".groupvar(--x) .x");
    assert_eq!(
        applied("group-[quoted:a_\"b]:y").render(),
        ".group\"a \\\"b\" .x"
    );
    assert_eq!(applied("peer-[string:&_.a]:y").render(), ".peer .a~.x");
}

#[test]
fn test_bracket_relation_with_label() {
    let found = matched("group-[.active]/menu:x");
    assert_eq!(found.label, "/menu");
    assert_eq!(found.residual, "x");
    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), ".group\\/menu.active .x");
}

#[test]
fn test_bracket_relation_declines() {
    let ctx = MatchContext::default();
    let set = VariantSet::default();
    assert!(set.try_match("group-[]:x", &ctx).is_none());
    assert!(set.try_match("group-[.a:x", &ctx).is_none());
    assert!(set.try_match("group-[.a]", &ctx).is_none());
    assert!(set.try_match("group-[=\"\"]:x", &ctx).is_none());
}

#[test]
fn test_attributify_relations() {
    let options = PresetOptions {
        attributify_pseudo: true,
    };
    let group = RelationSpec::new(Relation::Group, true);
    assert_eq!(group.base_selector, "[group=\"\"]");

    let set = VariantSet::new(&options);
    let found = set
        .try_match("group-hover:x", &MatchContext::default())
        .unwrap();
    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), "[group=\"\"]:hover .x");

    let found = set
        .try_match("peer-[&.open]:x", &MatchContext::default())
        .unwrap();
    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), "[peer=\"\"].open~.x");
}

#[test]
fn test_part() {
    let found = matched("part-[tab]:bg-white");
    assert_eq!(found.variant, "part");
    assert_eq!(found.residual, "bg-white");
    assert_eq!(found.sort, SortHint::Unchanged);

    let rule = found.apply(RuleContext::new(".x"));
    assert_eq!(rule.render(), ".x::part(tab)");

    let found = matched("part-[tab]:");
    assert_eq!(found.residual, "");
}

#[test]
fn test_part_declines() {
    let ctx = MatchContext::default();
    assert!(Variant::Part.try_match("part-[]:x", &ctx).is_none());
    assert!(Variant::Part.try_match("part-[tab]-x", &ctx).is_none());
    assert!(Variant::Part.try_match("part-tab:x", &ctx).is_none());
    assert!(Variant::Part.try_match("part-[tab:x", &ctx).is_none());
}

#[test]
fn test_transform_rules_restore_before_matching() {
    let theme = Theme {
        transform_rules: TransformRules::new([(":".to_string(), "-c-".to_string())]),
    };
    let ctx = MatchContext::from(theme);
    let set = VariantSet::default();

    let found = set.try_match("hover-c-text-red", &ctx).unwrap();
    assert_eq!(found.residual, "text-red");

    let found = set.try_match("not-hover-c-x", &ctx).unwrap();
    assert_eq!(found.residual, "x");
    assert_eq!(
        found.rewrite,
        Rewrite::AppendSelector(":not(:hover)".to_string())
    );
}

#[test]
fn test_variant_names_and_order() {
    let names: Vec<_> = VariantSet::default()
        .variants()
        .iter()
        .map(Variant::name)
        .collect();
    assert_eq!(
        names,
        [
            "pseudo",
            "pseudo-functions",
            "pseudo:group",
            "pseudo:peer",
            "pseudo:parent",
            "pseudo:previous",
            "part",
        ]
    );
}

#[test]
fn test_autocomplete_patterns() {
    let patterns = VariantSet::default().autocomplete();
    assert_eq!(patterns.len(), 6);

    let (name, plain) = &patterns[0];
    assert_eq!(*name, "pseudo");
    assert!(plain.starts_with("(first-letter|first-line|"));
    assert!(plain.ends_with("|backdrop):"));

    let (_, functional) = &patterns[1];
    assert!(functional.starts_with("(not|is|where|has)-(any-link|"));
    assert!(!functional.contains("before"));

    let (name, group) = &patterns[2];
    assert_eq!(*name, "pseudo:group");
    assert!(group.starts_with("group-((not|is|where|has)-)?(any-link|"));

    assert_eq!(Variant::Part.autocomplete(), None);
}
