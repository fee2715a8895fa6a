//! Tests for the safe constructors and their recovery styles.

use facet_testhelpers::test;
use safehtml::attributes::{attr, class, on, style};
use safehtml::diagnostic::DIAGNOSTIC_SRC_SCHEME;
use safehtml::{
    Attribute, DISALLOWED_TAG, RawNode, SafeNode, Stem, UnsafeUsageReason, create_or_default,
    create_or_fallback, create_or_none, create_raw_node, into_raw, try_create,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Msg {
    Clicked,
    Unsafe(UnsafeUsageReason),
}

const TAGS: &[&str] = &[
    "div", "p", "span", "img", "a", "iframe", "style", "noscript", "SCRIPT", "Script", "", "x-script",
];

fn script_reason() -> UnsafeUsageReason {
    UnsafeUsageReason::DisallowedTag {
        tag: Stem::from("script"),
    }
}

fn sample_attrs() -> Vec<Attribute<Msg>> {
    vec![class("c"), style("color", "red"), on("click", Msg::Clicked)]
}

fn sample_children() -> Vec<SafeNode<Msg>> {
    vec![
        SafeNode::text("hi"),
        try_create("b", [], [SafeNode::text("bold")]).unwrap(),
    ]
}

#[test]
fn test_div_with_nothing() {
    let node: SafeNode<Msg> = try_create("div", [], []).unwrap();
    let raw = into_raw(node);
    let elem = raw.as_element().unwrap();

    assert_eq!(elem.tag, "div");
    assert!(elem.attrs.is_empty());
    assert!(elem.children.is_empty());
}

#[test]
fn test_script_is_refused() {
    let err = try_create::<Msg>("script", [], []).unwrap_err();
    assert_eq!(err, script_reason());
    assert_eq!(err.tag(), DISALLOWED_TAG);
}

#[test]
fn test_script_is_refused_whatever_the_inputs() {
    let err = try_create("script", sample_attrs(), sample_children()).unwrap_err();
    assert_eq!(err, script_reason());
}

#[test]
fn test_other_tags_are_accepted_as_given() {
    for &tag in TAGS {
        let node = try_create(tag, sample_attrs(), sample_children()).unwrap();
        assert_eq!(node.tag(), Some(tag));
    }
}

#[test]
fn test_create_or_none_matches_try_create() {
    for &tag in TAGS.iter().chain([&DISALLOWED_TAG]) {
        let tried = try_create(tag, sample_attrs(), sample_children());
        let optional = create_or_none(tag, sample_attrs(), sample_children());
        assert_eq!(tried.ok(), optional);
    }
    assert_eq!(create_or_none::<Msg>("script", [], []), None);
}

#[test]
fn test_fallback_returned_unchanged() {
    let fallback: SafeNode<Msg> = SafeNode::empty();
    let node = create_or_fallback(fallback.clone(), "script", [], []);
    assert_eq!(node, fallback);

    let fancy = try_create("em", [class("warn")], [SafeNode::text("no scripts")]).unwrap();
    let node = create_or_fallback(fancy.clone(), "script", sample_attrs(), sample_children());
    assert_eq!(node, fancy);
}

#[test]
fn test_fallback_ignored_on_success() {
    let fallback = SafeNode::text("fallback");
    let node: SafeNode<Msg> = create_or_fallback(fallback.clone(), "div", [], []);
    assert_eq!(node.tag(), Some("div"));
    assert_ne!(node, fallback);
}

#[test]
fn test_unwrap_matches_raw_primitive() {
    let children = sample_children();
    let raw_children: Vec<RawNode<Msg>> = children.iter().cloned().map(into_raw).collect();

    let safe = try_create("section", sample_attrs(), children).unwrap();
    let direct = create_raw_node("section", sample_attrs(), raw_children);

    assert_eq!(into_raw(safe), direct);
}

#[test]
fn test_safe_trees_never_contain_script() {
    // Every level tries to sneak a script in; only validated children make it into the tree.
    let mut tree: SafeNode<Msg> = SafeNode::text("leaf");
    for &tag in TAGS.iter().cycle().take(30) {
        let sneaky = create_or_none("script", [], [tree.clone()]);
        let children = [Some(tree), sneaky].into_iter().flatten();
        tree = try_create(tag, [attr("data-depth", tag)], children).unwrap();
    }

    let raw: RawNode<Msg> = tree.into();
    assert!(!raw.contains_tag(DISALLOWED_TAG));
    assert!(raw.contains_tag("div"));
}

#[test]
fn test_default_passes_success_through() {
    let reported = create_or_default(Msg::Unsafe, "div", [], [SafeNode::text("ok")]);
    assert_eq!(reported.message, None);
    assert_eq!(reported.node.to_html(), "<div>ok</div>");
}

#[test]
fn test_default_reports_refusal() {
    let mut queue = vec![Msg::Clicked];
    let node = create_or_default(Msg::Unsafe, "script", sample_attrs(), sample_children())
        .dispatch(&mut queue);

    assert_eq!(queue, vec![Msg::Clicked, Msg::Unsafe(script_reason())]);

    let raw = node.into_raw();
    let img = raw.as_element().unwrap();
    assert_eq!(img.tag, "img");
    assert_eq!(img.get_style("width"), Some("0"));
    assert_eq!(img.get_style("height"), Some("0"));
    assert_eq!(img.handlers().count(), 0);

    let src = img.get_attr("src").unwrap();
    assert!(src.starts_with(DIAGNOSTIC_SRC_SCHEME));
    assert!(src.contains("script"));
    assert!(src.contains("on:click"));
    assert!(src.contains("bold"));
}

#[test]
fn test_default_calls_back_only_on_refusal() {
    let mut calls = 0;
    let _ = create_or_default(
        |reason| {
            calls += 1;
            Msg::Unsafe(reason)
        },
        "p",
        [],
        [],
    );
    assert_eq!(calls, 0);

    let _ = create_or_default(
        |reason| {
            calls += 1;
            Msg::Unsafe(reason)
        },
        "script",
        [],
        [],
    );
    assert_eq!(calls, 1);
}

#[test]
fn test_placeholder_renders_invisible() {
    let node = create_or_default(Msg::Unsafe, "script", [], []).node;
    let html = node.to_html();

    assert!(html.starts_with("<img src=\"safehtml-unsafe-usage:"));
    assert!(html.ends_with("alt=\"\" style=\"width: 0; height: 0\">"));
    assert!(!html.contains("<script"));
}
