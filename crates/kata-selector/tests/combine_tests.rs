//! Integration tests for joining selectors with combinators.
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use kata_common::warning::has_warned;
use kata_selector::{Combinator, Stringify, class, combine, element, id};

#[test]
fn test_combine_next_sibling() {
    let left = element("div").and_then(|s| s.id("main")).unwrap();
    let right = element("table").and_then(|s| s.id("data")).unwrap();
    let combined = combine(&left, "+", &right);
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_combine_with_enum_combinators() {
    let ul = element("ul").unwrap();
    let li = element("li").unwrap();

    assert_eq!(combine(&ul, &Combinator::Child, &li).stringify(), "ul > li");
    assert_eq!(combine(&ul, &Combinator::NextSibling, &li).stringify(), "ul + li");
    assert_eq!(
        combine(&ul, &Combinator::SubsequentSibling, &li).stringify(),
        "ul ~ li"
    );
    // Descendant is a single space, still padded on both sides.
    assert_eq!(combine(&ul, &Combinator::Descendant, &li).stringify(), "ul   li");
}

#[test]
fn test_combine_leaves_operands_unchanged() {
    let left = class("a").unwrap();
    let right = class("b").unwrap();
    let _combined = combine(&left, ">", &right);
    assert_eq!(left.stringify(), ".a");
    assert_eq!(right.stringify(), ".b");

    // Operands remain usable builders.
    let left = left.pseudo_class("hover").unwrap();
    assert_eq!(left.stringify(), ".a:hover");
}

#[test]
fn test_combine_nests_left() {
    let a = element("a").unwrap();
    let b = element("b").unwrap();
    let c = element("c").unwrap();
    let nested = combine(&combine(&a, "~", &b), ">", &c);
    assert_eq!(nested.stringify(), "a ~ b > c");
}

#[test]
fn test_combine_nests_right() {
    let a = element("a").unwrap();
    let b = element("b").unwrap();
    let c = element("c").unwrap();
    let nested = combine(&a, "+", &combine(&b, "+", &c));
    assert_eq!(nested.to_string(), "a + b + c");
}

#[test]
fn test_unknown_combinator_passes_through_with_warning() {
    let left = element("col").unwrap();
    let right = element("td").unwrap();
    let combined = combine(&left, "||", &right);
    assert_eq!(combined.stringify(), "col || td");
    assert!(has_warned(
        "selector",
        "'||' is not a CSS combinator; passing it through verbatim"
    ));
}

#[test]
fn test_empty_combinator_still_gets_spaces() {
    let left = element("p").unwrap();
    let right = element("span").unwrap();
    assert_eq!(combine(&left, "", &right).stringify(), "p  span");
}

#[test]
fn test_combine_accepts_trait_objects() {
    let left = element("h1").unwrap();
    let right = combine(&element("h2").unwrap(), "+", &element("p").unwrap());
    let operands: [&dyn Stringify; 2] = [&left, &right];
    let combined = combine(operands[0], ">", operands[1]);
    assert_eq!(combined.stringify(), "h1 > h2 + p");
}

#[test]
fn test_combine_with_id_chain() {
    let form = id("signup").unwrap();
    let input = element("input")
        .and_then(|s| s.attr("type=email"))
        .unwrap();
    assert_eq!(
        combine(&form, " ", &input).stringify(),
        "#signup   input[type=email]"
    );
}
