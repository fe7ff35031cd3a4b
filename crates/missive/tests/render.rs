//! Integration tests for the render pipeline.

use std::collections::HashMap;

use missive::{Bundle, Message, Resolver, StaticBundles, Variable, vars};

fn resolver() -> Resolver<StaticBundles> {
    let mut bundle = Bundle::new();
    bundle.insert("none", "Hello.");
    bundle.insert("one", "b.c~Hello, %s.");
    bundle.insert("two", "b.c,a~Hello, %s, %s.");
    bundle.insert("three", "f.0,f.1~%s %s.");
    bundle.insert("nullable", "z~Value: %s.");
    bundle.insert("positioned", "$1,$2,fred~First: %s, Second: %s, Third: %s.");
    bundle.insert("all", "$@~First: %s, Second: %s.");
    bundle.insert("gapped", "$@~Got: %s.");
    bundle.insert("mixed", "$@,module~File %s not found in %s.");
    bundle.insert("raw", "No markers here, 50% off.");
    bundle.insert("literal", "~100%% guaranteed %s");
    bundle.insert("padded", "  Hello.  ");
    bundle.insert("wide", "width~The launch lasted %10.3f seconds.");

    let mut bundles = StaticBundles::new();
    bundles.insert("example.app.test_messages", bundle);
    Resolver::new(bundles)
}

fn tree() -> Variable {
    vars! {
        "a" => "b",
        "b" => vars! {
            "c" => Variable::type_name::<String>(),
            "e" => vec!["a", "b", "c"],
        },
        "f" => Variable::List(vec![Variable::from(1), Variable::from("a")]),
    }
}

fn message(key: &str) -> Message {
    Message::new("example.app.Widget", "test_messages", key, tree())
}

// =============================================================================
// Well-formed messages render the formatter's output verbatim
// =============================================================================

#[test]
fn no_parameters() {
    assert_eq!(resolver().render(&message("none")), "Hello.");
}

#[test]
fn one_parameter() {
    assert_eq!(
        resolver().render(&message("one")),
        "Hello, alloc::string::String."
    );
}

#[test]
fn two_parameters() {
    assert_eq!(
        resolver().render(&message("two")),
        "Hello, alloc::string::String, b."
    );
}

#[test]
fn list_arguments() {
    assert_eq!(resolver().render(&message("three")), "1 a.");
}

#[test]
fn width_and_precision() {
    let message = Message::new(
        "example.app.Widget",
        "test_messages",
        "wide",
        vars! { "width" => 1.5 },
    );
    assert_eq!(
        resolver().render(&message),
        "The launch lasted      1.500 seconds."
    );
}

#[test]
fn missing_final_key_formats_as_null() {
    // Navigation to a missing top-level key succeeds with the null leaf.
    assert_eq!(resolver().render(&message("nullable")), "Value: null.");
}

#[test]
fn rendering_is_repeatable() {
    let message = message("none");
    let resolver = resolver();
    assert_eq!(resolver.render(&message), "Hello.");
    assert_eq!(resolver.render(&message), "Hello.");
}

// =============================================================================
// Templates without selectors pass through untouched
// =============================================================================

#[test]
fn no_separator_returns_trimmed_text_verbatim() {
    assert_eq!(
        resolver().render(&message("raw")),
        "No markers here, 50% off."
    );
}

#[test]
fn leading_separator_skips_the_formatter() {
    // Zero selectors: specifier-like sequences survive unprocessed.
    assert_eq!(
        resolver().render(&message("literal")),
        "100%% guaranteed %s"
    );
}

#[test]
fn entry_text_is_trimmed() {
    assert_eq!(resolver().render(&message("padded")), "Hello.");
}

// =============================================================================
// Positional arguments
// =============================================================================

#[test]
fn positioned_by_name() {
    let variables = Message::position(
        HashMap::from([("fred".to_string(), Variable::from("fred"))]),
        ["1", "2"],
    );
    let message = Message::new(
        "example.app.Widget",
        "test_messages",
        "positioned",
        variables,
    );
    assert_eq!(
        resolver().render(&message),
        "First: 1, Second: 2, Third: fred."
    );
}

#[test]
fn position_round_trip() {
    let variables = Variable::Map(Message::position(HashMap::new(), ["x", "y"]));
    assert_eq!(
        missive::get(&variables, "$1").unwrap(),
        Some(&Variable::from("x"))
    );
    assert_eq!(
        missive::get(&variables, "$2").unwrap(),
        Some(&Variable::from("y"))
    );
}

#[test]
fn all_positional_expansion() {
    let message = Message::new(
        "example.app.Widget",
        "test_messages",
        "all",
        vars! { "$1" => "1", "$2" => "2", "other" => "x" },
    );
    assert_eq!(resolver().render(&message), "First: 1, Second: 2.");
}

#[test]
fn expansion_stops_at_first_gap() {
    let message = Message::new(
        "example.app.Widget",
        "test_messages",
        "gapped",
        vars! { "$1" => "1", "$3" => "3" },
    );
    assert_eq!(resolver().render(&message), "Got: 1.");
}

#[test]
fn named_selectors_mix_with_expansion() {
    let message = Message::new(
        "example.app.Widget",
        "test_messages",
        "mixed",
        vars! { "$1" => "lib.rs", "module" => "loader" },
    );
    assert_eq!(
        resolver().render(&message),
        "File lib.rs not found in loader."
    );
}
