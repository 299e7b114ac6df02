//! End-to-end catalog tests: declaration in, addressable render out.

use crate::args;
use crate::template::tests::FakeComponent;
use crate::{ArgumentSet, Component, RenderTemplate, StoryEntry};

#[test]
fn test_end_to_end_examples_button() {
    crate::logging::init();
    let button = FakeComponent::named("Button");

    let entry = StoryEntry::builder("Examples/Button", button.clone())
        .template(RenderTemplate::passthrough())
        .variant("Default", args! { "children": "Click" })
        .build()
        .unwrap();

    let listed: Vec<_> = entry.list_variants().collect();
    assert_eq!(listed.len(), 1);
    let (id, name) = listed[0];
    assert_eq!(id.as_str(), "examples-button--default");
    assert_eq!(name, "Default");

    // Rendering with no runtime args is equivalent to invoking the
    // component directly with the declared defaults.
    let via_story = entry.render(id.as_str(), &ArgumentSet::new()).unwrap();
    let direct = button.invoke(&args! { "children": "Click" });
    assert_eq!(via_story, direct);
}

#[test]
fn test_end_to_end_non_ascii_declaration() {
    // The original authoring surface this catalog serves: title 示例/按钮,
    // variant 默认, args { children: 点击 }.
    let button = FakeComponent::named("Button");

    let entry = StoryEntry::builder("示例/按钮", button.clone())
        .template(RenderTemplate::passthrough())
        .variant("默认", args! { "children": "点击" })
        .build()
        .unwrap();

    let (id, name) = entry.list_variants().next().unwrap();
    assert_eq!(id.as_str(), "示例-按钮--默认");
    assert_eq!(name, "默认");

    let out = entry.render("示例-按钮--默认", &ArgumentSet::new()).unwrap();
    assert_eq!(out, button.invoke(&args! { "children": "点击" }));
}

#[test]
fn test_sibling_variants_do_not_share_defaults() {
    let entry = StoryEntry::builder("Examples/Button", FakeComponent::named("Button"))
        .template(RenderTemplate::passthrough())
        .variant("Primary", args! { "variant": "primary", "size": "md" })
        .variant("Ghost", args! { "variant": "ghost" })
        .build()
        .unwrap();

    // Rendering one variant with runtime overrides leaves the other's
    // defaults untouched.
    let primary = entry
        .render("examples-button--primary", &args! { "size": "lg" })
        .unwrap();
    assert_eq!(primary.args, args! { "variant": "primary", "size": "lg" });

    let ghost = entry
        .render("examples-button--ghost", &ArgumentSet::new())
        .unwrap();
    assert_eq!(ghost.args, args! { "variant": "ghost" });
}
