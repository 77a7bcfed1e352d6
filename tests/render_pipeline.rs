//! End-to-end parse → layout → sprite → scene runs for the bitstring and
//! markdown notations, complementing the parentheses golden fixtures with
//! structural (not byte-exact) assertions.

use boxtree::layout::compute_layout;
use boxtree::parsing::{self, Format};
use boxtree::scene::Scene;
use boxtree::style::Style;
use boxtree::tree_sprite::TreeSprite;

fn render(format: Format, input: &str) -> String {
    let parsed = parsing::parse(format, input).expect("valid input");
    let style = Style::thin();
    let layout = compute_layout(&parsed.tree, parsed.root, &parsed.node_labels, &parsed.edge_labels, &style);
    let sprite = TreeSprite::new(&parsed.tree, parsed.root, &parsed.node_labels, &parsed.edge_labels, &layout);
    let scene = Scene::new(sprite.into_sprite());
    scene.render(&style)
}

#[test]
fn bitstring_tree_renders_one_box_per_node() {
    let output = render(Format::Bitstring, "111");
    assert_eq!(output.matches('|').count(), 6);
    assert!(output.contains("0"));
    assert!(output.contains("1"));
    assert!(output.contains("2"));
}

#[test]
fn markdown_tree_renders_nested_labels() {
    let output = render(Format::Markdown, "# root\n## left\n## right");
    assert!(output.contains("root"));
    assert!(output.contains("left"));
    assert!(output.contains("right"));
    assert!(output.lines().count() >= 4);
}

#[test]
fn single_node_tree_is_just_a_box() {
    let output = render(Format::Bitstring, "1");
    let expected = "\
┌───┐
| 0 |
└───┘
";
    assert_eq!(output, expected);
}

#[test]
fn auto_detection_agrees_with_explicit_format_selection() {
    let text = "(()())";
    let detected = parsing::detect_format(text).unwrap();
    assert_eq!(detected, Format::Parentheses);
    assert_eq!(render(detected, text), render(Format::Parentheses, text));
}
