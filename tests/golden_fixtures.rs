//! ASCII golden renders ported verbatim from `parens.hpp`'s compile-time
//! test suite, using the `thin` style with no overrides (its defaults are
//! the `default_style` those tests run against).

use boxtree::layout::compute_layout;
use boxtree::parsing::{self, Format};
use boxtree::scene::Scene;
use boxtree::style::Style;
use boxtree::tree_sprite::TreeSprite;

fn render(input: &str) -> String {
    let parsed = parsing::parse(Format::Parentheses, input).expect("valid parentheses input");
    let style = Style::thin();
    let layout = compute_layout(&parsed.tree, parsed.root, &parsed.node_labels, &parsed.edge_labels, &style);
    let sprite = TreeSprite::new(&parsed.tree, parsed.root, &parsed.node_labels, &parsed.edge_labels, &layout);
    let scene = Scene::new(sprite.into_sprite());
    scene.render(&style)
}

#[test]
fn two_children_renders_the_reference_ascii_tree() {
    let lines: [&str; 7] = [
        "   ┌───┐    ",
        "   | 0 |    ",
        "   └─┬─┘    ",
        "  ┌──┴───┐  ",
        "┌─┴─┐  ┌─┴─┐",
        "| 1 |  | 2 |",
        "└───┘  └───┘",
    ];
    let expected = lines.join("\n") + "\n";
    assert_eq!(render("(()())"), expected);
}

#[test]
fn three_children_with_a_nested_grandchild_renders_the_reference_ascii_tree() {
    let lines: [&str; 11] = [
        "       ┌───┐       ",
        "       | 0 |       ",
        "       └─┬─┘       ",
        "  ┌──────┼──────┐  ",
        "┌─┴─┐  ┌─┴─┐  ┌─┴─┐",
        "| 1 |  | 2 |  | 3 |",
        "└───┘  └───┘  └─┬─┘",
        "                |  ",
        "              ┌─┴─┐",
        "              | 4 |",
        "              └───┘",
    ];
    let expected = lines.join("\n") + "\n";
    assert_eq!(render("(()()(()))"), expected);
}
