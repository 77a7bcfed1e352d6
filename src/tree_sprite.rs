/*
MIT License

Copyright (c) 2025 Ritchie Mwewa

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Assembles a [`TreeLayout`] into a single renderable [`TreeSprite`]: one
//! [`NodeSprite`] per node, plus the branch geometry connecting each parent
//! to its children.
//!
//! A parent with one child draws either a straight vertical stub (when the
//! child's center column already lines up with the parent's) or an S-curve
//! [`Spline3Sprite`] when it doesn't. A parent with two or more children
//! draws a horizontal "trunk" below itself, with a joint over every
//! attachment point and — if the trunk's own descent point doesn't land
//! under the parent — a couple of extra stub segments to carry it there.

use crate::geometry::{midpoint, translate, HorizontalSegment, Point, Rect, VerticalSegment};
use crate::labels::Labels;
use crate::layout::TreeLayout;
use crate::sprite::{CompositeSprite, IdGen, JointSprite, Sprite};
use crate::sprite::{HorizontalLineSprite, NodeSprite, Spline3Sprite, TranslateSprite, VerticalLineSprite};
use crate::style::{MultiJoint, Style};
use crate::tree::Tree;

fn bot_mid(rect: Rect) -> Point {
    let seg = rect.bot_segment();
    midpoint(seg.p1, seg.p2)
}

fn top_mid(rect: Rect) -> Point {
    let seg = rect.top_segment();
    midpoint(seg.p1, seg.p2)
}

/// Integer midpoint of two line (or column) coordinates, rounding toward
/// `a` on ties — matches `std::midpoint` for the single-axis case used
/// throughout trunk geometry.
fn line_midpoint(a: i64, b: i64) -> i64 {
    a + (b - a) / 2
}

/// The fully assembled render of one tree: every node box plus every
/// branch, flattened into a single composite sprite.
#[derive(Debug, Clone)]
pub struct TreeSprite {
    composite: Sprite,
}

impl TreeSprite {
    pub fn new(tree: &Tree, root: usize, node_labels: &Labels, _edge_labels: &Labels, layout: &TreeLayout) -> Self {
        let mut ids = IdGen::new();
        let num_nodes = tree.size();
        let mut sprites = Vec::new();

        for node in 0..num_nodes {
            let rect = layout[node].rect;
            let node_height = rect.height();
            let node_width = rect.width();
            let is_top_connected = node != root;
            let is_bot_connected = tree.num_children(node) > 0;
            debug_assert!(node_height > 0);
            debug_assert!(node_width > 0);

            let node_sprite = Sprite::Node(NodeSprite::new(
                &mut ids,
                node_height,
                node_width,
                is_top_connected,
                is_bot_connected,
                node_labels.get(node),
            ));
            sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), node_sprite, rect.p1.line, rect.p1.column)));
        }

        for node in 0..num_nodes {
            let num_children = tree.num_children(node);
            if num_children == 1 {
                let child = tree.get_child(node, 0);
                add_single_branch(&mut ids, &mut sprites, layout, node, child);
            } else if num_children > 1 {
                add_trunk(&mut ids, &mut sprites, tree, layout, node);
            }
        }

        let composite = Sprite::Composite(CompositeSprite::new(ids.next(), sprites));
        TreeSprite { composite }
    }

    pub fn rect(&self) -> Rect {
        self.composite.rect()
    }

    /// Unwraps the assembled sprite tree for handoff to a [`crate::scene::Scene`].
    pub fn into_sprite(self) -> Sprite {
        self.composite
    }

    pub fn draw(&self, style: &Style, cursor: Point) -> crate::sprite::DrawResult {
        debug_assert!(self.rect().envelopes(cursor));
        self.composite.draw(style, cursor)
    }

    pub fn category(&self) -> crate::sprite::Category {
        use crate::sprite::Category;
        Category::NODE | Category::BRANCH | Category::TEXT
    }
}

fn add_single_branch(ids: &mut IdGen, sprites: &mut Vec<Sprite>, layout: &TreeLayout, node: usize, child: usize) {
    let parent_rect = layout[node].rect;
    let child_rect = layout[child].rect;

    let parent_point = bot_mid(parent_rect);
    let child_point = top_mid(child_rect);

    if parent_point.column == child_point.column {
        let line = Sprite::VerticalLine(VerticalLineSprite::new(ids.next(), child_point.line - parent_point.line, true, true));
        sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), line, parent_point.line, parent_point.column)));
    } else {
        let mid1 = Point::new(line_midpoint(parent_point.line, child_point.line), parent_point.column);
        let mid2 = Point::new(mid1.line, child_point.column);

        let r1 = translate(mid1, -parent_point.line, -parent_point.column);
        let r2 = translate(mid2, -parent_point.line, -parent_point.column);
        let r3 = translate(child_point, -parent_point.line, -parent_point.column);

        let spline = Spline3Sprite::new(ids, r1, r2, r3, true, true);
        sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), Sprite::Spline3(spline), parent_point.line, parent_point.column)));
    }
}

fn add_trunk(ids: &mut IdGen, sprites: &mut Vec<Sprite>, tree: &Tree, layout: &TreeLayout, node: usize) {
    let num_children = tree.num_children(node);
    let leftmost = tree.get_child(node, 0);
    let rightmost = tree.get_child(node, num_children - 1);

    let parent_rect = layout[node].rect;
    let left_rect = layout[leftmost].rect;
    let right_rect = layout[rightmost].rect;

    let parent_point = bot_mid(parent_rect);
    let left_point = top_mid(left_rect);
    let right_point = top_mid(right_rect);

    let trunk_down = Point::new(line_midpoint(parent_point.line, left_point.line), parent_point.column);
    let trunk_left = Point::new(trunk_down.line, left_point.column);
    let trunk_right = Point::new(trunk_down.line, right_point.column);

    let trunk_length = HorizontalSegment::new(trunk_left, trunk_right).signed_length();
    let trunk_hline = Sprite::HorizontalLine(HorizontalLineSprite::new(ids.next(), trunk_length, true, true));
    sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), trunk_hline, trunk_left.line, trunk_left.column)));

    let trunk_height = VerticalSegment::new(parent_point, trunk_down).signed_length();
    let trunk_vline = Sprite::VerticalLine(VerticalLineSprite::new(ids.next(), trunk_height, true, true));
    sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), trunk_vline, parent_point.line, parent_point.column)));

    let down_joint = if trunk_down == trunk_left {
        MultiJoint::RightDownUp
    } else if trunk_down == trunk_right {
        MultiJoint::DownLeftUp
    } else if trunk_down.column > trunk_right.column {
        MultiJoint::LeftUp
    } else if trunk_down.column < trunk_left.column {
        MultiJoint::RightUp
    } else {
        MultiJoint::RightLeftUp
    };
    sprites.push(Sprite::Translate(TranslateSprite::new(
        ids.next(),
        Sprite::Joint(JointSprite::new(ids.next(), down_joint)),
        trunk_down.line,
        trunk_down.column,
    )));

    if trunk_left != trunk_down {
        let corner = if trunk_left.column < trunk_down.column { MultiJoint::RightDown } else { MultiJoint::RightDownLeft };
        sprites.push(Sprite::Translate(TranslateSprite::new(
            ids.next(),
            Sprite::Joint(JointSprite::new(ids.next(), corner)),
            trunk_left.line,
            trunk_left.column,
        )));
    }

    if trunk_right != trunk_down {
        let corner = if trunk_right.column > trunk_down.column { MultiJoint::DownLeft } else { MultiJoint::RightDownLeft };
        sprites.push(Sprite::Translate(TranslateSprite::new(
            ids.next(),
            Sprite::Joint(JointSprite::new(ids.next(), corner)),
            trunk_right.line,
            trunk_right.column,
        )));
    }

    if trunk_down.column < trunk_left.column {
        let line = Sprite::HorizontalLine(HorizontalLineSprite::new(ids.next(), trunk_left.column - trunk_down.column, true, true));
        sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), line, trunk_down.line, trunk_down.column)));
    }

    if trunk_down.column > trunk_right.column {
        let line = Sprite::HorizontalLine(HorizontalLineSprite::new(ids.next(), trunk_right.column - trunk_down.column, true, true));
        sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), line, trunk_right.line, trunk_right.column)));
    }

    for i in 1..num_children.saturating_sub(1) {
        let child = tree.get_child(node, i);
        let child_point = top_mid(layout[child].rect);
        let trunk_point = Point::new(trunk_down.line, child_point.column);

        let joint = if trunk_point == trunk_down { MultiJoint::All } else { MultiJoint::RightDownLeft };
        sprites.push(Sprite::Translate(TranslateSprite::new(
            ids.next(),
            Sprite::Joint(JointSprite::new(ids.next(), joint)),
            trunk_point.line,
            trunk_point.column,
        )));
    }

    for i in 0..num_children {
        let child = tree.get_child(node, i);
        let child_point = top_mid(layout[child].rect);
        let trunk_point = Point::new(trunk_down.line, child_point.column);
        let dist = (child_point.line - trunk_point.line).abs();
        if dist > 1 {
            let line = Sprite::VerticalLine(VerticalLineSprite::new(ids.next(), dist, true, true));
            sprites.push(Sprite::Translate(TranslateSprite::new(ids.next(), line, trunk_point.line, trunk_point.column)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Labels;
    use crate::layout::compute_layout;
    use crate::style::Style;
    use crate::tree::Tree;

    #[test]
    fn single_root_has_no_branches_and_a_positive_rect() {
        let tree = Tree::new(1);
        let labels = Labels::from_vec(vec!["a".to_string()]);
        let style = Style::thin();
        let layout = compute_layout(&tree, 0, &labels, &labels, &style);
        let sprite = TreeSprite::new(&tree, 0, &labels, &labels, &layout);
        assert!(sprite.rect().width() > 0);
        assert!(sprite.rect().height() > 0);
    }

    #[test]
    fn three_children_trunk_spans_the_leftmost_to_rightmost_child() {
        let mut tree = Tree::new(4);
        tree.add_child(0, 1);
        tree.add_child(0, 2);
        tree.add_child(0, 3);
        let labels = Labels::from_vec(vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()]);
        let style = Style::thin();
        let layout = compute_layout(&tree, 0, &labels, &labels, &style);
        let sprite = TreeSprite::new(&tree, 0, &labels, &labels, &layout);
        assert!(sprite.rect().height() >= layout[0].rect.height());
    }
}
