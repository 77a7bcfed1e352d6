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

//! Turns a labeled tree plus a [`Style`] into absolute, non-overlapping
//! rectangles for every node — the one pass that owns all of the tree's
//! horizontal-packing arithmetic.
//!
//! The algorithm runs in three sweeps over the tree:
//! 1. preorder: assign each node's `line` (its top row), derived from the
//!    maximum box height seen so far at each level plus the level margin;
//! 2. postorder: assign each node a *relative* horizontal `offset` from its
//!    parent, and build a left/right [`Contour`] for its subtree so that
//!    siblings can be packed against each other without overlapping;
//! 3. preorder again: walk the relative offsets down from the root to turn
//!    them into each node's final absolute [`Rect`].

use crate::contour::Contour;
use crate::geometry::{Point, Rect};
use crate::labels::Labels;
use crate::style::{Style, TreeAlignment};
use crate::tree::{compute_levels, post_order, pre_order, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLayout {
    pub rect: Rect,
}

impl NodeLayout {
    pub fn new(rect: Rect) -> Self {
        NodeLayout { rect }
    }
}

impl Default for NodeLayout {
    fn default() -> Self {
        NodeLayout::new(Rect::new(Point::ORIGIN, Point::ORIGIN))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    layout: Vec<NodeLayout>,
}

impl TreeLayout {
    pub fn new(n: usize) -> Self {
        TreeLayout { layout: vec![NodeLayout::default(); n] }
    }

    pub fn size(&self) -> usize {
        self.layout.len()
    }
}

impl std::ops::Index<usize> for TreeLayout {
    type Output = NodeLayout;

    fn index(&self, index: usize) -> &NodeLayout {
        &self.layout[index]
    }
}

impl std::ops::IndexMut<usize> for TreeLayout {
    fn index_mut(&mut self, index: usize) -> &mut NodeLayout {
        &mut self.layout[index]
    }
}

fn max_text_line_length(text: &str) -> i64 {
    text.split('\n').map(|line| line.chars().count() as i64).max().unwrap_or(0)
}

fn text_line_count(text: &str) -> i64 {
    text.matches('\n').count() as i64 + 1
}

pub fn compute_layout(tree: &Tree, root: usize, node_labels: &Labels, _edge_labels: &Labels, style: &Style) -> TreeLayout {
    let n = tree.size();

    let mut result = TreeLayout::new(n);
    let mut levels = vec![0i64; n];
    let mut max_level_height = vec![0i64; n];
    let mut max_level_margin = vec![0i64; n];
    let mut lines = vec![0i64; n];
    let mut offsets = vec![0i64; n];
    let mut node_width = vec![0i64; n];
    let mut node_height = vec![0i64; n];
    let mut left_contours: Vec<Contour> = vec![Contour::new(); n];
    let mut right_contours: Vec<Contour> = vec![Contour::new(); n];

    compute_levels(tree, root, &mut levels);

    for node in 0..n {
        let text_length = max_text_line_length(node_labels.get(node)).max(1);
        let text_lines = text_line_count(node_labels.get(node));
        let h_padding = style.node_horizontal_padding * 2;
        let v_padding = style.node_vertical_padding * 2;

        node_width[node] = style.node_minimum_width.max(text_length + h_padding + 2);
        node_height[node] = style.node_minimum_height.max(text_lines + v_padding + 2);

        if node_width[node] % 2 == 0 {
            node_width[node] += 1;
        }
    }

    for node in 0..n {
        let level = levels[node] as usize;
        max_level_height[level] = max_level_height[level].max(node_height[node]);
        max_level_margin[level] = max_level_margin[level].max(style.level_margin);
    }

    pre_order(tree, root, |curr| {
        let level = levels[curr] as usize;
        for i in 0..tree.num_children(curr) {
            let child = tree.get_child(curr, i);
            lines[child] = lines[curr] + max_level_height[level] + max_level_margin[level];
        }
    });

    post_order(tree, root, |curr| {
        let num_children = tree.num_children(curr);
        let width_of = |node: usize| node_width[node];

        if num_children == 0 {
            offsets[curr] = 0;
            left_contours[curr].push_back(curr, 0);
            right_contours[curr].push_back(curr, 0);
            return;
        }

        if num_children == 1 {
            let child = tree.get_child(curr, 0);
            let w1 = node_width[curr];
            let w2 = node_width[child];

            match style.tree_align {
                TreeAlignment::Center => {
                    if w2 > w1 {
                        offsets[child] = -((w2 - w1 + 1) / 2);
                    } else if w2 < w1 {
                        offsets[child] = (w1 - w2 + 1) / 2;
                    }
                }
                TreeAlignment::Right => {
                    if w2 > w1 {
                        offsets[child] = -(w2 - w1);
                    } else if w2 < w1 {
                        offsets[child] = w1 - w2;
                    }
                }
                TreeAlignment::None | TreeAlignment::Left => {}
            }

            left_contours[curr] = std::mem::replace(&mut left_contours[child], Contour::new());
            right_contours[curr] = std::mem::replace(&mut right_contours[child], Contour::new());
            left_contours[curr][0].offset = offsets[child];
            right_contours[curr][0].offset = offsets[child];
            left_contours[curr].push_front(curr, 0);
            right_contours[curr].push_front(curr, 0);

            return;
        }

        if num_children == 2 {
            let left_child = tree.get_child(curr, 0);
            let right_child = tree.get_child(curr, 1);

            let mut offset = Contour::minimum_offset(&right_contours[left_child], &left_contours[right_child], &width_of);
            offset += style.sibling_margin;

            let total_width = offset + node_width[right_child];
            let current_width = node_width[curr];

            let mut offset1 = 0i64;
            let mut offset2 = offset;

            match style.tree_align {
                TreeAlignment::None | TreeAlignment::Left => {}
                TreeAlignment::Center => {
                    offset1 = offset1 - (total_width / 2) + ((current_width + 1) / 2);
                    offset2 = offset2 - (total_width - (total_width / 2)) + ((current_width + 1) / 2);
                }
                TreeAlignment::Right => {
                    offset1 = offset1 - total_width + current_width;
                    offset2 = offset2 - total_width + current_width;
                }
            }

            offsets[curr] = 0;
            offsets[left_child] = offset1;
            offsets[right_child] = offset2;

            left_contours[curr] = std::mem::replace(&mut left_contours[left_child], Contour::new());
            right_contours[curr] = std::mem::replace(&mut right_contours[right_child], Contour::new());

            left_contours[curr][0].offset = offset1;
            right_contours[curr][0].offset = offset2;

            left_contours[curr].merge(std::mem::replace(&mut left_contours[right_child], Contour::new()));
            right_contours[curr].merge(std::mem::replace(&mut right_contours[left_child], Contour::new()));

            left_contours[curr].push_front(curr, 0);
            right_contours[curr].push_front(curr, 0);

            return;
        }

        // more than two children
        let leftmost_child = tree.get_child(curr, 0);
        let rightmost_child = tree.get_child(curr, num_children - 1);
        let mut previous_right_contour = std::mem::replace(&mut right_contours[leftmost_child], Contour::new());
        let mut previous_left_contour = std::mem::replace(&mut left_contours[leftmost_child], Contour::new());
        let mut total_width = 0i64;

        for i in 1..num_children {
            let child = tree.get_child(curr, i);
            let prev_child = tree.get_child(curr, i - 1);

            left_contours[child][0].offset = offsets[prev_child];
            right_contours[child][0].offset = offsets[prev_child];

            let mut offset = Contour::minimum_offset(&previous_right_contour, &left_contours[child], &width_of);
            offset += style.sibling_margin;

            right_contours[child][0].offset = offsets[prev_child] + offset;
            left_contours[child][0].offset = offsets[prev_child] + offset;

            let mut right_contour_child = std::mem::replace(&mut right_contours[child], Contour::new());
            right_contour_child.merge(previous_right_contour);
            previous_left_contour.merge(std::mem::replace(&mut left_contours[child], Contour::new()));
            previous_right_contour = right_contour_child;

            offsets[child] = offsets[prev_child] + offset;
            total_width = offsets[child] + node_width[child];
        }

        match style.tree_align {
            TreeAlignment::None | TreeAlignment::Left => {}
            TreeAlignment::Center => {
                for i in 0..num_children {
                    let child = tree.get_child(curr, i);
                    offsets[child] = offsets[child] - (total_width / 2) + (node_width[curr] / 2);
                }
            }
            TreeAlignment::Right => {
                for i in 0..num_children {
                    let child = tree.get_child(curr, i);
                    offsets[child] = offsets[child] - total_width + node_width[curr];
                }
            }
        }

        left_contours[curr] = previous_left_contour;
        right_contours[curr] = previous_right_contour;
        left_contours[curr][0].offset = offsets[leftmost_child];
        right_contours[curr][0].offset = offsets[rightmost_child];

        left_contours[curr].push_front(curr, 0);
        right_contours[curr].push_front(curr, 0);
    });

    let root_top_left = Point::new(0, 0);
    let root_bot_right = Point::new(node_height[root] - 1, node_width[root] - 1);
    result[root] = NodeLayout::new(Rect::new(root_top_left, root_bot_right));

    pre_order(tree, root, |curr| {
        let parent_rect = result[curr].rect;
        let parent_left_column = parent_rect.left_column();

        for i in 0..tree.num_children(curr) {
            let child = tree.get_child(curr, i);
            let child_line = lines[child];
            let child_left_column = parent_left_column + offsets[child];
            let child_height = node_height[child];
            let child_width = node_width[child];

            let top_left = Point::new(child_line, child_left_column);
            let bot_right = Point::new(child_line + child_height - 1, child_left_column + child_width - 1);
            result[child] = NodeLayout::new(Rect::new(top_left, bot_right));
        }
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(num_children: usize) -> Tree {
        let mut tree = Tree::new(1 + num_children);
        for i in 0..num_children {
            tree.add_child(0, 1 + i);
        }
        tree
    }

    #[test]
    fn leaf_gets_a_single_box_rect() {
        let tree = Tree::new(1);
        let labels = Labels::new(1);
        let style = Style::thin();
        let layout = compute_layout(&tree, 0, &labels, &labels, &style);
        assert_eq!(layout[0].rect.top_line(), 0);
        assert_eq!(layout[0].rect.left_column(), 0);
    }

    #[test]
    fn children_of_a_star_do_not_overlap_horizontally() {
        let tree = star(3);
        let mut labels = Labels::new(4);
        for i in 0..4 {
            labels.set(i, "x".into());
        }
        let style = Style::thin();
        let layout = compute_layout(&tree, 0, &labels, &labels, &style);

        let mut child_rects: Vec<Rect> = (1..4).map(|i| layout[i].rect).collect();
        child_rects.sort_by_key(|r| r.left_column());
        for pair in child_rects.windows(2) {
            assert!(pair[0].right_column() < pair[1].left_column());
        }
    }

    #[test]
    fn children_sit_strictly_below_their_parent() {
        let tree = star(2);
        let mut labels = Labels::new(3);
        for i in 0..3 {
            labels.set(i, "hello".into());
        }
        let style = Style::thin();
        let layout = compute_layout(&tree, 0, &labels, &labels, &style);
        assert!(layout[1].rect.top_line() > layout[0].rect.bot_line());
        assert!(layout[2].rect.top_line() > layout[0].rect.bot_line());
    }

    #[test]
    fn unary_child_is_centered_under_a_wider_parent() {
        let tree = star(1);
        let mut labels = Labels::new(2);
        labels.set(0, "a much longer parent label".into());
        labels.set(1, "x".into());
        let style = Style::thin();
        let layout = compute_layout(&tree, 0, &labels, &labels, &style);

        let parent = layout[0].rect;
        let child = layout[1].rect;
        let parent_mid = parent.left_column() + (parent.width() / 2);
        let child_mid = child.left_column() + (child.width() / 2);
        assert!((parent_mid - child_mid).abs() <= 1);
    }
}
