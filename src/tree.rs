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

//! A rooted, ordered tree stored as a dense adjacency list.
//!
//! Node ids are `[0, N)`; every non-root id appears exactly once as a
//! child. There are no cycles and no shared children, so plain recursive
//! traversal never needs to guard against a node being visited twice —
//! the `visited` bitmap kept here matches the source layout's defensive
//! style rather than an actual requirement of the invariant.

/// A rooted ordered tree: `adjacency[node]` lists that node's children in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    pub adjacency: Vec<Vec<usize>>,
}

impl Tree {
    pub fn new(n: usize) -> Self {
        Tree {
            adjacency: vec![Vec::new(); n],
        }
    }

    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn get_child(&self, node: usize, index: usize) -> usize {
        self.adjacency[node][index]
    }

    pub fn num_children(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    pub fn children(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub fn add_child(&mut self, parent: usize, child: usize) {
        self.adjacency[parent].push(child);
    }
}

/// Visits every node reachable from `root` in post-order (children before
/// parent), respecting child declaration order.
pub fn post_order(tree: &Tree, root: usize, mut visit: impl FnMut(usize)) {
    let mut visited = vec![false; tree.size()];

    fn recurse(tree: &Tree, curr: usize, visited: &mut [bool], visit: &mut dyn FnMut(usize)) {
        visited[curr] = true;
        for i in 0..tree.num_children(curr) {
            let child = tree.get_child(curr, i);
            if !visited[child] {
                recurse(tree, child, visited, visit);
            }
        }
        visit(curr);
    }

    recurse(tree, root, &mut visited, &mut visit);
}

/// Visits every node reachable from `root` in pre-order (parent before
/// children), respecting child declaration order.
pub fn pre_order(tree: &Tree, root: usize, mut visit: impl FnMut(usize)) {
    let mut visited = vec![false; tree.size()];

    fn recurse(tree: &Tree, curr: usize, visited: &mut [bool], visit: &mut dyn FnMut(usize)) {
        visited[curr] = true;
        visit(curr);
        for i in 0..tree.num_children(curr) {
            let child = tree.get_child(curr, i);
            if !visited[child] {
                recurse(tree, child, visited, visit);
            }
        }
    }

    recurse(tree, root, &mut visited, &mut visit);
}

/// Fills `levels[node]` with the distance of `node` from `root` (`root` is
/// level 0).
pub fn compute_levels(tree: &Tree, root: usize, levels: &mut [i64]) {
    levels[root] = 0;
    pre_order(tree, root, |curr| {
        for i in 0..tree.num_children(curr) {
            let child = tree.get_child(curr, i);
            levels[child] = levels[curr] + 1;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        // 0 -> 1, 2 ; 1 -> 3
        let mut tree = Tree::new(4);
        tree.add_child(0, 1);
        tree.add_child(0, 2);
        tree.add_child(1, 3);
        tree
    }

    #[test]
    fn preorder_visits_parent_before_children() {
        let tree = sample();
        let mut order = Vec::new();
        pre_order(&tree, 0, |n| order.push(n));
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn postorder_visits_children_before_parent() {
        let tree = sample();
        let mut order = Vec::new();
        post_order(&tree, 0, |n| order.push(n));
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn levels_count_distance_from_root() {
        let tree = sample();
        let mut levels = vec![0i64; 4];
        compute_levels(&tree, 0, &mut levels);
        assert_eq!(levels, vec![0, 1, 2, 1]);
    }

    #[test]
    fn single_node_tree_visits_once() {
        let tree = Tree::new(1);
        let mut order = Vec::new();
        pre_order(&tree, 0, |n| order.push(n));
        assert_eq!(order, vec![0]);
    }
}
