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

//! Parses a tree out of Markdown-style heading lines: `#` for the root,
//! `##` for its children, `###` for theirs, and so on. Nesting is preorder
//! — a line becomes a child of the most recent line with a strictly
//! smaller `#` count. Non-heading lines are ignored entirely. A heading
//! with no text after its `#`s defaults to its own node index.

use super::{ParseResult, Parsed};
use crate::labels::Labels;
use crate::tree::Tree;

fn recurse(curr: usize, lines: &[&str], levels: &[usize], tree: &mut Tree) -> usize {
    debug_assert!(curr < lines.len());

    let mut child = curr + 1;
    let mut count = 1;

    while child < lines.len() && levels[child] > levels[curr] {
        let child_lines = recurse(child, lines, levels, tree);
        tree.add_child(curr, child);
        child += child_lines;
        count += child_lines;
    }

    count
}

pub fn parse(text: &str) -> ParseResult {
    let mut lines = Vec::new();
    let mut levels = Vec::new();

    for line in text.split('\n') {
        if line.starts_with('#') {
            levels.push(line.matches('#').count());
            lines.push(line);
        }
    }

    let num_nodes = lines.len();
    let mut tree = Tree::new(num_nodes);
    let mut node_labels = Labels::new(num_nodes);
    let mut edge_labels = Labels::new(num_nodes);

    if num_nodes > 0 {
        recurse(0, &lines, &levels, &mut tree);
    }

    for (i, line) in lines.iter().enumerate() {
        let label = line.trim_start_matches('#');
        node_labels.set(i, if label.is_empty() { i.to_string() } else { label.to_string() });
        edge_labels.set(i, String::new());
    }

    Ok(Parsed { tree, root: 0, node_labels, edge_labels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_heading_is_the_root() {
        let parsed = parse("# root").unwrap();
        assert_eq!(parsed.tree.size(), 1);
        assert_eq!(parsed.node_labels.get(0), " root");
    }

    #[test]
    fn deeper_headings_nest_under_the_last_shallower_one() {
        let parsed = parse("# root\n## a\n### a1\n## b").unwrap();
        assert_eq!(parsed.tree.size(), 4);
        assert_eq!(parsed.tree.num_children(0), 2);
        let a = parsed.tree.children(0)[0];
        assert_eq!(parsed.tree.num_children(a), 1);
    }

    #[test]
    fn non_heading_lines_are_ignored() {
        let parsed = parse("intro text\n# root\nsome body text\n## child").unwrap();
        assert_eq!(parsed.tree.size(), 2);
    }

    #[test]
    fn heading_with_no_text_defaults_to_its_index() {
        let parsed = parse("#\n##").unwrap();
        assert_eq!(parsed.node_labels.get(0), "0");
        assert_eq!(parsed.node_labels.get(1), "1");
    }
}
