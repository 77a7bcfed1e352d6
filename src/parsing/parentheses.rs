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

//! Parses a tree written as nested, labeled parentheses: `(root(a)(b(c)))`.
//!
//! A node's label is every character between its opening paren and its
//! first child (or its closing paren, if it has none children); `\n` in
//! the source text is an escape for an embedded newline in the label. An
//! empty label defaults to the node's own index. Requires the whole input
//! to reduce to a single connected tree rooted at the first `(`.

use super::{ParseError, ParseResult, Parsed};
use crate::labels::Labels;
use crate::tree::Tree;

fn matching_close_parens(bytes: &[u8]) -> Vec<Option<usize>> {
    let mut opening = Vec::new();
    let mut closing = vec![None; bytes.len()];

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => opening.push(i),
            b')' => {
                if let Some(open) = opening.pop() {
                    closing[open] = Some(i);
                }
            }
            _ => {}
        }
    }

    closing
}

#[allow(clippy::too_many_arguments)]
fn recurse(bytes: &[u8], begin: usize, end: usize, closing: &[Option<usize>], tree: &mut Tree, node_labels: &mut Labels, edge_labels: &mut Labels, free_id: &mut usize) -> usize {
    let curr_id = *free_id;
    *free_id += 1;

    let mut label = String::new();
    let mut cursor = begin;

    while cursor != end {
        if bytes[cursor..].starts_with(b"\\n") {
            cursor += 2;
            label.push('\n');
            continue;
        }

        if bytes[cursor] == b'(' {
            let close = closing[cursor].expect("unbalanced parens already rejected by the caller");
            let child_id = recurse(bytes, cursor + 1, close, closing, tree, node_labels, edge_labels, free_id);
            cursor = close + 1;
            tree.add_child(curr_id, child_id);
            continue;
        }

        label.push(bytes[cursor] as char);
        cursor += 1;
    }

    if label.is_empty() {
        label = curr_id.to_string();
    }

    node_labels.set(curr_id, label);
    edge_labels.set(curr_id, String::new());
    curr_id
}

pub fn parse(text: &str) -> ParseResult {
    let bytes = text.as_bytes();

    let Some(first_paren) = bytes.iter().position(|&b| b == b'(') else {
        return Err(vec![ParseError::new("Unbalanced parentheses.", 0, bytes.len().max(1))]);
    };

    let closing = matching_close_parens(bytes);

    let mut errors = Vec::new();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'(' && closing[i].is_none() {
            errors.push(ParseError::new("Unbalanced parentheses.", i, 1));
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let last_paren = closing[first_paren].expect("checked for unbalanced parens above");
    let num_nodes = bytes[..=last_paren].iter().filter(|&&b| b == b'(').count();
    let num_parens = bytes.iter().filter(|&&b| b == b'(').count();

    if num_parens != num_nodes {
        return Err(vec![ParseError::new("The tree is not connected", last_paren + 1, 1)]);
    }

    let mut tree = Tree::new(num_nodes);
    let mut node_labels = Labels::new(num_nodes);
    let mut edge_labels = Labels::new(num_nodes);
    let mut free_id = 0usize;

    let root = recurse(bytes, first_paren + 1, last_paren, &closing, &mut tree, &mut node_labels, &mut edge_labels, &mut free_id);

    Ok(Parsed { tree, root, node_labels, edge_labels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_with_default_label() {
        let parsed = parse("()").unwrap();
        assert_eq!(parsed.tree.size(), 1);
        assert_eq!(parsed.node_labels.get(parsed.root), "0");
    }

    #[test]
    fn labeled_node_with_two_children() {
        let parsed = parse("(root(a)(b))").unwrap();
        assert_eq!(parsed.tree.size(), 3);
        assert_eq!(parsed.node_labels.get(parsed.root), "root");
        assert_eq!(parsed.tree.num_children(parsed.root), 2);
    }

    #[test]
    fn newline_escape_is_embedded_in_the_label() {
        let parsed = parse("(a\\nb)").unwrap();
        assert_eq!(parsed.node_labels.get(parsed.root), "a\nb");
    }

    #[test]
    fn unmatched_open_paren_is_an_error() {
        let errors = parse("(a(b)").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unbalanced parentheses.");
    }

    #[test]
    fn second_top_level_group_is_not_connected() {
        let errors = parse("(a)(b)").unwrap_err();
        assert_eq!(errors[0].message, "The tree is not connected");
    }
}
