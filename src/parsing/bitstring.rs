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

//! Parses a tree written as a binary-heap bitstring: `1` means "node
//! present", `0` means "node absent", and a node at heap index `i` has
//! children at `2i+1`/`2i+2`. Node labels are always the node's own index.
//!
//! A `touched` bitmap records every index the recursion actually looked
//! at (present, or confirmed absent via a `0`); any index past the last
//! touched one is reported as an unconsumed trailing character. This is
//! the fuller of two near-identical parsers in the source; the simpler one
//! (which skips trailing-character detection) is intentionally not ported.

use super::{ParseError, ParseResult, Parsed};
use crate::labels::Labels;
use crate::tree::Tree;

#[allow(clippy::too_many_arguments)]
fn recurse(bytes: &[u8], index: usize, free_id: &mut usize, parent_of: &mut Vec<Option<usize>>, touched: &mut [bool], errors: &mut Vec<ParseError>) -> usize {
    debug_assert!(index < bytes.len());
    debug_assert_eq!(bytes[index], b'1');

    let left = index * 2 + 1;
    let right = index * 2 + 2;
    let mut left_id = None;
    let mut right_id = None;

    if left >= bytes.len() {
        // child does not exist
    } else if bytes[left] == b'0' {
        touched[left] = true;
    } else if bytes[left] == b'1' {
        left_id = Some(recurse(bytes, left, free_id, parent_of, touched, errors));
    } else {
        // The source reports the parent's own character here rather than
        // the offending one at `left` — preserved verbatim.
        let invalid_character = bytes[index] as char;
        errors.push(ParseError::new(format!("Invalid character '{invalid_character}'"), index, 1));
        touched[left] = true;
    }

    parent_of.push(None);
    let curr_id = *free_id;
    *free_id += 1;
    touched[index] = true;

    if right >= bytes.len() {
        // child does not exist
    } else if bytes[right] == b'0' {
        touched[right] = true;
    } else if bytes[right] == b'1' {
        right_id = Some(recurse(bytes, right, free_id, parent_of, touched, errors));
    } else {
        let invalid_character = bytes[index] as char;
        errors.push(ParseError::new(format!("Invalid character '{invalid_character}'"), index, 1));
        touched[right] = true;
    }

    if let Some(id) = left_id {
        parent_of[id] = Some(curr_id);
    }
    if let Some(id) = right_id {
        parent_of[id] = Some(curr_id);
    }

    curr_id
}

pub fn parse(text: &str) -> ParseResult {
    let bytes = text.as_bytes();

    if bytes.is_empty() {
        return Ok(Parsed { tree: Tree::new(0), root: 0, node_labels: Labels::new(0), edge_labels: Labels::new(0) });
    }

    if bytes[0] == b'0' {
        if bytes.len() > 1 {
            return Err(vec![ParseError::new("Input not fully consumed (1 character read).", 1, bytes.len() - 1)]);
        }
        return Ok(Parsed { tree: Tree::new(0), root: 0, node_labels: Labels::new(0), edge_labels: Labels::new(0) });
    }

    if bytes[0] != b'1' {
        return Err(vec![ParseError::new("Invalid first character, expected '0' or '1'.", 0, 1)]);
    }

    let mut parent_of: Vec<Option<usize>> = Vec::new();
    let mut touched = vec![false; bytes.len()];
    let mut free_id = 0usize;
    let mut errors = Vec::new();

    let root = recurse(bytes, 0, &mut free_id, &mut parent_of, &mut touched, &mut errors);

    let last_touched = touched.iter().rposition(|&t| t);
    if let Some(last_touched) = last_touched {
        for (i, &t) in touched.iter().enumerate() {
            if !t && i > last_touched {
                errors.push(ParseError::new("Trailing characters not consumed.", i, 1));
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let num_nodes = free_id;
    let mut tree = Tree::new(num_nodes);
    let mut node_labels = Labels::new(num_nodes);
    let mut edge_labels = Labels::new(num_nodes);

    for i in 0..num_nodes {
        if let Some(parent) = parent_of[i] {
            tree.add_child(parent, i);
        }
        node_labels.set(i, i.to_string());
        edge_labels.set(i, String::new());
    }

    Ok(Parsed { tree, root, node_labels, edge_labels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_root_bit() {
        let parsed = parse("1").unwrap();
        assert_eq!(parsed.tree.size(), 1);
        assert_eq!(parsed.root, 0);
    }

    #[test]
    fn root_with_two_children() {
        let parsed = parse("111").unwrap();
        assert_eq!(parsed.tree.size(), 3);
        assert_eq!(parsed.tree.num_children(parsed.root), 2);
    }

    #[test]
    fn lone_zero_is_a_single_consumed_character() {
        let parsed = parse("0").unwrap();
        assert_eq!(parsed.tree.size(), 0);
    }

    #[test]
    fn zero_followed_by_more_input_is_an_error() {
        let errors = parse("01").unwrap_err();
        assert_eq!(errors[0].message, "Input not fully consumed (1 character read).");
    }

    #[test]
    fn invalid_first_character_is_rejected() {
        let errors = parse("x").unwrap_err();
        assert_eq!(errors[0].message, "Invalid first character, expected '0' or '1'.");
    }

    #[test]
    fn untouched_trailing_character_is_reported() {
        // index 0 is the root; indices 1 and 2 are its (absent) children.
        // Index 3 would only be visited as a child of index 1, but index 1
        // is absent, so it's never touched and gets flagged as trailing.
        let errors = parse("1000").unwrap_err();
        assert_eq!(errors[0].message, "Trailing characters not consumed.");
        assert_eq!(errors[0].position, 3);
    }
}
