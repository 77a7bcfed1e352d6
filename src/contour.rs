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

//! The left/right silhouette of a subtree used to tight-pack siblings.
//!
//! A contour is a list of `(node, offset)` pairs, one per depth of the
//! subtree it describes. `offset` is a horizontal displacement *from the
//! previous entry*, not an absolute column — the first entry's offset is
//! only meaningful once the contour is stitched into a parent (see
//! [`Contour::push_front`]).
//!
//! ```text
//!               ┌───┐
//!               | 0 |
//!               └─┬─┘
//!    ┌──────┬─────┴┬──────────┐
//!  ┌─┴─┐  ┌─┴─┐  ┌─┴─┐      ┌─┴─┐
//!  | 1 |  | 3 |  | 4 |      | 8 |
//!  └─┬─┘  └───┘  └─┬─┘      └─┬─┘
//!    |             |      ┌───┴───┐
//!  ┌─┴─┐         ┌─┴─┐  ┌─┴─┐  ┌──┴──┐
//!  | 2 |         | 5 |  | 9 |  | 10  |
//!  └───┘         └─┬─┘  └───┘  └─────┘
//!               ┌──┴───┐
//!             ┌─┴─┐  ┌─┴─┐
//!             | 6 |  | 7 |
//!             └───┘  └───┘
//! ```
//! The left contour here is `[0, 1, 2, 6]`; the right contour is `[0, 6, 8, 7]`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourElement {
    pub node: usize,
    pub offset: i64,
}

#[derive(Debug, Clone, Default)]
pub struct Contour {
    elements: Vec<ContourElement>,
}

impl Contour {
    pub fn new() -> Self {
        Contour { elements: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push_back(&mut self, node: usize, offset: i64) {
        self.elements.push(ContourElement { node, offset });
    }

    pub fn push_front(&mut self, node: usize, offset: i64) {
        self.elements.insert(0, ContourElement { node, offset });
    }

    /// Extends `self` with the part of `other` that lies below it, so that
    /// the merged contour describes the union of both subtrees' depths.
    /// `other`'s absolute columns are preserved exactly by adjusting the
    /// delta of the first carried-over entry.
    pub fn merge(&mut self, other: Contour) {
        let mut offset1: i64 = 0;
        let mut offset2: i64 = 0;

        let mut pos1 = 0usize;
        let mut pos2 = 0usize;

        while pos1 < self.len() && pos2 < other.len() {
            offset1 += self.elements[pos1].offset;
            offset2 += other.elements[pos2].offset;
            pos1 += 1;
            pos2 += 1;
        }

        if pos1 < other.len() {
            self.push_back(other.elements[pos1].node, (offset2 + other.elements[pos1].offset) - offset1);
            pos1 += 1;
        }

        while pos1 < other.len() {
            self.push_back(other.elements[pos1].node, other.elements[pos1].offset);
            pos1 += 1;
        }
    }

    /// The smallest non-negative horizontal offset that, applied to every
    /// absolute column of `right`, keeps it clear of `left` at every
    /// shared depth. `width_of(node)` returns the node's box width.
    pub fn minimum_offset(left: &Contour, right: &Contour, width_of: impl Fn(usize) -> i64) -> i64 {
        let mut x1: i64 = 0;
        let mut x2: i64 = 0;
        let mut result: i64 = 0;

        let mut pos1 = 0usize;
        let mut pos2 = 0usize;

        while pos1 < left.len() && pos2 < right.len() {
            x1 += left.elements[pos1].offset;
            x2 += right.elements[pos2].offset;
            let right_edge = x1 + width_of(left.elements[pos1].node);

            if right_edge > x2 {
                result = result.max(right_edge - x2);
            }

            pos1 += 1;
            pos2 += 1;
        }

        result
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContourElement> {
        self.elements.iter()
    }
}

impl std::ops::Index<usize> for Contour {
    type Output = ContourElement;

    fn index(&self, index: usize) -> &ContourElement {
        &self.elements[index]
    }
}

impl std::ops::IndexMut<usize> for Contour {
    fn index_mut(&mut self, index: usize) -> &mut ContourElement {
        &mut self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_prepends() {
        let mut c = Contour::new();
        c.push_back(1, 0);
        c.push_front(0, 0);
        assert_eq!(c[0].node, 0);
        assert_eq!(c[1].node, 1);
    }

    #[test]
    fn merge_appends_the_longer_contours_tail() {
        let mut left = Contour::new();
        left.push_back(0, 0);

        let mut right = Contour::new();
        right.push_back(0, 0);
        right.push_back(1, 3);

        left.merge(right);
        assert_eq!(left.len(), 2);
        assert_eq!(left[1].node, 1);
        assert_eq!(left[1].offset, 3);
    }

    #[test]
    fn minimum_offset_is_zero_when_no_overlap() {
        let mut left = Contour::new();
        left.push_back(0, 0);

        let mut right = Contour::new();
        right.push_back(1, 10);

        assert_eq!(Contour::minimum_offset(&left, &right, |_| 3), 0);
    }

    #[test]
    fn minimum_offset_pushes_right_clear_of_left() {
        let mut left = Contour::new();
        left.push_back(0, 0);

        let mut right = Contour::new();
        right.push_back(1, 2);

        // left node has width 5, so its right edge sits at column 5;
        // right starts at column 2, so it must shift by 3.
        assert_eq!(Contour::minimum_offset(&left, &right, |_| 5), 3);
    }
}
