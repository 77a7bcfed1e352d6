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

//! Maps a node or edge id to its label string.
//!
//! Node ids and edge ids share the same `[0, N)` id space: the edge with
//! id `x` is the parent edge of the x-th node. The root has no parent
//! edge; its edge label is always empty. Edge labels are kept only for
//! forward compatibility — nothing in this crate renders them yet.

#[derive(Debug, Clone, Default)]
pub struct Labels {
    labels: Vec<String>,
}

impl Labels {
    pub fn new(n: usize) -> Self {
        Labels {
            labels: vec![String::new(); n],
        }
    }

    pub fn from_vec(labels: Vec<String>) -> Self {
        Labels { labels }
    }

    pub fn get(&self, id: usize) -> &str {
        &self.labels[id]
    }

    pub fn set(&mut self, id: usize, value: String) {
        self.labels[id] = value;
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl std::ops::Index<usize> for Labels {
    type Output = str;

    fn index(&self, id: usize) -> &str {
        &self.labels[id]
    }
}
