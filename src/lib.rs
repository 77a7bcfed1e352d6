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

//! `boxtree` renders a tree described in parentheses, bitstring, or Markdown
//! notation as box-and-branch art. A render is a pure function of
//! `(tree, labels, style)`: [`parsing`] turns text into a [`tree::Tree`] plus
//! [`labels::Labels`], [`layout`] turns that into absolute rectangles, and
//! [`sprite`]/[`tree_sprite`]/[`scene`] turn the rectangles into text.

pub const NAME: &str = "bt";
pub const AUTHORS: &str = "Ritchie Mwewa <hi@rly0nheart.com>";

pub mod cli;
pub mod color;
pub mod config;
pub mod contour;
pub mod geometry;
pub mod labels;
pub mod layout;
pub mod parsing;
pub mod scene;
pub mod sprite;
pub mod style;
pub mod terminal;
pub mod tree;
pub mod tree_sprite;
