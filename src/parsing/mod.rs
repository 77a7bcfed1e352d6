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

//! The three input notations `bt` accepts, plus format auto-detection.
//!
//! Each parser takes the raw input text and returns either a [`Parsed`] tree
//! or a non-empty list of [`ParseError`]s — there's no partial-success
//! state, matching how a non-empty error list in the source skips rendering
//! entirely rather than rendering whatever did parse.

pub mod bitstring;
pub mod markdown;
pub mod parentheses;

use crate::labels::Labels;
use crate::tree::Tree;

/// One malformed-input diagnostic: a human-readable message plus the byte
/// range (`position`, `extent`) of the input it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
    pub extent: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: usize, extent: usize) -> Self {
        ParseError { message: message.into(), position, extent }
    }
}

/// A successfully parsed tree, ready for [`crate::layout::compute_layout`].
#[derive(Debug, Clone)]
pub struct Parsed {
    pub tree: Tree,
    pub root: usize,
    pub node_labels: Labels,
    pub edge_labels: Labels,
}

pub type ParseResult = Result<Parsed, Vec<ParseError>>;

/// The notation a parser should be run with, chosen by [`detect_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Markdown,
    Bitstring,
    Parentheses,
}

/// Picks a notation from the raw input, mirroring the CLI's heuristic
/// order: any `#` anywhere means Markdown; otherwise a leading `0`/`1`
/// means bitstring; otherwise a leading `(` means parentheses. Returns
/// `None` when none of those hold, which the caller should treat as an
/// unparsable input.
pub fn detect_format(text: &str) -> Option<Format> {
    if text.contains('#') {
        return Some(Format::Markdown);
    }
    match text.as_bytes().first() {
        Some(b'0') | Some(b'1') => Some(Format::Bitstring),
        Some(b'(') => Some(Format::Parentheses),
        _ => None,
    }
}

pub fn parse(format: Format, text: &str) -> ParseResult {
    match format {
        Format::Markdown => markdown::parse(text),
        Format::Bitstring => bitstring::parse(text),
        Format::Parentheses => parentheses::parse(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_anywhere_selects_markdown_even_with_a_leading_paren() {
        assert_eq!(detect_format("(not markdown) # but has a hash"), Some(Format::Markdown));
    }

    #[test]
    fn leading_bit_selects_bitstring_over_parentheses() {
        assert_eq!(detect_format("10(nope)"), Some(Format::Bitstring));
    }

    #[test]
    fn leading_paren_selects_parentheses() {
        assert_eq!(detect_format("(a(b)(c))"), Some(Format::Parentheses));
    }

    #[test]
    fn anything_else_is_undetected() {
        assert_eq!(detect_format("just text"), None);
        assert_eq!(detect_format(""), None);
    }
}
