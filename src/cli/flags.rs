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

use clap::ValueEnum;

use crate::style::{TextAlignment, TreeAlignment};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TreeAlign {
    Left,
    Center,
    Right,
}

impl From<TreeAlign> for TreeAlignment {
    fn from(value: TreeAlign) -> Self {
        match value {
            TreeAlign::Left => TreeAlignment::Left,
            TreeAlign::Center => TreeAlignment::Center,
            TreeAlign::Right => TreeAlignment::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl From<TextAlign> for TextAlignment {
    fn from(value: TextAlign) -> Self {
        match value {
            TextAlign::Left => TextAlignment::Left,
            TextAlign::Center => TextAlignment::Center,
            TextAlign::Right => TextAlignment::Right,
        }
    }
}

/// `auto` falls back to a TTY check (see [`crate::terminal::is_tty`]) before
/// deciding whether ANSI escapes leave the binary at all — independent of
/// whatever color a sprite's own `Style` assigns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowColour {
    Always,
    Auto,
    Never,
}
