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

//! The immutable rendering `Style`: glyph table, colors, alignments, and
//! spacing. Everything the layout engine and sprite tree read is bundled
//! here so a render is a pure function of `(tree, labels, style)`.

use crate::color::ColorRgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeAlignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// Bit flags over bold/underline/italic. Kept as a raw bitmask (rather
/// than pulled in via a `bitflags` dependency) to match how small the
/// modifier space is — three bits, never grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextModifier(pub u8);

impl TextModifier {
    pub const NONE: TextModifier = TextModifier(0b000);
    pub const BOLD: TextModifier = TextModifier(0b001);
    pub const UNDERLINE: TextModifier = TextModifier(0b010);
    pub const ITALIC: TextModifier = TextModifier(0b100);

    pub fn contains(self, other: TextModifier) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for TextModifier {
    type Output = TextModifier;

    fn bitor(self, rhs: TextModifier) -> TextModifier {
        TextModifier(self.0 | rhs.0)
    }
}

/// A single-direction joint stub, combined with `|` into a [`MultiJoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleJoint {
    Right = 0b0001,
    Down = 0b0010,
    Left = 0b0100,
    Up = 0b1000,
}

/// The nine joint shapes actually used by the tree sprite: four corners,
/// four three-way tees, and the four-way cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiJoint {
    RightDown = 0b0011,
    RightUp = 0b1001,
    DownLeft = 0b0110,
    LeftUp = 0b1100,

    RightDownLeft = 0b0111,
    RightDownUp = 0b1011,
    RightLeftUp = 0b1101,
    DownLeftUp = 0b1110,

    All = 0b1111,
}

impl std::ops::BitOr for SingleJoint {
    type Output = MultiJoint;

    fn bitor(self, rhs: SingleJoint) -> MultiJoint {
        MultiJoint::from_bits(self as u8 | rhs as u8)
    }
}

impl MultiJoint {
    fn from_bits(bits: u8) -> MultiJoint {
        match bits {
            0b0011 => MultiJoint::RightDown,
            0b1001 => MultiJoint::RightUp,
            0b0110 => MultiJoint::DownLeft,
            0b1100 => MultiJoint::LeftUp,
            0b0111 => MultiJoint::RightDownLeft,
            0b1011 => MultiJoint::RightDownUp,
            0b1101 => MultiJoint::RightLeftUp,
            0b1110 => MultiJoint::DownLeftUp,
            0b1111 => MultiJoint::All,
            other => panic!("not a recognized joint mask: {other:#06b}"),
        }
    }
}

/// Immutable rendering configuration: glyphs, colors, alignment, and
/// spacing. Constructed once per render via [`Style::thin`],
/// [`Style::thick`], [`Style::double`], or a config-loaded preset.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub box_vertical_line: String,
    pub box_horizontal_line: String,
    pub box_top_left_corner: String,
    pub box_top_right_corner: String,
    pub box_bot_left_corner: String,
    pub box_bot_right_corner: String,

    pub vertical_line: String,
    pub horizontal_line: String,

    pub top_connection: String,
    pub bot_connection: String,

    pub joint_down_left: String,
    pub joint_right_down: String,
    pub joint_left_up: String,
    pub joint_right_up: String,

    pub joint_right_down_left: String,
    pub joint_right_down_up: String,
    pub joint_right_left_up: String,
    pub joint_down_left_up: String,
    pub joint_all: String,

    pub box_color: ColorRgb,
    pub branch_color: ColorRgb,
    pub text_color: ColorRgb,

    pub text_modifier: TextModifier,
    pub text_align: TextAlignment,

    pub sibling_margin: i64,
    pub level_margin: i64,
    pub node_vertical_padding: i64,
    pub node_horizontal_padding: i64,
    pub node_minimum_width: i64,
    pub node_minimum_height: i64,

    pub tree_align: TreeAlignment,
}

impl Style {
    pub fn joint_glyph(&self, joint: MultiJoint) -> &str {
        match joint {
            MultiJoint::RightDown => &self.joint_right_down,
            MultiJoint::RightUp => &self.joint_right_up,
            MultiJoint::DownLeft => &self.joint_down_left,
            MultiJoint::LeftUp => &self.joint_left_up,
            MultiJoint::RightDownLeft => &self.joint_right_down_left,
            MultiJoint::RightDownUp => &self.joint_right_down_up,
            MultiJoint::RightLeftUp => &self.joint_right_left_up,
            MultiJoint::DownLeftUp => &self.joint_down_left_up,
            MultiJoint::All => &self.joint_all,
        }
    }

    pub fn thin() -> Style {
        Style {
            box_vertical_line: "|".into(),
            box_horizontal_line: "─".into(),
            box_top_left_corner: "┌".into(),
            box_top_right_corner: "┐".into(),
            box_bot_left_corner: "└".into(),
            box_bot_right_corner: "┘".into(),

            vertical_line: "|".into(),
            horizontal_line: "─".into(),

            top_connection: "┴".into(),
            bot_connection: "┬".into(),

            joint_down_left: "┐".into(),
            joint_right_down: "┌".into(),
            joint_left_up: "┘".into(),
            joint_right_up: "└".into(),

            joint_right_down_left: "┬".into(),
            joint_right_down_up: "├".into(),
            joint_right_left_up: "┴".into(),
            joint_down_left_up: "┤".into(),
            joint_all: "┼".into(),

            box_color: ColorRgb::NONE,
            branch_color: ColorRgb::NONE,
            text_color: ColorRgb::NONE,
            text_modifier: TextModifier::NONE,
            text_align: TextAlignment::Center,

            sibling_margin: 2,
            level_margin: 1,
            node_vertical_padding: 0,
            node_horizontal_padding: 1,
            node_minimum_width: 0,
            node_minimum_height: 0,

            tree_align: TreeAlignment::Center,
        }
    }

    pub fn thick() -> Style {
        let base = Style::thin();
        Style {
            box_vertical_line: "┃".into(),
            box_horizontal_line: "━".into(),
            box_top_left_corner: "┏".into(),
            box_top_right_corner: "┓".into(),
            box_bot_left_corner: "┗".into(),
            box_bot_right_corner: "┛".into(),

            vertical_line: "┃".into(),
            horizontal_line: "━".into(),

            top_connection: "┻".into(),
            bot_connection: "┳".into(),

            joint_down_left: "┓".into(),
            joint_right_down: "┏".into(),
            joint_left_up: "┛".into(),
            joint_right_up: "┗".into(),

            joint_right_down_left: "┳".into(),
            joint_right_down_up: "┣".into(),
            joint_right_left_up: "┻".into(),
            joint_down_left_up: "┫".into(),
            joint_all: "╋".into(),

            ..base
        }
    }

    pub fn double() -> Style {
        let base = Style::thin();
        Style {
            box_vertical_line: "║".into(),
            box_horizontal_line: "═".into(),
            box_top_left_corner: "╔".into(),
            box_top_right_corner: "╗".into(),
            box_bot_left_corner: "╚".into(),
            box_bot_right_corner: "╝".into(),

            vertical_line: "║".into(),
            horizontal_line: "═".into(),

            top_connection: "╩".into(),
            bot_connection: "╦".into(),

            joint_down_left: "╗".into(),
            joint_right_down: "╔".into(),
            joint_left_up: "╝".into(),
            joint_right_up: "╚".into(),

            joint_right_down_left: "╦".into(),
            joint_right_down_up: "╠".into(),
            joint_right_left_up: "╩".into(),
            joint_down_left_up: "╣".into(),
            joint_all: "╬".into(),

            ..base
        }
    }
}

impl Default for Style {
    fn default() -> Style {
        Style::thin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_glyph_picks_the_matching_field() {
        let style = Style::thin();
        assert_eq!(style.joint_glyph(MultiJoint::All), "┼");
        assert_eq!(style.joint_glyph(MultiJoint::RightDownUp), "├");
    }

    #[test]
    fn single_joint_bitor_composes_into_multi_joint() {
        assert_eq!(SingleJoint::Right | SingleJoint::Down, MultiJoint::RightDown);
        assert_eq!(SingleJoint::Down | SingleJoint::Left, MultiJoint::DownLeft);
    }

    #[test]
    fn thick_and_double_keep_thin_spacing_defaults() {
        let thin = Style::thin();
        let thick = Style::thick();
        assert_eq!(thin.sibling_margin, thick.sibling_margin);
        assert_eq!(thin.tree_align, thick.tree_align);
    }
}
