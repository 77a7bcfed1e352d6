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

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::cli::flags::{ShowColour, TextAlign, TreeAlign};
use crate::color::{ColorRgb, parse_color};
use crate::style::Style;

fn parse_color_arg(text: &str) -> Result<ColorRgb, String> {
    parse_color(text).ok_or_else(|| format!("unrecognized color '{text}', expected a name or #RRGGBB"))
}

#[derive(Parser, Debug, Clone)]
#[command(name = crate::NAME, author = crate::AUTHORS, version)]
pub struct Args {
    /// Tree text given directly on the command line, instead of stdin or --input-file
    #[arg(value_hint = ValueHint::Other, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the tree text from this file instead of stdin or a positional argument
    #[arg(short = 'i', long = "input-file", value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Glyph table: "thin", "thick", "double", or a preset name from the config file
    #[arg(long, default_value = "thin", value_name = "STYLE")]
    pub style: String,

    /// How a subtree's children are aligned under their parent
    #[arg(long, value_enum, value_name = "ALIGN")]
    pub tree_align: Option<TreeAlign>,

    /// How a node's label text is aligned within its box
    #[arg(long, value_enum, value_name = "ALIGN")]
    pub text_align: Option<TextAlign>,

    /// Label text color, as a name or #RRGGBB (including "rainbow")
    #[arg(long, value_parser = parse_color_arg, value_name = "COLOR")]
    pub text_color: Option<ColorRgb>,

    /// Node box color, as a name or #RRGGBB (including "rainbow")
    #[arg(long, value_parser = parse_color_arg, value_name = "COLOR")]
    pub box_color: Option<ColorRgb>,

    /// Branch/joint color, as a name or #RRGGBB (including "rainbow")
    #[arg(long, value_parser = parse_color_arg, value_name = "COLOR")]
    pub branch_color: Option<ColorRgb>,

    /// Vertical gap between levels
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=1000), value_name = "N")]
    pub line_margin: Option<i64>,

    /// Horizontal gap between sibling subtrees
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=1000), value_name = "N")]
    pub sibling_margin: Option<i64>,

    /// Horizontal padding inside each node box
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=1000), value_name = "N")]
    pub horizontal_padding: Option<i64>,

    /// Vertical padding inside each node box
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=1000), value_name = "N")]
    pub vertical_padding: Option<i64>,

    /// Minimum node box width
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=1000), value_name = "N")]
    pub node_min_width: Option<i64>,

    /// Minimum node box height
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=1000), value_name = "N")]
    pub node_min_height: Option<i64>,

    /// Emit ANSI colour escapes WHEN
    #[arg(short = 'C', long = "colour", visible_alias = "color", value_enum, default_value = "auto", value_name = "WHEN", help_heading = "Display")]
    pub colour: ShowColour,
}

impl Args {
    /// Applies every given CLI override on top of a resolved base style,
    /// leaving fields the user didn't touch exactly as the base left them.
    pub fn apply_overrides(&self, base: Style) -> Style {
        let mut style = base;

        if let Some(align) = self.tree_align {
            style.tree_align = align.into();
        }
        if let Some(align) = self.text_align {
            style.text_align = align.into();
        }
        if let Some(color) = self.text_color {
            style.text_color = color;
        }
        if let Some(color) = self.box_color {
            style.box_color = color;
        }
        if let Some(color) = self.branch_color {
            style.branch_color = color;
        }
        if let Some(n) = self.line_margin {
            style.level_margin = n;
        }
        if let Some(n) = self.sibling_margin {
            style.sibling_margin = n;
        }
        if let Some(n) = self.horizontal_padding {
            style.node_horizontal_padding = n;
        }
        if let Some(n) = self.vertical_padding {
            style.node_vertical_padding = n;
        }
        if let Some(n) = self.node_min_width {
            style.node_minimum_width = n;
        }
        if let Some(n) = self.node_min_height {
            style.node_minimum_height = n;
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_the_base_style_untouched() {
        let args = Args::try_parse_from(["bt"]).unwrap();
        let style = args.apply_overrides(Style::thin());
        assert_eq!(style, Style::thin());
    }

    #[test]
    fn explicit_overrides_win() {
        let args = Args::try_parse_from(["bt", "--sibling-margin", "7", "--text-color", "red"]).unwrap();
        let style = args.apply_overrides(Style::thin());
        assert_eq!(style.sibling_margin, 7);
        assert_eq!(style.text_color, ColorRgb::RED);
    }

    #[test]
    fn positional_and_input_file_conflict() {
        assert!(Args::try_parse_from(["bt", "(a)", "-i", "tree.txt"]).is_err());
    }

    #[test]
    fn out_of_range_margin_is_rejected() {
        assert!(Args::try_parse_from(["bt", "--sibling-margin", "1001"]).is_err());
    }
}
