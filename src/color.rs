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

//! 24-bit RGB colors, named-color and hex parsing, and the `rainbow`
//! sentinel's deterministic hue rule.

/// An RGB triple. `RAINBOW` is a sentinel value: it never gets drawn
/// directly, a sprite's category color is checked against it and, if
/// equal, swapped out for a hash-derived hue before reaching the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorRgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        ColorRgb { red, green, blue }
    }

    pub const NONE: ColorRgb = ColorRgb::new(0, 0, 0);
    pub const PINK: ColorRgb = ColorRgb::new(255, 192, 203);
    pub const BUBBLEGUM_PINK: ColorRgb = ColorRgb::new(0xF7, 0xC5, 0xCC);
    pub const CHERRY_RED: ColorRgb = ColorRgb::new(0xCC, 0x31, 0x3D);
    pub const RED: ColorRgb = ColorRgb::new(255, 0, 0);
    pub const ORANGE: ColorRgb = ColorRgb::new(255, 165, 0);
    pub const BURNT_ORANGE: ColorRgb = ColorRgb::new(0xEE, 0x4E, 0x34);
    pub const YELLOW: ColorRgb = ColorRgb::new(255, 255, 0);
    pub const BROWN: ColorRgb = ColorRgb::new(165, 42, 42);
    pub const PEACH: ColorRgb = ColorRgb::new(0xFC, 0xED, 0xDA);
    pub const GREEN: ColorRgb = ColorRgb::new(0, 255, 0);
    pub const CYAN: ColorRgb = ColorRgb::new(0, 255, 255);
    pub const BLUE: ColorRgb = ColorRgb::new(0, 0, 255);
    pub const PURPLE: ColorRgb = ColorRgb::new(128, 0, 128);
    pub const WHITE: ColorRgb = ColorRgb::new(255, 255, 255);
    pub const BLACK: ColorRgb = ColorRgb::new(0, 0, 1);
    pub const GRAY: ColorRgb = ColorRgb::new(127, 127, 127);

    /// Magic sentinel that triggers the per-cell rainbow rule.
    pub const RAINBOW: ColorRgb = ColorRgb::new(215, 45, 109);
}

/// SplitMix64 avalanche step, used both to derive the rainbow hue and to
/// seed a sprite's identity hash.
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Maps a ratio in `[0, 1]` through a six-region R→Y→G→C→B→M palette.
pub fn pick_rainbow_ratio(ratio: f64) -> ColorRgb {
    let ratio = ratio.clamp(0.0, 1.0);

    let normalized = (ratio * 256.0 * 6.0) as i64;
    let region = normalized / 256;
    let x = (normalized % 256) as u8;

    let (r, g, b): (u8, u8, u8) = match region {
        0 => (255, x, 0),
        1 => (255u8.wrapping_sub(x), 255, 0),
        2 => (0, 255, x),
        3 => (0, 255u8.wrapping_sub(x), 255),
        4 => (x, 0, 255),
        _ => (255, 0, 255u8.wrapping_sub(x)),
    };

    ColorRgb::new(r, g, b)
}

/// Hashes a seed into a rainbow hue. The seed should already be unique
/// per logical (category, cell, sprite) tuple.
pub fn pick_rainbow(seed: u64) -> ColorRgb {
    let hash = splitmix64(seed);
    pick_rainbow_ratio((hash % 1024) as f64 / 1024.0)
}

fn hex_digit_value(c: char) -> Option<u32> {
    match c {
        'a'..='f' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='F' => Some(c as u32 - 'A' as u32 + 10),
        '0'..='9' => Some(c as u32 - '0' as u32),
        _ => None,
    }
}

/// Parses a `#RRGGBB`-style hex color. Returns `None` on any malformed
/// input (missing `#`, non-hex digit).
pub fn parse_color_hex(hex: &str) -> Option<ColorRgb> {
    let rest = hex.strip_prefix('#')?;

    let mut value: u32 = 0;
    for c in rest.chars() {
        let digit = hex_digit_value(c)?;
        value = value * 16 + digit;
    }

    Some(ColorRgb::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Parses a color by its case-sensitive lowercase name, including
/// `rainbow` as a sentinel.
pub fn parse_color_name(name: &str) -> Option<ColorRgb> {
    let table: &[(&str, ColorRgb)] = &[
        ("none", ColorRgb::NONE),
        ("red", ColorRgb::RED),
        ("cherryred", ColorRgb::CHERRY_RED),
        ("bubblegumpink", ColorRgb::BUBBLEGUM_PINK),
        ("green", ColorRgb::GREEN),
        ("blue", ColorRgb::BLUE),
        ("black", ColorRgb::BLACK),
        ("white", ColorRgb::WHITE),
        ("gray", ColorRgb::GRAY),
        ("pink", ColorRgb::PINK),
        ("purple", ColorRgb::PURPLE),
        ("cyan", ColorRgb::CYAN),
        ("brown", ColorRgb::BROWN),
        ("peach", ColorRgb::PEACH),
        ("yellow", ColorRgb::YELLOW),
        ("orange", ColorRgb::ORANGE),
        ("burntorange", ColorRgb::BURNT_ORANGE),
        ("rainbow", ColorRgb::RAINBOW),
    ];

    table.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// Parses either a hex color (`#RRGGBB`) or a named color.
pub fn parse_color(text: &str) -> Option<ColorRgb> {
    parse_color_hex(text).or_else(|| parse_color_name(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_rrggbb() {
        assert_eq!(parse_color_hex("#ff8000"), Some(ColorRgb::new(0xFF, 0x80, 0x00)));
    }

    #[test]
    fn hex_rejects_missing_hash() {
        assert_eq!(parse_color_hex("ff8000"), None);
    }

    #[test]
    fn hex_rejects_non_hex_digit() {
        assert_eq!(parse_color_hex("#gg0000"), None);
    }

    #[test]
    fn name_table_covers_rainbow() {
        assert_eq!(parse_color_name("rainbow"), Some(ColorRgb::RAINBOW));
        assert_eq!(parse_color_name("not-a-color"), None);
    }

    #[test]
    fn rainbow_hash_is_deterministic() {
        assert_eq!(pick_rainbow(42), pick_rainbow(42));
        assert_eq!(splitmix64(0), splitmix64(0));
    }

    #[test]
    fn rainbow_ratio_clamps_out_of_range_input() {
        assert_eq!(pick_rainbow_ratio(-1.0), pick_rainbow_ratio(0.0));
        assert_eq!(pick_rainbow_ratio(2.0), pick_rainbow_ratio(1.0));
    }
}
