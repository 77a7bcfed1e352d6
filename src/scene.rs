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

//! Rasterizes a root sprite into the final text: one `\n`-terminated row
//! per line of its bounding rect, one cell at a time.

use std::fmt::Write as _;

use crate::color::ColorRgb;
use crate::geometry::Point;
use crate::sprite::{DrawResult, Sprite};
use crate::style::Style;

/// Wraps a single root sprite (normally a [`crate::tree_sprite::TreeSprite`])
/// and turns it into either a one-cell [`DrawResult`] or a full rendered
/// string.
pub struct Scene {
    root: Sprite,
}

impl Scene {
    pub fn new(root: Sprite) -> Self {
        Scene { root }
    }

    pub fn rect(&self) -> crate::geometry::Rect {
        self.root.rect()
    }

    pub fn draw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));
        self.root.draw(style, cursor)
    }

    /// Renders every cell of the scene, wrapping each non-space glyph in an
    /// ANSI 24-bit color escape when its draw color isn't [`ColorRgb::NONE`].
    /// A space is never colored, even if its draw result carries a color.
    pub fn render(&self, style: &Style) -> String {
        let rect = self.rect();
        let mut out = String::new();

        for line in rect.top_line()..=rect.bot_line() {
            for column in rect.left_column()..=rect.right_column() {
                let drawable = self.draw(style, Point::new(line, column));
                let glyph = if drawable.glyph.is_empty() { " " } else { drawable.glyph.as_str() };

                if drawable.color != ColorRgb::NONE && glyph != " " {
                    let _ = write!(out, "\x1b[38;2;{};{};{}m{}\x1b[0;00m", drawable.color.red, drawable.color.green, drawable.color.blue, glyph);
                } else {
                    out.push_str(glyph);
                }
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRgb;
    use crate::geometry::Rect;
    use crate::sprite::{CharacterSprite, IdGen};
    use crate::style::Style;

    #[test]
    fn empty_glyph_renders_as_a_plain_space() {
        let mut ids = IdGen::new();
        let sprite = Sprite::Character(CharacterSprite::new(ids.next(), ""));
        let scene = Scene::new(sprite);
        let style = Style::thin();
        assert_eq!(scene.render(&style), " \n");
    }

    #[test]
    fn colored_glyph_is_wrapped_in_ansi_escape() {
        let mut ids = IdGen::new();
        let sprite = Sprite::Character(CharacterSprite::new(ids.next(), "x"));
        let scene = Scene::new(sprite);
        let mut style = Style::thin();
        style.text_color = ColorRgb::RED;
        let rendered = scene.render(&style);
        assert!(rendered.starts_with("\x1b[38;2;"));
        assert!(rendered.contains('x'));
        assert!(rendered.ends_with("\x1b[0;00m\n"));
    }

    #[test]
    fn rect_matches_the_root_sprites_rect() {
        let mut ids = IdGen::new();
        let sprite = Sprite::Character(CharacterSprite::new(ids.next(), "x"));
        let scene = Scene::new(sprite);
        assert_eq!(scene.rect(), Rect::new(Point::ORIGIN, Point::ORIGIN));
    }
}
