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

//! The polymorphic drawable model the scene samples one cell at a time.
//!
//! Every sprite kind answers the same three questions: `rect()` (its local
//! bounding box), `draw(style, cursor)` (what to paint at one cell inside
//! that box) and `category()` (which color the glyph belongs to). Rather
//! than a trait object, [`Sprite`] is a closed `enum` over the ten kinds —
//! there is no fixed set of implementers outside this crate, so a tagged
//! sum avoids the indirection a `Box<dyn Trait>` would need.
//!
//! Rainbow coloring is applied once, at the [`Sprite`] level, right after a
//! leaf kind produces its raw glyph — never inside the kind's own `draw`.
//! That mirrors the source's `Storage<T>::draw`, which wraps every concrete
//! sprite and checks its *own* category against the style's per-category
//! color before deciding whether to substitute a hash-derived hue.

use crate::color::{pick_rainbow, splitmix64, ColorRgb};
use crate::geometry::{axis_of, direction_of, translate, Axis, Direction, Point, Rect};
use crate::style::{MultiJoint, SingleJoint, Style, TextAlignment};

/// Bitmask over which color rule a sprite's glyph participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Category(u8);

impl Category {
    pub const NONE: Category = Category(0b000);
    pub const NODE: Category = Category(0b001);
    pub const BRANCH: Category = Category(0b010);
    pub const TEXT: Category = Category(0b100);
}

impl std::ops::BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        Category(self.0 | rhs.0)
    }
}

/// What a single cell renders to: an (possibly empty) glyph and its color.
/// An empty glyph means "transparent" — the compositor keeps looking for a
/// sprite underneath, and the scene falls back to a plain space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawResult {
    pub glyph: String,
    pub color: ColorRgb,
}

impl DrawResult {
    pub fn empty() -> DrawResult {
        DrawResult::default()
    }

    pub fn new(glyph: impl Into<String>, color: ColorRgb) -> DrawResult {
        DrawResult { glyph: glyph.into(), color }
    }

    pub fn is_empty(&self) -> bool {
        self.glyph.is_empty()
    }
}

/// A stable logical identity assigned to a sprite at construction time.
///
/// The source keys its rainbow hash on the in-memory address of the sprite
/// value; that isn't reproducible across runs or after a `Vec` reallocates.
/// This crate substitutes a monotonically increasing id handed out by
/// [`IdGen`] while a tree sprite is assembled, so the same input always
/// hashes to the same hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(u64);

#[derive(Debug, Default)]
pub struct IdGen(u64);

impl IdGen {
    pub fn new() -> Self {
        IdGen(0)
    }

    pub fn next(&mut self) -> SpriteId {
        let id = SpriteId(self.0);
        self.0 += 1;
        id
    }
}

fn rainbow_seed(category: Category, cursor: Point, id: SpriteId) -> u64 {
    let mut seed: u64 = 42;
    seed ^= splitmix64(category.0 as u64);
    seed ^= splitmix64(cursor.line as u64);
    seed ^= splitmix64(cursor.column as u64);
    seed ^= splitmix64(id.0);
    seed
}

/// One cell, drawing its literal text in `style.text_color`. Used only as
/// a building block inside [`Spline3Sprite`]'s joints — most text goes
/// through [`TextSprite`] instead.
#[derive(Debug, Clone)]
pub struct CharacterSprite {
    id: SpriteId,
    character: String,
}

impl CharacterSprite {
    pub fn new(id: SpriteId, character: impl Into<String>) -> Self {
        CharacterSprite { id, character: character.into() }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Point::ORIGIN, Point::ORIGIN)
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));
        let _ = style;
        DrawResult::new(self.character.clone(), style.text_color)
    }

    pub fn category(&self) -> Category {
        Category::TEXT
    }
}

/// A rectangle of (possibly multi-line) label text, padded and aligned
/// per [`Style::text_align`]. `height`/`width` describe the *padded*
/// text area a [`NodeSprite`] carves out of its box, not the label's own
/// natural size.
#[derive(Debug, Clone)]
pub struct TextSprite {
    id: SpriteId,
    lines: Vec<Vec<char>>,
    height: i64,
    width: i64,
}

impl TextSprite {
    pub fn new(id: SpriteId, text: &str, height: i64, width: i64) -> Self {
        let lines = text.split('\n').map(|line| line.chars().collect()).collect();
        TextSprite { id, lines, height, width }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Point::ORIGIN, Point::new(self.height, self.width))
    }

    fn char_at(line: &[char], index: i64, color: ColorRgb) -> DrawResult {
        if index < 0 {
            return DrawResult::empty();
        }
        match line.get(index as usize) {
            Some(c) => DrawResult::new(c.to_string(), color),
            None => DrawResult::empty(),
        }
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));

        let num_lines = self.lines.len() as i64;
        if cursor.line >= num_lines {
            return DrawResult::empty();
        }
        let line = &self.lines[cursor.line as usize];
        let h_pad = style.node_horizontal_padding;

        match style.text_align {
            TextAlignment::None | TextAlignment::Left => {
                if cursor.column < h_pad {
                    return DrawResult::empty();
                }
                Self::char_at(line, cursor.column - h_pad, style.text_color)
            }
            TextAlignment::Center => {
                if cursor.column < h_pad {
                    return DrawResult::empty();
                }
                let max_width = (self.width + 1) - h_pad * 2;
                let margin = max_width - line.len() as i64;
                if cursor.column - h_pad < margin / 2 {
                    return DrawResult::empty();
                }
                Self::char_at(line, cursor.column - h_pad - margin / 2, style.text_color)
            }
            TextAlignment::Right => {
                if cursor.column < h_pad {
                    return DrawResult::empty();
                }
                let max_width = (self.width + 1) - h_pad * 2;
                let margin = max_width - line.len() as i64;
                if cursor.column - h_pad < margin {
                    return DrawResult::empty();
                }
                Self::char_at(line, cursor.column - h_pad - margin, style.text_color)
            }
        }
    }

    pub fn category(&self) -> Category {
        Category::TEXT
    }
}

/// A node's box: four corners, two edge glyphs, and optional top/bottom
/// "connection" cells (where a branch attaches) at the center column.
/// Interior cells are transparent so whatever sits inside — normally a
/// [`TextSprite`] — shows through.
#[derive(Debug, Clone)]
pub struct BoxSprite {
    id: SpriteId,
    height: i64,
    width: i64,
    is_top_connected: bool,
    is_bot_connected: bool,
}

impl BoxSprite {
    pub fn new(id: SpriteId, height: i64, width: i64, is_top_connected: bool, is_bot_connected: bool) -> Self {
        BoxSprite { id, height, width, is_top_connected, is_bot_connected }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Point::ORIGIN, Point::new(self.height, self.width))
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));

        let is_left = cursor.column == 0;
        let is_right = cursor.column == self.width;
        let is_top = cursor.line == 0;
        let is_bot = cursor.line == self.height;

        if !(is_left || is_right || is_top || is_bot) {
            return DrawResult::empty();
        }

        if is_top && is_left {
            return DrawResult::new(style.box_top_left_corner.clone(), style.box_color);
        }
        if is_top && is_right {
            return DrawResult::new(style.box_top_right_corner.clone(), style.box_color);
        }
        if is_bot && is_left {
            return DrawResult::new(style.box_bot_left_corner.clone(), style.box_color);
        }
        if is_bot && is_right {
            return DrawResult::new(style.box_bot_right_corner.clone(), style.box_color);
        }

        let top_connection = Point::new(0, self.width / 2);
        let bot_connection = Point::new(self.height, self.width / 2);

        if self.is_top_connected && cursor == top_connection {
            return DrawResult::new(style.top_connection.clone(), style.box_color);
        }
        if self.is_bot_connected && cursor == bot_connection {
            return DrawResult::new(style.bot_connection.clone(), style.box_color);
        }

        if is_top || is_bot {
            return DrawResult::new(style.box_horizontal_line.clone(), style.box_color);
        }

        DrawResult::new(style.box_vertical_line.clone(), style.box_color)
    }

    pub fn category(&self) -> Category {
        Category::NODE
    }
}

/// A one-cell-tall/wide branch segment. `ignore_start`/`ignore_end`
/// suppress the glyph at the endpoint cells — used wherever a [`JointSprite`]
/// will paint that cell instead.
#[derive(Debug, Clone)]
pub struct HorizontalLineSprite {
    id: SpriteId,
    width: i64,
    ignore_start: bool,
    ignore_end: bool,
}

impl HorizontalLineSprite {
    pub fn new(id: SpriteId, width: i64, ignore_start: bool, ignore_end: bool) -> Self {
        HorizontalLineSprite { id, width, ignore_start, ignore_end }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Point::ORIGIN, Point::new(0, self.width))
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));

        if cursor == Point::ORIGIN && self.ignore_start {
            return DrawResult::empty();
        }
        if cursor == Point::new(0, self.width) && self.ignore_end {
            return DrawResult::empty();
        }

        DrawResult::new(style.horizontal_line.clone(), style.branch_color)
    }

    pub fn category(&self) -> Category {
        Category::BRANCH
    }
}

#[derive(Debug, Clone)]
pub struct VerticalLineSprite {
    id: SpriteId,
    height: i64,
    ignore_start: bool,
    ignore_end: bool,
}

impl VerticalLineSprite {
    pub fn new(id: SpriteId, height: i64, ignore_start: bool, ignore_end: bool) -> Self {
        VerticalLineSprite { id, height, ignore_start, ignore_end }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Point::ORIGIN, Point::new(self.height, 0))
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));

        if cursor == Point::ORIGIN && self.ignore_start {
            return DrawResult::empty();
        }
        if cursor == Point::new(self.height, 0) && self.ignore_end {
            return DrawResult::empty();
        }

        DrawResult::new(style.vertical_line.clone(), style.branch_color)
    }

    pub fn category(&self) -> Category {
        Category::BRANCH
    }
}

/// A single cell drawn with one of the nine glyphs the style table carries
/// for corners, three-ways, and the four-way cross.
#[derive(Debug, Clone)]
pub struct JointSprite {
    id: SpriteId,
    joint: MultiJoint,
}

impl JointSprite {
    pub fn new(id: SpriteId, joint: MultiJoint) -> Self {
        JointSprite { id, joint }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Point::ORIGIN, Point::ORIGIN)
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));
        DrawResult::new(style.joint_glyph(self.joint).to_string(), style.branch_color)
    }

    pub fn category(&self) -> Category {
        Category::BRANCH
    }
}

/// Wraps any sprite, shifting both its bounding rect and its draw sampling
/// by a fixed `(Δline, Δcolumn)`. This is the only way a sprite built in
/// local coordinates gets placed onto the shared scene grid.
#[derive(Debug, Clone)]
pub struct TranslateSprite {
    id: SpriteId,
    sprite: Box<Sprite>,
    lines: i64,
    columns: i64,
}

impl TranslateSprite {
    pub fn new(id: SpriteId, sprite: Sprite, lines: i64, columns: i64) -> Self {
        TranslateSprite { id, sprite: Box::new(sprite), lines, columns }
    }

    pub fn rect(&self) -> Rect {
        self.sprite.rect().translate(self.lines, self.columns)
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect().envelopes(cursor));
        self.sprite.draw(style, translate(cursor, -self.lines, -self.columns))
    }

    pub fn category(&self) -> Category {
        self.sprite.category()
    }
}

/// An ordered collection of sprites, sampled in list order with a simple
/// rule: **later sprites overwrite earlier non-empty draws**. This is the
/// only z-ordering mechanism in the whole sprite model — a node places its
/// text first and its box last specifically so the box border overdraws
/// any character that lands on the boundary cell.
#[derive(Debug, Clone)]
pub struct CompositeSprite {
    id: SpriteId,
    sprites: Vec<Sprite>,
    rect: Rect,
    category: Category,
}

impl CompositeSprite {
    pub fn new(id: SpriteId, sprites: Vec<Sprite>) -> Self {
        debug_assert!(!sprites.is_empty());

        let mut rect = sprites[0].rect();
        let mut category = Category::NONE;
        for sprite in &sprites {
            rect = rect.union(sprite.rect());
            category = category | sprite.category();
        }

        CompositeSprite { id, sprites, rect, category }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        debug_assert!(self.rect.envelopes(cursor));

        let mut result = DrawResult::empty();
        for sprite in &self.sprites {
            if !sprite.rect().envelopes(cursor) {
                continue;
            }
            let current = sprite.draw(style, cursor);
            if !current.is_empty() {
                result = current;
            }
        }
        result
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// A three-segment orthogonal path connecting `p1 -> p2 -> p3`, used for
/// the "S-curve" branch between a parent and a child whose center columns
/// differ. `ignore_start`/`ignore_end` on the outer two legs let the caller
/// suppress the glyph at the parent/child attachment cells, which the
/// caller draws itself (the node's connection stub).
#[derive(Debug, Clone)]
pub struct Spline3Sprite {
    composite: CompositeSprite,
}

impl Spline3Sprite {
    pub fn new(ids: &mut IdGen, p1: Point, p2: Point, p3: Point, ignore_start: bool, ignore_end: bool) -> Self {
        debug_assert!(p1.line == 0 || p1.column == 0);
        debug_assert!(p2.line == p1.line || p2.column == p1.column);
        debug_assert!(p3.line == p2.line || p3.column == p2.column);
        debug_assert_ne!(p1, p2);
        debug_assert_ne!(p2, p3);

        let make_line = |ids: &mut IdGen, p: Point, ignore_start: bool, ignore_end: bool| -> Sprite {
            match axis_of(Point::ORIGIN, p) {
                Axis::Horizontal => Sprite::HorizontalLine(HorizontalLineSprite::new(ids.next(), p.column, ignore_start, ignore_end)),
                Axis::Vertical => Sprite::VerticalLine(VerticalLineSprite::new(ids.next(), p.line, ignore_start, ignore_end)),
            }
        };

        let join_of = |ids: &mut IdGen, p0: Point, p1: Point, p2: Point| -> Sprite {
            let dir1 = direction_of(p0, p1);
            let dir2 = direction_of(p1, p2);
            let has_down = dir1 == Direction::Up || dir2 == Direction::Down;
            let has_right = dir1 == Direction::Left || dir2 == Direction::Right;
            let j1 = if has_down { SingleJoint::Down } else { SingleJoint::Up };
            let j2 = if has_right { SingleJoint::Right } else { SingleJoint::Left };
            Sprite::Joint(JointSprite::new(ids.next(), j1 | j2))
        };

        let l1 = make_line(ids, p1, ignore_start, true);
        let l2 = make_line(ids, translate(p2, -p1.line, -p1.column), true, true);
        let l3 = make_line(ids, translate(p3, -p2.line, -p2.column), true, ignore_end);
        let join1 = join_of(ids, Point::ORIGIN, p1, p2);
        let join2 = join_of(ids, p1, p2, p3);

        let sprites = vec![
            l1,
            Sprite::Translate(TranslateSprite::new(ids.next(), l2, p1.line, p1.column)),
            Sprite::Translate(TranslateSprite::new(ids.next(), l3, p2.line, p2.column)),
            Sprite::Translate(TranslateSprite::new(ids.next(), join1, p1.line, p1.column)),
            Sprite::Translate(TranslateSprite::new(ids.next(), join2, p2.line, p2.column)),
        ];

        Spline3Sprite { composite: CompositeSprite::new(ids.next(), sprites) }
    }

    pub fn rect(&self) -> Rect {
        self.composite.rect()
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        self.composite.draw_raw(style, cursor)
    }

    pub fn category(&self) -> Category {
        Category::BRANCH
    }
}

/// A label translated one cell in from the top-left of a box, with the box
/// drawn after it so the border overdraws the text at the edges.
#[derive(Debug, Clone)]
pub struct NodeSprite {
    composite: CompositeSprite,
}

impl NodeSprite {
    pub fn new(ids: &mut IdGen, height: i64, width: i64, is_top_connected: bool, is_bot_connected: bool, text: &str) -> Self {
        let box_sprite = Sprite::Box(BoxSprite::new(ids.next(), height, width, is_top_connected, is_bot_connected));
        let text_sprite = Sprite::Text(TextSprite::new(ids.next(), text, height - 2, width - 2));
        let sprites = vec![Sprite::Translate(TranslateSprite::new(ids.next(), text_sprite, 1, 1)), box_sprite];
        NodeSprite { composite: CompositeSprite::new(ids.next(), sprites) }
    }

    pub fn rect(&self) -> Rect {
        self.composite.rect()
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        self.composite.draw_raw(style, cursor)
    }

    pub fn category(&self) -> Category {
        Category::NODE | Category::TEXT
    }
}

/// The tagged sum over every concrete sprite kind. See the module docs for
/// why this replaces a trait object.
#[derive(Debug, Clone)]
pub enum Sprite {
    Character(CharacterSprite),
    Text(TextSprite),
    Box(BoxSprite),
    Joint(JointSprite),
    HorizontalLine(HorizontalLineSprite),
    VerticalLine(VerticalLineSprite),
    Spline3(Spline3Sprite),
    Composite(CompositeSprite),
    Translate(TranslateSprite),
    Node(NodeSprite),
}

impl Sprite {
    pub fn rect(&self) -> Rect {
        match self {
            Sprite::Character(s) => s.rect(),
            Sprite::Text(s) => s.rect(),
            Sprite::Box(s) => s.rect(),
            Sprite::Joint(s) => s.rect(),
            Sprite::HorizontalLine(s) => s.rect(),
            Sprite::VerticalLine(s) => s.rect(),
            Sprite::Spline3(s) => s.rect(),
            Sprite::Composite(s) => s.rect(),
            Sprite::Translate(s) => s.rect(),
            Sprite::Node(s) => s.rect(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Sprite::Character(s) => s.category(),
            Sprite::Text(s) => s.category(),
            Sprite::Box(s) => s.category(),
            Sprite::Joint(s) => s.category(),
            Sprite::HorizontalLine(s) => s.category(),
            Sprite::VerticalLine(s) => s.category(),
            Sprite::Spline3(s) => s.category(),
            Sprite::Composite(s) => s.category(),
            Sprite::Translate(s) => s.category(),
            Sprite::Node(s) => s.category(),
        }
    }

    fn id(&self) -> SpriteId {
        match self {
            Sprite::Character(s) => s.id,
            Sprite::Text(s) => s.id,
            Sprite::Box(s) => s.id,
            Sprite::Joint(s) => s.id,
            Sprite::HorizontalLine(s) => s.id,
            Sprite::VerticalLine(s) => s.id,
            Sprite::Spline3(s) => s.composite.id,
            Sprite::Composite(s) => s.id,
            Sprite::Translate(s) => s.id,
            Sprite::Node(s) => s.composite.id,
        }
    }

    fn draw_raw(&self, style: &Style, cursor: Point) -> DrawResult {
        match self {
            Sprite::Character(s) => s.draw_raw(style, cursor),
            Sprite::Text(s) => s.draw_raw(style, cursor),
            Sprite::Box(s) => s.draw_raw(style, cursor),
            Sprite::Joint(s) => s.draw_raw(style, cursor),
            Sprite::HorizontalLine(s) => s.draw_raw(style, cursor),
            Sprite::VerticalLine(s) => s.draw_raw(style, cursor),
            Sprite::Spline3(s) => s.draw_raw(style, cursor),
            Sprite::Composite(s) => s.draw_raw(style, cursor),
            Sprite::Translate(s) => s.draw_raw(style, cursor),
            Sprite::Node(s) => s.draw_raw(style, cursor),
        }
    }

    /// Draws the cell, then substitutes a rainbow hue if this sprite's
    /// exact category matches a style color set to [`ColorRgb::RAINBOW`].
    pub fn draw(&self, style: &Style, cursor: Point) -> DrawResult {
        let mut result = self.draw_raw(style, cursor);
        let category = self.category();

        let pick = || pick_rainbow(rainbow_seed(category, cursor, self.id()));

        if category == Category::BRANCH && style.branch_color == ColorRgb::RAINBOW {
            result.color = pick();
        }
        if category == Category::NODE && style.box_color == ColorRgb::RAINBOW {
            result.color = pick();
        }
        if category == Category::TEXT && style.text_color == ColorRgb::RAINBOW {
            result.color = pick();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn box_sprite_draws_corners_and_leaves_interior_transparent() {
        let mut ids = IdGen::new();
        let b = BoxSprite::new(ids.next(), 2, 4, false, false);
        let style = Style::thin();
        assert_eq!(b.draw_raw(&style, Point::new(0, 0)).glyph, "┌");
        assert_eq!(b.draw_raw(&style, Point::new(0, 4)).glyph, "┐");
        assert_eq!(b.draw_raw(&style, Point::new(2, 0)).glyph, "└");
        assert_eq!(b.draw_raw(&style, Point::new(2, 4)).glyph, "┘");
        assert!(b.draw_raw(&style, Point::new(1, 2)).is_empty());
    }

    #[test]
    fn composite_lets_later_sprites_overwrite_earlier_ones() {
        let mut ids = IdGen::new();
        let under = Sprite::Character(CharacterSprite::new(ids.next(), "a"));
        let over = Sprite::Character(CharacterSprite::new(ids.next(), "b"));
        let composite = CompositeSprite::new(ids.next(), vec![under, over]);
        let style = Style::thin();
        assert_eq!(composite.draw_raw(&style, Point::ORIGIN).glyph, "b");
    }

    #[test]
    fn translate_shifts_both_rect_and_sampling() {
        let mut ids = IdGen::new();
        let inner = Sprite::Character(CharacterSprite::new(ids.next(), "x"));
        let moved = TranslateSprite::new(ids.next(), inner, 3, 5);
        assert_eq!(moved.rect(), Rect::new(Point::new(3, 5), Point::new(3, 5)));
        let style = Style::thin();
        assert_eq!(moved.draw_raw(&style, Point::new(3, 5)).glyph, "x");
    }

    #[test]
    fn node_sprite_box_overdraws_text_at_the_border() {
        let mut ids = IdGen::new();
        let node = NodeSprite::new(&mut ids, 3, 5, false, false, "a");
        let style = Style::thin();
        assert_eq!(node.draw_raw(&style, Point::new(0, 0)).glyph, "┌");
        assert_eq!(node.draw_raw(&style, Point::new(1, 1)).glyph, "a");
    }

    #[test]
    fn rainbow_sentinel_replaces_branch_color_deterministically() {
        let mut ids = IdGen::new();
        let line = Sprite::HorizontalLine(HorizontalLineSprite::new(ids.next(), 3, false, false));
        let mut style = Style::thin();
        style.branch_color = ColorRgb::RAINBOW;
        let a = line.draw(&style, Point::new(0, 1));
        let b = line.draw(&style, Point::new(0, 1));
        assert_eq!(a.color, b.color);
        assert_ne!(a.color, ColorRgb::RAINBOW);
    }
}
