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

//! Grid geometry: points, rectangles, and axis-aligned segments.
//!
//! `line` grows downward and `column` grows rightward; the origin is
//! `(0, 0)`. Every coordinate is a plain `i64` so that offsets computed
//! during layout (which can go negative) never overflow unexpectedly.

pub type Coord = i64;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub line: Coord,
    pub column: Coord,
}

impl Point {
    pub const ORIGIN: Point = Point { line: 0, column: 0 };

    pub const fn new(line: Coord, column: Coord) -> Self {
        Point { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    pub const fn line_magnitude(self) -> Coord {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 0,
            Direction::Up => -1,
        }
    }

    pub const fn column_magnitude(self) -> Coord {
        match self {
            Direction::Right => 1,
            Direction::Down => 0,
            Direction::Left => -1,
            Direction::Up => 0,
        }
    }
}

/// Classifies the relationship between two points that are known to share
/// either a line or a column. Panics (via assert) on a diagonal pair — the
/// caller is expected to only ever hand this colinear endpoints.
pub fn axis_of(p1: Point, p2: Point) -> Axis {
    if p1.line == p2.line {
        Axis::Horizontal
    } else if p1.column == p2.column {
        Axis::Vertical
    } else {
        panic!("axis_of: points are not axis-aligned: {p1:?}, {p2:?}");
    }
}

pub fn direction_of(p1: Point, p2: Point) -> Direction {
    if p2.column == p1.column {
        if p2.line > p1.line {
            Direction::Down
        } else {
            Direction::Up
        }
    } else if p2.line == p1.line {
        if p2.column > p1.column {
            Direction::Right
        } else {
            Direction::Left
        }
    } else {
        panic!("direction_of: points are not axis-aligned: {p1:?}, {p2:?}");
    }
}

pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new(
        p1.line + (p2.line - p1.line) / 2,
        p1.column + (p2.column - p1.column) / 2,
    )
}

pub fn translate(p: Point, lines: Coord, columns: Coord) -> Point {
    Point::new(p.line + lines, p.column + columns)
}

pub fn translate_dir(p: Point, dir: Direction, amount: Coord) -> Point {
    translate(p, dir.line_magnitude() * amount, dir.column_magnitude() * amount)
}

/// A horizontal segment; both endpoints must share a `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalSegment {
    pub p1: Point,
    pub p2: Point,
}

impl HorizontalSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        debug_assert_eq!(p1.line, p2.line);
        HorizontalSegment { p1, p2 }
    }

    pub fn signed_length(self) -> Coord {
        self.p2.column - self.p1.column
    }

    pub fn length(self) -> Coord {
        self.signed_length().abs()
    }

    pub fn direction(self) -> Direction {
        if self.p2.column > self.p1.column {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn envelopes(self, point: Point) -> bool {
        let c1 = self.p1.column.min(self.p2.column);
        let c2 = self.p1.column.max(self.p2.column);
        point.line == self.p1.line && point.column >= c1 && point.column <= c2
    }
}

/// A vertical segment; both endpoints must share a `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalSegment {
    pub p1: Point,
    pub p2: Point,
}

impl VerticalSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        debug_assert_eq!(p1.column, p2.column);
        VerticalSegment { p1, p2 }
    }

    pub fn signed_length(self) -> Coord {
        self.p2.line - self.p1.line
    }

    pub fn length(self) -> Coord {
        self.signed_length().abs()
    }

    pub fn direction(self) -> Direction {
        if self.p2.line > self.p1.line {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    pub fn envelopes(self, point: Point) -> bool {
        let l1 = self.p1.line.min(self.p2.line);
        let l2 = self.p1.line.max(self.p2.line);
        point.column == self.p1.column && point.line >= l1 && point.line <= l2
    }
}

/// An axis-aligned rectangle stored in canonical top-left / bottom-right
/// form. Height/width are exclusive of the corner (a rect of height `h`
/// covers `h + 1` lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub p1: Point,
    pub p2: Point,
}

impl Rect {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Rect { p1, p2 }
    }

    pub fn top_line(self) -> Coord {
        self.p1.line.min(self.p2.line)
    }

    pub fn bot_line(self) -> Coord {
        self.p1.line.max(self.p2.line)
    }

    pub fn left_column(self) -> Coord {
        self.p1.column.min(self.p2.column)
    }

    pub fn right_column(self) -> Coord {
        self.p1.column.max(self.p2.column)
    }

    pub fn top_left_corner(self) -> Point {
        Point::new(self.top_line(), self.left_column())
    }

    pub fn top_right_corner(self) -> Point {
        Point::new(self.top_line(), self.right_column())
    }

    pub fn bot_left_corner(self) -> Point {
        Point::new(self.bot_line(), self.left_column())
    }

    pub fn bot_right_corner(self) -> Point {
        Point::new(self.bot_line(), self.right_column())
    }

    pub fn top_segment(self) -> HorizontalSegment {
        HorizontalSegment::new(self.top_left_corner(), self.top_right_corner())
    }

    pub fn bot_segment(self) -> HorizontalSegment {
        HorizontalSegment::new(self.bot_left_corner(), self.bot_right_corner())
    }

    pub fn left_segment(self) -> VerticalSegment {
        VerticalSegment::new(self.top_left_corner(), self.bot_left_corner())
    }

    pub fn right_segment(self) -> VerticalSegment {
        VerticalSegment::new(self.top_right_corner(), self.bot_right_corner())
    }

    pub fn height(self) -> Coord {
        self.p2.line - self.p1.line
    }

    pub fn width(self) -> Coord {
        self.p2.column - self.p1.column
    }

    pub fn envelopes(self, point: Point) -> bool {
        let inside_v = point.line >= self.top_line() && point.line <= self.bot_line();
        let inside_h = point.column >= self.left_column() && point.column <= self.right_column();
        inside_v && inside_h
    }

    pub fn translate(self, lines: Coord, columns: Coord) -> Rect {
        Rect::new(translate(self.p1, lines, columns), translate(self.p2, lines, columns))
    }

    /// Smallest rect enclosing both `self` and `other`.
    pub fn union(self, other: Rect) -> Rect {
        let min_line = self.top_line().min(other.top_line());
        let max_line = self.bot_line().max(other.bot_line());
        let min_column = self.left_column().min(other.left_column());
        let max_column = self.right_column().max(other.right_column());
        Rect::new(Point::new(min_line, min_column), Point::new(max_line, max_column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_dimensions_are_exclusive_of_the_far_corner() {
        let r = Rect::new(Point::new(0, 0), Point::new(2, 4));
        assert_eq!(r.height(), 2);
        assert_eq!(r.width(), 4);
    }

    #[test]
    fn midpoint_rounds_toward_p1() {
        assert_eq!(midpoint(Point::new(0, 0), Point::new(0, 3)), Point::new(0, 1));
    }

    #[test]
    fn envelopes_includes_the_boundary() {
        let r = Rect::new(Point::new(0, 0), Point::new(2, 2));
        assert!(r.envelopes(Point::new(0, 0)));
        assert!(r.envelopes(Point::new(2, 2)));
        assert!(!r.envelopes(Point::new(3, 0)));
    }

    #[test]
    fn direction_of_matches_column_and_line_deltas() {
        assert_eq!(direction_of(Point::new(0, 0), Point::new(0, 5)), Direction::Right);
        assert_eq!(direction_of(Point::new(0, 5), Point::new(0, 0)), Direction::Left);
        assert_eq!(direction_of(Point::new(0, 0), Point::new(5, 0)), Direction::Down);
        assert_eq!(direction_of(Point::new(5, 0), Point::new(0, 0)), Direction::Up);
    }
}
