// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

/// Which of a cell's four sides carry a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Edges(u8);

impl Edges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);
    const HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);
    const VERTICAL: Self = Self(Self::UP.0 | Self::DOWN.0);

    fn has(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn of(ch: char) -> Option<Self> {
        let edges = match ch {
            UNICODE_BOX_HORIZONTAL => Self::HORIZONTAL,
            UNICODE_BOX_VERTICAL => Self::VERTICAL,
            UNICODE_BOX_TOP_LEFT => Self::RIGHT.with(Self::DOWN),
            UNICODE_BOX_TOP_RIGHT => Self::LEFT.with(Self::DOWN),
            UNICODE_BOX_BOTTOM_LEFT => Self::RIGHT.with(Self::UP),
            UNICODE_BOX_BOTTOM_RIGHT => Self::LEFT.with(Self::UP),
            UNICODE_BOX_TEE_RIGHT => Self::VERTICAL.with(Self::RIGHT),
            UNICODE_BOX_TEE_LEFT => Self::VERTICAL.with(Self::LEFT),
            UNICODE_BOX_TEE_DOWN => Self::HORIZONTAL.with(Self::DOWN),
            UNICODE_BOX_TEE_UP => Self::HORIZONTAL.with(Self::UP),
            UNICODE_BOX_CROSS => Self::HORIZONTAL.with(Self::VERTICAL),
            _ => return None,
        };
        Some(edges)
    }

    fn glyph(self) -> char {
        let (left, right, up, down) = (
            self.has(Self::LEFT),
            self.has(Self::RIGHT),
            self.has(Self::UP),
            self.has(Self::DOWN),
        );
        match (left || right, up || down) {
            (false, false) => ' ',
            (true, false) => UNICODE_BOX_HORIZONTAL,
            (false, true) => UNICODE_BOX_VERTICAL,
            (true, true) => match (left, right, up, down) {
                (false, true, false, true) => UNICODE_BOX_TOP_LEFT,
                (true, false, false, true) => UNICODE_BOX_TOP_RIGHT,
                (false, true, true, false) => UNICODE_BOX_BOTTOM_LEFT,
                (true, false, true, false) => UNICODE_BOX_BOTTOM_RIGHT,
                (false, true, true, true) => UNICODE_BOX_TEE_RIGHT,
                (true, false, true, true) => UNICODE_BOX_TEE_LEFT,
                (true, true, false, true) => UNICODE_BOX_TEE_DOWN,
                (true, true, true, false) => UNICODE_BOX_TEE_UP,
                _ => UNICODE_BOX_CROSS,
            },
        }
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Text overwrites (last writer wins). Box-drawing characters accumulate edges instead, and a
/// cell only shows the edges its neighbours connect to, so a track drawn into a box side
/// becomes `┤`/`├` and a rail crossing a track becomes `┬`/`┴`/`┼`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    edges: Vec<Edges>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            edges: vec![Edges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.glyph_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        match Edges::of(ch) {
            Some(edges) => self.edges[idx] = self.edges[idx].with(edges),
            None => {
                self.cells[idx] = ch;
                self.edges[idx] = Edges::NONE;
            }
        }
        Ok(())
    }

    /// Writes `text` from `(x, y)` rightwards, clipping at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        self.index_of(x.min(self.width.saturating_sub(1)), y)?;
        for (offset, ch) in text.chars().enumerate() {
            if x + offset >= self.width {
                break;
            }
            self.set(x + offset, y, ch)?;
        }
        Ok(())
    }

    /// Horizontal line over `x0..=x1` (either order) on row `y`.
    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        self.index_of(lo, y)?;
        self.index_of(hi, y)?;
        for x in lo..=hi {
            self.set(x, y, UNICODE_BOX_HORIZONTAL)?;
        }
        Ok(())
    }

    /// Vertical line over `y0..=y1` (either order) in column `x`.
    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        self.index_of(x, lo)?;
        self.index_of(x, hi)?;
        for y in lo..=hi {
            self.set(x, y, UNICODE_BOX_VERTICAL)?;
        }
        Ok(())
    }

    /// Rectangle outline with top-left `(x, y)`. Nothing is drawn unless it fits entirely.
    pub fn draw_box(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<(), CanvasError> {
        if width < 2 || height < 2 {
            return self.draw_hline(x, x + width.saturating_sub(1), y);
        }
        let (right, bottom) = (x + width - 1, y + height - 1);
        self.index_of(right, bottom)?;

        for col in (x + 1)..right {
            self.set(col, y, UNICODE_BOX_HORIZONTAL)?;
            self.set(col, bottom, UNICODE_BOX_HORIZONTAL)?;
        }
        for row in (y + 1)..bottom {
            self.set(x, row, UNICODE_BOX_VERTICAL)?;
            self.set(right, row, UNICODE_BOX_VERTICAL)?;
        }
        self.set(x, y, UNICODE_BOX_TOP_LEFT)?;
        self.set(right, y, UNICODE_BOX_TOP_RIGHT)?;
        self.set(x, bottom, UNICODE_BOX_BOTTOM_LEFT)?;
        self.set(right, bottom, UNICODE_BOX_BOTTOM_RIGHT)
    }

    /// Rows with trailing spaces and trailing blank lines removed.
    pub fn to_trimmed_string(&self) -> String {
        let mut lines: Vec<String> = (0..self.height)
            .map(|y| {
                let line: String = (0..self.width)
                    .map(|x| self.glyph_at(x, y, y * self.width + x))
                    .collect();
                line.trim_end_matches(' ').to_owned()
            })
            .collect();
        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    fn glyph_at(&self, x: usize, y: usize, idx: usize) -> char {
        let edges = self.edges[idx];
        if edges == Edges::NONE {
            return self.cells[idx];
        }
        let connected = self.connected(x, y, edges);
        if connected == Edges::NONE {
            edges.glyph()
        } else {
            connected.glyph()
        }
    }

    fn connected(&self, x: usize, y: usize, edges: Edges) -> Edges {
        let neighbour = |nx: usize, ny: usize| self.edges[ny * self.width + nx];
        let mut out = Edges::NONE;
        if edges.has(Edges::LEFT) && x > 0 && neighbour(x - 1, y).has(Edges::RIGHT) {
            out = out.with(Edges::LEFT);
        }
        if edges.has(Edges::RIGHT) && x + 1 < self.width && neighbour(x + 1, y).has(Edges::LEFT) {
            out = out.with(Edges::RIGHT);
        }
        if edges.has(Edges::UP) && y > 0 && neighbour(x, y - 1).has(Edges::DOWN) {
            out = out.with(Edges::UP);
        }
        if edges.has(Edges::DOWN) && y + 1 < self.height && neighbour(x, y + 1).has(Edges::UP) {
            out = out.with(Edges::DOWN);
        }
        out
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.glyph_at(x, y, y * self.width + x))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas"),
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError};

    #[test]
    fn text_overwrites_and_reads_back() {
        let mut c = Canvas::new_filled(3, 2, '.').expect("canvas");
        c.set(1, 0, 'X').expect("set");
        assert_eq!(c.get(1, 0), Ok('X'));
        assert_eq!(c.to_string(), ".X.\n...");
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        let expected = CanvasError::OutOfBounds {
            x: 2,
            y: 0,
            width: 2,
            height: 2,
        };
        assert_eq!(c.set(2, 0, 'X'), Err(expected));
        assert!(c.get(0, 2).is_err());
        assert!(c.write_str(0, 5, "x").is_err());
    }

    #[test]
    fn rejects_area_overflow() {
        let err = Canvas::new(usize::MAX, 2).expect_err("overflow");
        assert_eq!(
            err,
            CanvasError::AreaOverflow {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn write_str_clips_at_right_edge() {
        let mut c = Canvas::new_filled(4, 1, '.').expect("canvas");
        c.write_str(2, 0, "abcdef").expect("write");
        assert_eq!(c.to_string(), "..ab");
    }

    #[test]
    fn draw_box_is_all_or_nothing() {
        let mut c = Canvas::new_filled(4, 3, '.').expect("canvas");
        assert!(c.draw_box(0, 0, 5, 3).is_err());
        assert_eq!(c.to_string(), "....\n....\n....");

        c.draw_box(0, 0, 4, 3).expect("box");
        assert_eq!(c.to_string(), "┌──┐\n│..│\n└──┘");
    }

    #[test]
    fn track_into_box_side_becomes_tee() {
        let mut c = Canvas::new(9, 3).expect("canvas");
        c.draw_box(2, 0, 5, 3).expect("box");
        c.draw_hline(0, 2, 1).expect("track in");
        c.draw_hline(6, 8, 1).expect("track out");
        assert_eq!(c.to_string(), "  ┌───┐  \n──┤   ├──\n  └───┘  ");
    }

    #[test]
    fn rails_merge_into_tees_and_corners() {
        let mut c = Canvas::new(5, 3).expect("canvas");
        c.draw_hline(0, 4, 0).expect("main");
        c.draw_vline(1, 0, 2).expect("rail");
        c.draw_vline(3, 0, 2).expect("rail");
        c.draw_hline(1, 3, 2).expect("return");
        assert_eq!(c.to_string(), "─┬─┬─\n │ │ \n └─┘ ");
    }

    #[test]
    fn crossing_lines_merge_into_cross() {
        let mut c = Canvas::new_filled(3, 3, '.').expect("canvas");
        c.draw_hline(0, 2, 1).expect("h");
        c.draw_vline(1, 0, 2).expect("v");
        assert_eq!(c.to_string(), ".│.\n─┼─\n.│.");
    }

    #[test]
    fn trimmed_string_drops_trailing_blanks() {
        let mut c = Canvas::new(3, 3).expect("canvas");
        c.set(0, 0, 'A').expect("set");
        assert_eq!(c.to_trimmed_string(), "A");
    }
}
