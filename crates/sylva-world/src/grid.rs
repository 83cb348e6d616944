//! Quantizes horizontal ranges into tile-aligned columns.
//!
//! A column is identified by its left edge `c` (a multiple of the tile size)
//! and covers `[c, c + tile)`. Ranges are half-open, so adjacent ranges never
//! share a column and a range tiling the line yields every column exactly once.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    tile: i32,
}

impl TileGrid {
    pub fn new(tile: i32) -> Self {
        Self { tile: tile.max(1) }
    }

    #[inline]
    pub fn tile(&self) -> i32 {
        self.tile
    }

    #[inline]
    pub fn align_down(&self, x: i32) -> i32 {
        x.div_euclid(self.tile) * self.tile
    }

    #[inline]
    pub fn align_up(&self, x: i32) -> i32 {
        let down = self.align_down(x);
        if down == x { x } else { down + self.tile }
    }

    /// Index of the column containing pixel `x`.
    #[inline]
    pub fn index_of(&self, x: f32) -> i32 {
        (x / self.tile as f32).floor() as i32
    }

    /// Left edge of the column containing pixel `x`.
    #[inline]
    pub fn column_of(&self, x: f32) -> i32 {
        self.index_of(x) * self.tile
    }

    /// Columns whose footprint intersects `[min, max)`, in ascending order.
    pub fn columns(&self, min: i32, max: i32) -> Columns {
        if min >= max {
            return Columns::empty(self.tile);
        }
        let first = self.align_down(min);
        let span = i64::from(max) - i64::from(first);
        let t = i64::from(self.tile);
        let remaining = ((span + t - 1) / t) as usize;
        Columns {
            next: first,
            step: self.tile,
            remaining,
        }
    }

    /// Float range variant; edges are widened to whole pixels.
    pub fn columns_f32(&self, min: f32, max: f32) -> Columns {
        if min.is_nan() || max.is_nan() || min >= max {
            return Columns::empty(self.tile);
        }
        self.columns(min.floor() as i32, max.ceil() as i32)
    }
}

#[derive(Clone, Debug)]
pub struct Columns {
    next: i32,
    step: i32,
    remaining: usize,
}

impl Columns {
    fn empty(step: i32) -> Self {
        Self {
            next: 0,
            step,
            remaining: 0,
        }
    }
}

impl Iterator for Columns {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let c = self.next;
        self.remaining -= 1;
        self.next = self.next.wrapping_add(self.step);
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Columns {}
