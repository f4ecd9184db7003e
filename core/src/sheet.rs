use core::ops::Range;

use log::debug;

use crate::{
    art::ArtGrid,
    error::{Error, Result},
    mode::{Layout, Mode},
};

/// Placement of the patterns to extract: where sampling starts in the art and
/// how the tiles are arranged in the output array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    pub offset_x: usize,
    pub offset_y: usize,
    pub x_tiles: usize,
    pub y_tiles: usize,
    /// Row stride of the output array, in tiles.
    pub virt_width: usize,
}

impl Sheet {
    pub fn tile_count(&self) -> usize {
        self.x_tiles * self.y_tiles
    }

    pub fn buffer_len(&self, layout: &Layout) -> usize {
        self.tile_count() * layout.bytes_in_tile
    }

    /// Byte offset of the tile in grid row `row`, column `col`, or `None` when
    /// it does not fit in a `usize`.
    pub fn tile_offset(&self, layout: &Layout, row: usize, col: usize) -> Option<usize> {
        self.virt_width
            .checked_mul(row)?
            .checked_add(col)?
            .checked_mul(layout.bytes_in_tile)
    }

    /// Bytes of the output array holding the tile at `row`, `col`.
    pub fn tile_range(&self, layout: &Layout, row: usize, col: usize) -> Option<Range<usize>> {
        let start = self.tile_offset(layout, row, col)?;
        Some(start..start.checked_add(layout.bytes_in_tile)?)
    }

    /// Top-left art coordinate sampled for the tile at `row`, `col`.
    pub fn tile_origin(&self, layout: &Layout, row: usize, col: usize) -> (usize, usize) {
        (
            self.offset_x + col * layout.pixel_width,
            self.offset_y + row * layout.pixel_height,
        )
    }

    /// Checks that every sampled pixel lies inside `art` and every tile lands
    /// inside the output array.
    pub fn validate(&self, mode: Mode, art: &ArtGrid) -> Result<()> {
        let layout = mode.layout();
        if self.x_tiles > self.virt_width {
            return Err(Error::StrideTooNarrow {
                x_tiles: self.x_tiles,
                virt_width: self.virt_width,
            });
        }

        let bottom = self
            .offset_y
            .saturating_add(layout.pixel_height.saturating_mul(self.y_tiles.max(1)));
        if bottom > art.height() {
            return Err(Error::BeyondBottomEdge(mode));
        }

        let right = self
            .offset_x
            .saturating_add(layout.pixel_width.saturating_mul(self.x_tiles.max(1)));
        if right > art.min_width() {
            return Err(Error::BeyondRightEdge(mode));
        }

        if self.tile_count() > 0 {
            let end = self
                .tile_range(layout, self.y_tiles - 1, self.x_tiles - 1)
                .map_or(usize::MAX, |range| range.end);
            let capacity = self.buffer_len(layout);
            if end > capacity {
                return Err(Error::StrideOverflow { end, capacity });
            }
        }

        debug!(
            "Sampling {}x{} pixels at ({}, {}) from {} lines of at least {} characters",
            right - self.offset_x,
            bottom - self.offset_y,
            self.offset_x,
            self.offset_y,
            art.height(),
            art.min_width()
        );
        Ok(())
    }
}
