//! Pattern formats understood by the HuC6270.
//!
//! Both formats store 4 bits per pixel split across four bitplanes. Each pixel
//! row takes two bytes per plane pair: a background tile interleaves planes
//! 0/1 and 2/3 byte by byte, a sprite keeps every plane as a run of 16-bit
//! words with the leftmost pixel in the most significant bit.

/// Number of bitplanes in a pattern.
pub const PLANES: usize = 4;

/// Byte distance between two consecutive pixel rows of one plane.
pub const ROW_STRIDE: usize = 2;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    Tile,
    Sprite,
}

impl Mode {
    pub fn repr(self) -> &'static str {
        match self {
            Mode::Tile => "TILE",
            Mode::Sprite => "SPRITE",
        }
    }

    pub fn layout(self) -> &'static Layout {
        match self {
            Mode::Tile => &TILE_LAYOUT,
            Mode::Sprite => &SPRITE_LAYOUT,
        }
    }
}

/// Fixed geometry of one pattern.
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    pub pixel_width: usize,
    pub pixel_height: usize,
    /// Bytes per row in one plane.
    pub byte_width: usize,
    pub plane_offsets: [usize; PLANES],
    pub bytes_in_tile: usize,
}

static TILE_LAYOUT: Layout = Layout {
    pixel_width: 8,
    pixel_height: 8,
    byte_width: 1,
    plane_offsets: [0, 1, 16, 17],
    bytes_in_tile: 0x20,
};

static SPRITE_LAYOUT: Layout = Layout {
    pixel_width: 16,
    pixel_height: 16,
    byte_width: 2,
    plane_offsets: [0, 32, 64, 96],
    bytes_in_tile: 128,
};

impl Layout {
    /// Returns the byte (0 or 1) within a row and the bit inside that byte
    /// holding pixel `column` of a row, counted from the left edge.
    pub fn bit_position(&self, column: usize) -> (usize, u8) {
        debug_assert!(column < self.pixel_width);
        let remaining = self.pixel_width - column;
        if remaining > 8 {
            (1, (remaining - 9) as u8)
        } else {
            (0, (remaining - 1) as u8)
        }
    }

    /// Offset inside a pattern of the byte holding `plane` for the given
    /// pixel row and row byte.
    pub fn plane_byte(&self, row: usize, extra_byte: usize, plane: usize) -> usize {
        row * ROW_STRIDE + extra_byte + self.plane_offsets[plane]
    }
}
