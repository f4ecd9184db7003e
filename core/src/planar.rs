//! Conversion between pixel values and HuC6270 bitplane patterns.

use alloc::{vec, vec::Vec};
use log::{debug, trace};

use crate::{
    art::ArtGrid,
    error::{Error, Result},
    mode::{Layout, Mode, PLANES},
    sheet::Sheet,
    xlate::TranslationTable,
};

/// Encodes the tiles selected by `sheet` into a freshly allocated pattern
/// array of `sheet.buffer_len()` bytes.
pub fn encode(
    mode: Mode,
    sheet: &Sheet,
    art: &ArtGrid,
    table: &TranslationTable,
) -> Result<Vec<u8>> {
    sheet.validate(mode, art)?;
    let layout = mode.layout();
    let mut buffer = vec![0u8; sheet.buffer_len(layout)];
    let capacity = buffer.len();

    for row in 0..sheet.y_tiles {
        for col in 0..sheet.x_tiles {
            let range = sheet.tile_range(layout, row, col);
            let (origin_x, origin_y) = sheet.tile_origin(layout, row, col);
            trace!("Tile ({}, {}) from ({}, {}) at {:?}", col, row, origin_x, origin_y, range);
            let Some(tile) = range.clone().and_then(|range| buffer.get_mut(range)) else {
                return Err(Error::StrideOverflow {
                    end: range.map_or(usize::MAX, |range| range.end),
                    capacity,
                });
            };

            for k in 0..layout.pixel_height {
                for column in 0..layout.pixel_width {
                    let (x, y) = (origin_x + column, origin_y + k);
                    let ch = art.get(x, y).ok_or(Error::BeyondRightEdge(mode))?;
                    let value = table
                        .value_of(ch)
                        .ok_or(Error::UnknownCharacter { ch, x, y })?;
                    put_pixel(layout, tile, column, k, value);
                }
            }
        }
    }

    debug!("Encoded {} {} pattern(s) into {} bytes", sheet.tile_count(), mode.repr(), buffer.len());
    Ok(buffer)
}

/// Stores the low four bits of `value` as pixel (`x`, `y`) of one pattern.
pub fn put_pixel(layout: &Layout, tile: &mut [u8], x: usize, y: usize, value: u8) {
    let (extra_byte, shift) = layout.bit_position(x);
    let mask = 1u8 << shift;
    for plane in 0..PLANES {
        let byte = &mut tile[layout.plane_byte(y, extra_byte, plane)];
        *byte &= !mask;
        if (value >> plane) & 1 == 1 {
            *byte |= mask;
        }
    }
}

/// Reads back the value of pixel (`x`, `y`) of one pattern.
pub fn get_pixel(layout: &Layout, tile: &[u8], x: usize, y: usize) -> u8 {
    let (extra_byte, shift) = layout.bit_position(x);
    (0..PLANES).fold(0u8, |value, plane| {
        let bit = (tile[layout.plane_byte(y, extra_byte, plane)] >> shift) & 1;
        value | (bit << plane)
    })
}

/// Expands an encoded array back into pixel values, row-major, sized
/// `x_tiles * pixel_width` by `y_tiles * pixel_height`.
pub fn decode(mode: Mode, sheet: &Sheet, buffer: &[u8]) -> Vec<u8> {
    let layout = mode.layout();
    let width = sheet.x_tiles * layout.pixel_width;
    let height = sheet.y_tiles * layout.pixel_height;
    let mut pixels = vec![0u8; width * height];

    for row in 0..sheet.y_tiles {
        for col in 0..sheet.x_tiles {
            let range = sheet.tile_range(layout, row, col);
            let Some(tile) = range.and_then(|range| buffer.get(range)) else {
                continue;
            };
            for y in 0..layout.pixel_height {
                for x in 0..layout.pixel_width {
                    let px = col * layout.pixel_width + x;
                    let py = row * layout.pixel_height + y;
                    pixels[py * width + px] = get_pixel(layout, tile, x, y);
                }
            }
        }
    }
    pixels
}
