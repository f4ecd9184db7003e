use std::path::Path;

use cvtgfx_core::{Mode, Sheet, planar};
use log::info;

/// Luma step between two neighbouring pixel values.
const LUMA_STEP: u8 = 17;

/// Decodes `data` and saves it as a grayscale PNG, one image pixel per
/// pattern pixel, value 15 being white.
pub fn save(path: &Path, mode: Mode, sheet: &Sheet, data: &[u8]) -> image::ImageResult<()> {
    let layout = mode.layout();
    let width = sheet.x_tiles * layout.pixel_width;
    let height = sheet.y_tiles * layout.pixel_height;
    let luma = to_luma(&planar::decode(mode, sheet, data));

    info!("Saving {}x{} preview to {:?}", width, height, path);
    image::save_buffer(
        path,
        &luma,
        width as u32,
        height as u32,
        image::ColorType::L8,
    )
}

fn to_luma(pixels: &[u8]) -> Vec<u8> {
    pixels.iter().map(|value| (value & 0x0F) * LUMA_STEP).collect()
}
