//! Code 128 barcode for the participant identifier

use crate::{ReceiptError, Result};
use barcoders::sym::code128::Code128;
use image::GrayImage;

/// Pixels per barcode module in the raster
const MODULE_WIDTH: u32 = 3;

/// Raster bar height in pixels
const BAR_HEIGHT: u32 = 60;

/// Quiet zone width in pixels on each side
const QUIET_ZONE: u32 = 10;

/// Page width of one barcode module in points, as calibrated on the
/// pass template
pub const POINTS_PER_MODULE: f64 = 2.5;

/// Encode a participant identifier as a Code 128 bitmap
///
/// Character set B covers the alphanumeric identifier format; barcoders
/// selects the set from a leading Unicode prefix character.
pub fn encode(data: &str) -> Result<GrayImage> {
    let barcode = Code128::new(&format!("\u{0181}{data}"))
        .map_err(|e| ReceiptError::BarcodeError(e.to_string()))?;
    let encoded = barcode.encode();

    let width = encoded.len() as u32 * MODULE_WIDTH + QUIET_ZONE * 2;
    let mut pixels = vec![255u8; (width * BAR_HEIGHT) as usize];

    for (i, bar) in encoded.iter().enumerate() {
        if *bar == 1 {
            for dx in 0..MODULE_WIDTH {
                let px = QUIET_ZONE + i as u32 * MODULE_WIDTH + dx;
                for y in 0..BAR_HEIGHT {
                    pixels[(y * width + px) as usize] = 0;
                }
            }
        }
    }

    GrayImage::from_raw(width, BAR_HEIGHT, pixels)
        .ok_or_else(|| ReceiptError::BarcodeError("raster buffer size mismatch".to_string()))
}

/// Page width in points for a rendered barcode raster
///
/// Maps raster pixels back to modules so the drawn barcode keeps the
/// calibrated module width regardless of raster resolution.
pub fn point_width(image: &GrayImage) -> f64 {
    image.width() as f64 * POINTS_PER_MODULE / MODULE_WIDTH as f64
}
