//! QR encoding for the receipt verification link

use crate::{ReceiptError, Result};
use image::GrayImage;
use qrcode::{EcLevel, QrCode};

/// Pixels per QR module
const MODULE_SIZE: u32 = 10;

/// Quiet zone width in modules
const QUIET_ZONE: u32 = 4;

/// Build the verification link embedded in the QR code
///
/// Scanning the receipt resolves this endpoint, which cross-checks the
/// order against the recorded payment. The placeholder payment id is
/// embedded verbatim when no payment id was recorded.
pub fn verification_url(base_url: &str, order_id: &str, payment_id: &str) -> String {
    format!("{base_url}/api/payment/receipt/{order_id}/verify?paymentId={payment_id}")
}

/// Encode text as a QR bitmap
///
/// Error correction is fixed at level L: the payload is a short URL, so
/// the densest-but-smallest code is preferred. Rendering is deterministic
/// for identical input.
pub fn encode(text: &str) -> Result<GrayImage> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)
        .map_err(|e| ReceiptError::QrError(e.to_string()))?;

    let modules = code.to_colors();
    let width = code.width() as u32;
    let size = (width + QUIET_ZONE * 2) * MODULE_SIZE;
    let mut pixels = vec![255u8; (size * size) as usize];

    for (i, color) in modules.iter().enumerate() {
        if *color == qrcode::types::Color::Dark {
            let px = (i as u32 % width + QUIET_ZONE) * MODULE_SIZE;
            let py = (i as u32 / width + QUIET_ZONE) * MODULE_SIZE;
            for dy in 0..MODULE_SIZE {
                for dx in 0..MODULE_SIZE {
                    pixels[((py + dy) * size + (px + dx)) as usize] = 0;
                }
            }
        }
    }

    GrayImage::from_raw(size, size, pixels)
        .ok_or_else(|| ReceiptError::QrError("raster buffer size mismatch".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verification_url() {
        assert_eq!(
            verification_url("http://localhost:4000", "ORD1", "-"),
            "http://localhost:4000/api/payment/receipt/ORD1/verify?paymentId=-"
        );
        assert_eq!(
            verification_url("https://fest.example.org", "order_77", "pay_1"),
            "https://fest.example.org/api/payment/receipt/order_77/verify?paymentId=pay_1"
        );
    }

    #[test]
    fn test_encode_is_square_with_quiet_zone() {
        let image = encode("http://localhost:4000/api/payment/receipt/ORD1/verify?paymentId=-")
            .unwrap();

        assert_eq!(image.width(), image.height());
        // Whole modules only
        assert_eq!(image.width() % MODULE_SIZE, 0);
        // At least the 21-module version 1 code plus quiet zones
        assert!(image.width() >= (21 + QUIET_ZONE * 2) * MODULE_SIZE);
    }

    #[test]
    fn test_encode_has_dark_and_light_pixels() {
        let image = encode("https://example.org/r/1").unwrap();
        assert!(image.pixels().any(|p| p[0] == 0));
        assert!(image.pixels().any(|p| p[0] == 255));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode("https://example.org/r/1").unwrap();
        let b = encode("https://example.org/r/1").unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_encode_quiet_zone_is_light() {
        let image = encode("https://example.org/r/1").unwrap();
        for offset in 0..QUIET_ZONE * MODULE_SIZE {
            assert_eq!(image.get_pixel(offset, 0)[0], 255);
            assert_eq!(image.get_pixel(0, offset)[0], 255);
        }
    }
}
