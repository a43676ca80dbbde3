//! Image embedding for PDF documents

use crate::{PdfError, Result};
use image::{DynamicImage, GrayImage, ImageReader};
use lopdf::{Dictionary, Object, Stream};
use std::io::Cursor;
use std::io::Write;

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// Image XObject for PDF embedding
///
/// Pixel data is stored zlib-compressed and declared with the FlateDecode
/// filter. Alpha channels are blended against a white background, since
/// receipts are always composed over opaque artwork.
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color space ("DeviceRGB" or "DeviceGray")
    pub color_space: &'static str,
    /// Compressed pixel data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Create an XObject from encoded image bytes (PNG or JPEG)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        let decoded = reader.decode()?;
        Self::from_dynamic(decoded)
    }

    /// Create an XObject from an in-memory grayscale raster
    pub fn from_gray(image: &GrayImage) -> Result<Self> {
        Ok(Self {
            width: image.width(),
            height: image.height(),
            color_space: "DeviceGray",
            data: compress(image.as_raw())?,
        })
    }

    fn from_dynamic(decoded: DynamicImage) -> Result<Self> {
        let (width, height) = (decoded.width(), decoded.height());

        let (raw, color_space) = match &decoded {
            // Pure grayscale stays grayscale for smaller output
            DynamicImage::ImageLuma8(gray) => (gray.as_raw().clone(), "DeviceGray"),
            // Grayscale with alpha: blend with white, output grayscale
            DynamicImage::ImageLumaA8(la) => {
                let mut gray = Vec::with_capacity((width * height) as usize);
                for pixel in la.pixels() {
                    let alpha = pixel[1] as f32 / 255.0;
                    gray.push((pixel[0] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
                }
                (gray, "DeviceGray")
            }
            // RGBA: blend with white, output RGB
            DynamicImage::ImageRgba8(_) | DynamicImage::ImageRgba16(_) => {
                let rgba = decoded.to_rgba8();
                let mut rgb = Vec::with_capacity((width * height * 3) as usize);
                for pixel in rgba.pixels() {
                    let alpha = pixel[3] as f32 / 255.0;
                    for channel in 0..3 {
                        rgb.push((pixel[channel] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
                    }
                }
                (rgb, "DeviceRGB")
            }
            // Everything else converts to plain RGB
            _ => (decoded.to_rgb8().into_raw(), "DeviceRGB"),
        };

        Ok(Self {
            width,
            height,
            color_space,
            data: compress(&raw)?,
        })
    }

    /// Convert to a lopdf Stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set(
            "ColorSpace",
            Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", Object::Integer(8));
        dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

        Stream::new(dict, self.data.clone())
    }
}

/// Zlib-compress raw pixel data for FlateDecode
fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Generate operators to draw an image at position
///
/// # Arguments
/// * `image_name` - Image resource name (e.g., "Im1")
/// * `x` - X coordinate in points
/// * `y` - Y coordinate in points (from bottom, PDF coordinates)
/// * `width` - Image width in points
/// * `height` - Image height in points
pub fn generate_image_operators(
    image_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    // q                       - Save graphics state
    // width 0 0 height x y cm - Concatenate transformation matrix
    // /Im1 Do                 - Draw image
    // Q                       - Restore graphics state
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{image_name} Do\nQ\n").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_from_gray() {
        let raster = GrayImage::from_pixel(8, 4, Luma([0u8]));
        let xobject = ImageXObject::from_gray(&raster).unwrap();

        assert_eq!(xobject.width, 8);
        assert_eq!(xobject.height, 4);
        assert_eq!(xobject.color_space, "DeviceGray");
        assert!(!xobject.data.is_empty());
    }

    #[test]
    fn test_from_bytes_png_rgb() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            10,
            5,
            image::Rgb([255, 255, 255]),
        ));
        let xobject = ImageXObject::from_bytes(&png_bytes(&image)).unwrap();

        assert_eq!(xobject.width, 10);
        assert_eq!(xobject.height, 5);
        assert_eq!(xobject.color_space, "DeviceRGB");
    }

    #[test]
    fn test_from_bytes_png_rgba_blends_alpha() {
        // Fully transparent pixels should come out white
        let image = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([0, 0, 0, 0]),
        ));
        let xobject = ImageXObject::from_bytes(&png_bytes(&image)).unwrap();
        assert_eq!(xobject.color_space, "DeviceRGB");

        let mut decoder = flate2::read::ZlibDecoder::new(&xobject.data[..]);
        let mut raw = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut raw).unwrap();
        assert!(raw.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(ImageXObject::from_bytes(&[0x00, 0x01, 0x02, 0x03]).is_err());
    }

    #[test]
    fn test_to_pdf_stream() {
        let raster = GrayImage::from_pixel(4, 4, Luma([128u8]));
        let stream = ImageXObject::from_gray(&raster).unwrap().to_pdf_stream();
        let dict = &stream.dict;

        assert_eq!(dict.get(b"Type").unwrap().as_name().unwrap(), b"XObject");
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Image");
        assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 4);
        assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 4);
        assert_eq!(
            dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
            b"DeviceGray"
        );
        assert_eq!(
            dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"FlateDecode"
        );
    }

    #[test]
    fn test_generate_image_operators() {
        let ops = generate_image_operators("Im1", 1896.0, 1750.0, 350.0, 350.0);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("q"));
        assert!(ops_str.contains("350 0 0 350 1896 1750 cm"));
        assert!(ops_str.contains("/Im1 Do"));
        assert!(ops_str.contains("Q"));
    }
}
