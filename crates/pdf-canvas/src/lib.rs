//! PDF Canvas - single-page PDF composition
//!
//! This crate provides functionality for:
//! - Creating a one-page PDF document with arbitrary point dimensions
//! - Drawing images (PNG, JPEG, raw grayscale rasters) at absolute positions
//! - Drawing text in the built-in Helvetica font at absolute positions
//!
//! Coordinates are PDF-native: the origin is the bottom-left corner of the
//! page and y grows upwards. Callers that calibrate layouts from the top of
//! an artwork express positions as `height - offset_from_top`.
//!
//! # Example
//!
//! ```ignore
//! use pdf_canvas::{Color, PageCanvas};
//!
//! let mut canvas = PageCanvas::new(2480.0, 3100.0);
//! canvas.draw_image(&background_png, 0.0, 0.0, 2480.0, 3100.0)?;
//! canvas.set_font_size(36.0);
//! canvas.set_fill_color(Color::black());
//! canvas.draw_text("Hello, World!", 620.0, 2279.0);
//! canvas.save("output.pdf")?;
//! ```

mod document;
mod image;
mod text;

pub use document::{Color, PageCanvas};
pub use image::ImageXObject;
pub use text::{encode_literal, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;
