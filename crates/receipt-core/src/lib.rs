//! Receipt rendering engine
//!
//! This crate turns an order record and a user record into a single-page
//! PDF payment receipt:
//! - tolerant extraction of display fields from heterogeneous input shapes
//! - amount-in-words conversion using the Indian numbering system
//! - QR encoding of the receipt verification link
//! - Code 128 barcode encoding of the participant identifier
//! - coordinate-calibrated composition over a template artwork
//!
//! # Example
//!
//! ```ignore
//! use receipt_core::{Renderer, RendererConfig, ReceiptRequest, TemplateVariant};
//!
//! let request = ReceiptRequest::from_json(input_json)?;
//! let renderer = Renderer::new(
//!     TemplateVariant::Pass.spec(),
//!     RendererConfig {
//!         base_url: "https://fest.example.org".to_string(),
//!         template_path: "assets/Receipt-Template.png".into(),
//!     },
//! );
//! let pdf_bytes = renderer.render(&request)?;
//! ```

pub mod barcode;
pub mod fields;
pub mod qr;
pub mod render;
pub mod service;
pub mod template;
pub mod words;

pub use fields::{DisplayFields, OrderRecord, PaymentKind, ReceiptRequest, UserRecord, PLACEHOLDER};
pub use render::{Renderer, RendererConfig};
pub use template::{TemplateSpec, TemplateVariant};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a receipt
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Template asset not found: {0}")]
    MissingTemplate(PathBuf),

    #[error("Invalid input document: {0}")]
    InvalidInput(String),

    #[error("QR encoding failed: {0}")]
    QrError(String),

    #[error("Barcode encoding failed: {0}")]
    BarcodeError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_canvas::PdfError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for receipt operations
pub type Result<T> = std::result::Result<T, ReceiptError>;
