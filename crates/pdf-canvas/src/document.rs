//! One-page PDF document builder

use crate::image::{generate_image_operators, ImageXObject};
use crate::text::{encode_literal, generate_text_operators, TextRenderContext};
use crate::Result;
use image::GrayImage;
use lopdf::{Dictionary, Document, Object, Stream};
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Resource name of the single built-in font.
const FONT_RESOURCE: &str = "F1";

/// A single-page PDF canvas with painter-order drawing operations.
///
/// Text is rendered with the built-in Helvetica base font (WinAnsi
/// encoding), so no font files are embedded. Images are buffered as
/// XObjects and flushed into the document when the canvas is serialized.
pub struct PageCanvas {
    /// Page width in points
    width: f64,
    /// Page height in points
    height: f64,
    /// Current font size in points
    font_size: f32,
    /// Current fill color for text
    fill_color: Color,
    /// Buffered content stream operators
    content: Vec<u8>,
    /// Buffered image XObjects; resource name is `Im{index + 1}`
    images: Vec<ImageXObject>,
    /// Whether any text was drawn (controls font resource emission)
    uses_text: bool,
}

impl PageCanvas {
    /// Create a blank canvas with the given page dimensions in points
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            font_size: 12.0,
            fill_color: Color::default(),
            content: Vec::new(),
            images: Vec::new(),
            uses_text: false,
        }
    }

    /// Page width in points
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page height in points
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the font size for subsequent text
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Set the fill color for subsequent text
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Draw text with its baseline starting at (x, y)
    ///
    /// Empty text is skipped. Characters outside the WinAnsi range are
    /// replaced with `?` during encoding.
    pub fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        if text.is_empty() {
            return;
        }

        self.uses_text = true;
        let ctx = TextRenderContext {
            font_name: FONT_RESOURCE.to_string(),
            font_size: self.font_size,
            color: self.fill_color,
        };
        let literal = encode_literal(text);
        let operators = generate_text_operators(&literal, x, y, &ctx);
        self.content.extend_from_slice(&operators);
    }

    /// Draw an encoded image (PNG or JPEG bytes) at (x, y)
    ///
    /// (x, y) is the lower-left corner of the drawn image; the image is
    /// stretched to `width` x `height` points.
    pub fn draw_image(&mut self, data: &[u8], x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        let xobject = ImageXObject::from_bytes(data)?;
        self.push_image(xobject, x, y, width, height);
        Ok(())
    }

    /// Draw an in-memory grayscale raster at (x, y)
    pub fn draw_gray_image(
        &mut self,
        image: &GrayImage,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        let xobject = ImageXObject::from_gray(image)?;
        self.push_image(xobject, x, y, width, height);
        Ok(())
    }

    /// Buffer an image XObject and append its draw operators
    fn push_image(&mut self, xobject: ImageXObject, x: f64, y: f64, width: f64, height: f64) {
        self.images.push(xobject);
        let name = format!("Im{}", self.images.len());
        let operators = generate_image_operators(&name, x, y, width, height);
        self.content.extend_from_slice(&operators);
    }

    /// Serialize the canvas to PDF bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.build_document();
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| crate::PdfError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    /// Serialize the canvas to a PDF file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut doc = self.build_document();
        doc.save(path)
            .map_err(|e| crate::PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Assemble the lopdf document: catalog, page tree, one page,
    /// content stream, and the resources the buffered operators reference.
    fn build_document(&self) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut resources = Dictionary::new();

        if self.uses_text {
            let mut helvetica = Dictionary::new();
            helvetica.set("Type", Object::Name(b"Font".to_vec()));
            helvetica.set("Subtype", Object::Name(b"Type1".to_vec()));
            helvetica.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
            helvetica.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
            let font_id = doc.add_object(helvetica);

            let mut fonts = Dictionary::new();
            fonts.set(FONT_RESOURCE, Object::Reference(font_id));
            resources.set("Font", Object::Dictionary(fonts));
        }

        if !self.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (i, image) in self.images.iter().enumerate() {
                let object_id = doc.add_object(image.to_pdf_stream());
                xobjects.set(format!("Im{}", i + 1), Object::Reference(object_id));
            }
            resources.set("XObject", Object::Dictionary(xobjects));
        }

        let content_id = doc.add_object(Stream::new(Dictionary::new(), self.content.clone()));

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(self.width as f32),
                Object::Real(self.height as f32),
            ]),
        );
        page.set("Contents", Object::Reference(content_id));
        page.set("Resources", Object::Dictionary(resources));
        let page_id = doc.add_object(page);

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
        pages.set("Count", Object::Integer(1));
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        doc
    }
}
