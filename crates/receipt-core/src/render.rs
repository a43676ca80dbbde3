//! Receipt composition over the template artwork

use crate::fields::DisplayFields;
use crate::template::{FieldPos, TemplateSpec};
use crate::{barcode, qr};
use crate::{ReceiptError, ReceiptRequest, Result};
use pdf_canvas::{Color, PageCanvas};
use std::path::PathBuf;
use tracing::debug;

/// Rendering configuration resolved by the caller
///
/// Configuration is passed in explicitly; the renderer never reads
/// environment state.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Base URL of the verification endpoint embedded in the QR code
    pub base_url: String,
    /// Location of the background artwork
    pub template_path: PathBuf,
}

/// Draws one receipt per call; holds no per-invocation state
pub struct Renderer {
    spec: TemplateSpec,
    config: RendererConfig,
}

impl Renderer {
    pub fn new(spec: TemplateSpec, config: RendererConfig) -> Self {
        Self { spec, config }
    }

    /// Layout this renderer draws
    pub fn spec(&self) -> &TemplateSpec {
        &self.spec
    }

    /// Render a receipt for the given request
    ///
    /// Resolves display fields (stamping today's date as "generated on")
    /// and composes the document. Fails before any drawing when the
    /// template artwork is missing.
    pub fn render(&self, request: &ReceiptRequest) -> Result<Vec<u8>> {
        let fields = DisplayFields::resolve(&request.order_data, &request.user_data);
        self.render_fields(&fields)
    }

    /// Render a receipt from already-resolved display fields
    pub fn render_fields(&self, fields: &DisplayFields) -> Result<Vec<u8>> {
        if !self.config.template_path.is_file() {
            return Err(ReceiptError::MissingTemplate(
                self.config.template_path.clone(),
            ));
        }
        let background = std::fs::read(&self.config.template_path)?;

        let spec = &self.spec;
        let mut canvas = PageCanvas::new(spec.width, spec.height);

        debug!(template = spec.name, "drawing background");
        canvas.draw_image(&background, 0.0, 0.0, spec.width, spec.height)?;

        canvas.set_font_size(spec.font_size);
        canvas.set_fill_color(Color::black());

        let layout = &spec.fields;
        draw(&mut canvas, layout.name, &fields.name);
        draw(&mut canvas, layout.email, &fields.email);
        draw(&mut canvas, layout.phone, &fields.phone);
        draw_opt(&mut canvas, layout.college, &fields.college);
        draw_opt(&mut canvas, layout.pid, &fields.pid);
        draw(&mut canvas, layout.payment_type, &fields.payment_type);
        draw_opt(&mut canvas, layout.payment_date, &fields.payment_date);
        draw(&mut canvas, layout.order_id, &fields.order_id);
        draw(&mut canvas, layout.payment_id, &fields.payment_id);
        draw(&mut canvas, layout.payment_method, &fields.payment_method);
        draw_opt(&mut canvas, layout.generated_on, &fields.generated_on);
        draw(&mut canvas, layout.amount, &fields.amount_line);
        draw(&mut canvas, layout.amount_words, &fields.amount_words);

        let link = qr::verification_url(&self.config.base_url, &fields.order_id, &fields.payment_id);
        debug!(%link, "encoding verification QR");
        let qr_image = qr::encode(&link)?;
        canvas.draw_gray_image(&qr_image, spec.qr.x, spec.qr.y, spec.qr.size, spec.qr.size)?;

        if let Some(placement) = spec.barcode {
            if fields.has_pid() {
                debug!(pid = %fields.pid, "encoding participant barcode");
                let bars = barcode::encode(&fields.pid)?;
                let width = barcode::point_width(&bars);
                canvas.draw_gray_image(&bars, placement.x, placement.y, width, placement.bar_height)?;
            }
        }

        Ok(canvas.to_bytes()?)
    }
}

fn draw(canvas: &mut PageCanvas, pos: FieldPos, text: &str) {
    canvas.draw_text(text, pos.x, pos.y);
}

fn draw_opt(canvas: &mut PageCanvas, pos: Option<FieldPos>, text: &str) {
    if let Some(pos) = pos {
        canvas.draw_text(text, pos.x, pos.y);
    }
}
