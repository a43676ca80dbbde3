//! Per-variant receipt layouts calibrated against the template artwork
//!
//! Every coordinate below was measured against a specific background image
//! and must not be "improved": text that outgrows its slot simply overlaps
//! neighbouring artwork. Positions use PDF coordinates (origin bottom-left),
//! with vertical offsets written as `height - offset_from_top` the way the
//! artwork was calibrated.

use std::str::FromStr;

/// An absolute text anchor on the page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPos {
    pub x: f64,
    /// Baseline height from the page bottom
    pub y: f64,
}

/// QR code placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrPlacement {
    pub x: f64,
    pub y: f64,
    /// Drawn edge length in points
    pub size: f64,
}

/// Code 128 barcode placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarcodePlacement {
    pub x: f64,
    pub y: f64,
    /// Drawn bar height in points
    pub bar_height: f64,
}

/// One anchor per drawn text field
///
/// Optional anchors are fields only some variants print; the renderer
/// skips a field whose anchor is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub name: FieldPos,
    pub email: FieldPos,
    pub phone: FieldPos,
    pub college: Option<FieldPos>,
    pub pid: Option<FieldPos>,
    pub payment_type: FieldPos,
    pub payment_date: Option<FieldPos>,
    pub order_id: FieldPos,
    pub payment_id: FieldPos,
    pub payment_method: FieldPos,
    pub generated_on: Option<FieldPos>,
    pub amount: FieldPos,
    pub amount_words: FieldPos,
}

/// Static layout of one receipt variant
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSpec {
    pub name: &'static str,
    /// Page width in points, equal to the artwork pixel width
    pub width: f64,
    /// Page height in points, equal to the artwork pixel height
    pub height: f64,
    pub font_size: f32,
    pub fields: FieldLayout,
    pub qr: QrPlacement,
    pub barcode: Option<BarcodePlacement>,
}

/// The two shipped template variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVariant {
    /// Landscape receipt without participant fields
    Classic,
    /// Portrait receipt with college, dates, pid and barcode
    Pass,
}

impl TemplateVariant {
    /// Layout for this variant
    pub fn spec(self) -> TemplateSpec {
        match self {
            TemplateVariant::Classic => classic(),
            TemplateVariant::Pass => pass(),
        }
    }

    /// Conventional location of this variant's background artwork
    pub fn default_background(self) -> &'static str {
        match self {
            TemplateVariant::Classic => "assets/receipt_template.png",
            TemplateVariant::Pass => "assets/Receipt-Template.png",
        }
    }
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(TemplateVariant::Classic),
            "pass" => Ok(TemplateVariant::Pass),
            other => Err(format!("unknown template variant: {other}")),
        }
    }
}

fn classic() -> TemplateSpec {
    const WIDTH: f64 = 3720.0;
    const HEIGHT: f64 = 2631.0;

    // Section 1: user details (name, email, phone)
    let user_x = 880.0;
    let user_top = HEIGHT - 635.0;
    let user_step = 128.0;

    // Section 2: payment details (type, order id, payment id, method)
    let payment_x = 880.0;
    let payment_top = HEIGHT - 1125.0;
    let payment_step = 132.0;

    // Section 3: amount details
    let amount_x = 880.0;
    let amount_top = HEIGHT - 1770.0;
    let amount_step = 180.0;

    TemplateSpec {
        name: "classic",
        width: WIDTH,
        height: HEIGHT,
        font_size: 56.0,
        fields: FieldLayout {
            name: FieldPos { x: user_x, y: user_top },
            email: FieldPos { x: user_x, y: user_top - user_step },
            phone: FieldPos { x: user_x, y: user_top - user_step * 2.0 },
            college: None,
            pid: None,
            payment_type: FieldPos { x: payment_x, y: payment_top },
            payment_date: None,
            order_id: FieldPos { x: payment_x, y: payment_top - payment_step },
            payment_id: FieldPos { x: payment_x, y: payment_top - payment_step * 2.0 },
            payment_method: FieldPos { x: payment_x, y: payment_top - payment_step * 3.0 },
            generated_on: None,
            amount: FieldPos { x: amount_x, y: amount_top },
            amount_words: FieldPos { x: amount_x, y: amount_top - amount_step - 10.0 },
        },
        qr: QrPlacement { x: 2855.0, y: 1315.0, size: 500.0 },
        barcode: None,
    }
}

fn pass() -> TemplateSpec {
    const WIDTH: f64 = 2480.0;
    const HEIGHT: f64 = 3100.0;

    // Section 1: user details (name, email, phone, college)
    let user_x = 620.0;
    let user_top = HEIGHT - 821.0;
    let user_step = 89.0;

    // Section 2: payment details (type, date, order id, payment id, method)
    let payment_x = 620.0;
    let payment_top = HEIGHT - 1323.0;
    let payment_step = 88.0;

    // Section 3: amount details
    let amount_x = 620.0;
    let amount_top = HEIGHT - 1900.0;
    let amount_step = 169.0;

    TemplateSpec {
        name: "pass",
        width: WIDTH,
        height: HEIGHT,
        font_size: 36.0,
        fields: FieldLayout {
            name: FieldPos { x: user_x, y: user_top },
            email: FieldPos { x: user_x, y: user_top - user_step },
            phone: FieldPos { x: user_x, y: user_top - user_step * 2.0 },
            college: Some(FieldPos { x: user_x, y: user_top - user_step * 3.0 }),
            pid: Some(FieldPos { x: 300.0, y: HEIGHT - 2966.0 }),
            payment_type: FieldPos { x: payment_x, y: payment_top },
            payment_date: Some(FieldPos { x: payment_x, y: payment_top - payment_step }),
            order_id: FieldPos { x: payment_x, y: payment_top - payment_step * 2.0 },
            payment_id: FieldPos { x: payment_x, y: payment_top - payment_step * 3.0 },
            payment_method: FieldPos { x: payment_x, y: payment_top - payment_step * 4.0 },
            generated_on: Some(FieldPos { x: 1650.0, y: HEIGHT - 535.0 }),
            amount: FieldPos { x: amount_x, y: amount_top },
            amount_words: FieldPos { x: amount_x, y: amount_top - amount_step - 10.0 },
        },
        qr: QrPlacement { x: 1896.0, y: 1750.0, size: 350.0 },
        barcode: Some(BarcodePlacement { x: 1850.0, y: 98.0, bar_height: 80.0 }),
    }
}
