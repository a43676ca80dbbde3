//! Text operator generation for the built-in Helvetica font

use crate::document::Color;

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text color (RGB)
    pub color: Color,
}

/// Encode text as a PDF literal string using WinAnsi (Latin-1) bytes
///
/// Backslashes and parentheses are escaped; bytes outside the printable
/// ASCII range are written as octal escapes. Characters that have no
/// Latin-1 representation are replaced with `?`.
pub fn encode_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');

    for c in text.chars() {
        let byte = if (c as u32) <= 0xFF { c as u32 as u8 } else { b'?' };
        match byte {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }

    out.push(')');
    out
}

/// Generate PDF operators for text insertion
///
/// Creates the PDF text operators (BT, rg, Tf, Td, Tj, ET) to render an
/// already-encoded literal string at a specific position.
///
/// # Arguments
/// * `literal` - Encoded literal string (e.g., `(Hello)`)
/// * `x` - X coordinate in points (from left)
/// * `y` - Y coordinate in points (from bottom, PDF coordinates)
/// * `ctx` - Text rendering context
pub fn generate_text_operators(literal: &str, x: f64, y: f64, ctx: &TextRenderContext) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("BT\n");

    // Set fill color (rg operator for non-stroking color)
    ops.push_str(&format!(
        "{} {} {} rg\n",
        ctx.color.r, ctx.color.g, ctx.color.b
    ));

    // Set font and size: /F1 36 Tf
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, ctx.font_size));

    // Move to position: x y Td
    ops.push_str(&format!("{x} {y} Td\n"));

    // Show text: (literal) Tj
    ops.push_str(&format!("{literal} Tj\n"));

    ops.push_str("ET\n");

    ops.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_literal_plain() {
        assert_eq!(encode_literal("Hello"), "(Hello)");
    }

    #[test]
    fn test_encode_literal_escapes() {
        assert_eq!(encode_literal("a(b)c"), "(a\\(b\\)c)");
        assert_eq!(encode_literal("back\\slash"), "(back\\\\slash)");
    }

    #[test]
    fn test_encode_literal_latin1() {
        // é is 0xE9 in Latin-1, emitted as an octal escape
        assert_eq!(encode_literal("é"), "(\\351)");
    }

    #[test]
    fn test_encode_literal_non_latin1_replaced() {
        assert_eq!(encode_literal("नमस्ते"), "(??????)");
    }

    #[test]
    fn test_generate_text_operators() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 36.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("(Receipt)", 620.0, 2279.0, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("BT"));
        assert!(ops_str.contains("0 0 0 rg"));
        assert!(ops_str.contains("/F1 36 Tf"));
        assert!(ops_str.contains("620 2279 Td"));
        assert!(ops_str.contains("(Receipt) Tj"));
        assert!(ops_str.contains("ET"));
    }

    #[test]
    fn test_generate_text_operators_fractional_position() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 12.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("(x)", 10.5, 20.25, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("10.5 20.25 Td"));
    }

    #[test]
    fn test_generate_text_operators_with_color() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 12.0,
            color: Color::rgb(1.0, 0.0, 0.0),
        };

        let ops = generate_text_operators("(x)", 0.0, 0.0, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 0 0 rg"));
    }
}
