//! Number formatting shared by the stylesheet and the preview.
//!
//! Values are emitted in their shortest round-trip decimal form with no
//! rounding: `5.0` becomes `5`, `1.5` stays `1.5`, `-0.03` stays `-0.03`.

/// Format a number the way it appears in a CSS value.
pub fn number(value: f64) -> String {
    if value == 0.0 {
        // Also catches `-0.0`, which would otherwise print as `-0`.
        return "0".to_string();
    }
    value.to_string()
}

/// `<number>rem`
pub fn rem(value: f64) -> String {
    format!("{}rem", number(value))
}

/// `<number>em`
pub fn em(value: f64) -> String {
    format!("{}em", number(value))
}
