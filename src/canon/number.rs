//! Number formatting following ECMAScript `Number::toString`
//!
//! `ryu-js` produces the shortest round-trip digits with ECMAScript's tie
//! breaking and layout, the same formatter `serde_jcs` uses.

/// Format a number the way RFC 8785 requires
///
/// Non-finite values become `null` and negative zero becomes `0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let mut buffer = ryu_js::Buffer::new();
    buffer.format_finite(value).to_string()
}
