//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Conversion between computed floats and display text.
//! CONTEXT: Every operation that turns a number into display text goes
//! through `format_display`, so rounding and trailing-zero handling stay
//! identical across compute, sqrt, percent, reciprocal and memory recall.

use crate::error::EngineError;

/// Number of decimal places kept for non-integer results.
pub const DISPLAY_DECIMALS: usize = 10;

/// Largest magnitude a scaled value can have and still round exactly (2^53).
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Format a computed value for the display.
///
/// The value is rounded to `DISPLAY_DECIMALS` places and rendered in its
/// shortest form, so no binary residue shows up past the digits that matter.
/// Whole numbers render without a decimal point. Non-finite values cannot be
/// shown and map to `EngineError::Generic`.
pub fn format_display(value: f64) -> Result<String, EngineError> {
    if !value.is_finite() {
        return Err(EngineError::Generic);
    }

    let rounded = round_to_display(value);
    let text = if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let shortest = format!("{}", rounded);
        match shortest.split_once('.') {
            Some((_, decimals)) if decimals.len() > DISPLAY_DECIMALS => {
                let fixed = format!("{:.prec$}", rounded, prec = DISPLAY_DECIMALS);
                strip_trailing_zeros(&fixed).to_string()
            }
            _ => shortest,
        }
    };

    // Negative values that round to nothing would otherwise show as "-0"
    if text == "-0" {
        Ok("0".to_string())
    } else {
        Ok(text)
    }
}

/// Round to `DISPLAY_DECIMALS` places. Values too large to scale exactly
/// already carry fewer decimals than that and are returned unchanged.
fn round_to_display(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS as i32);
    let scaled = value * scale;
    if scaled.is_finite() && scaled.abs() < EXACT_INTEGER_LIMIT {
        scaled.round() / scale
    } else {
        value
    }
}

/// Parse display text back into a number.
/// Sentinels and anything that is not a finite literal are `EngineError::Generic`.
pub fn parse_display(text: &str) -> Result<f64, EngineError> {
    let value: f64 = text.trim().parse().map_err(|_| EngineError::Generic)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::Generic)
    }
}

/// Strip trailing zeros and then a dangling decimal point.
/// Only meaningful on text that contains a decimal point.
fn strip_trailing_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// Keep only the characters that can appear in a pasted numeric literal.
pub fn sanitize_pasted(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect()
}
