//! Pen-color validation for host-supplied values.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use easel::consts::FALLBACK_PEN_COLOR;

/// Validate the host-assigned pen color, falling back to a neutral default.
///
/// Accepts `#rgb` and `#rrggbb`; anything else (including a missing page
/// variable) yields [`FALLBACK_PEN_COLOR`].
#[must_use]
pub fn pen_color(value: Option<String>) -> String {
    match value {
        Some(v) if is_hex_color(v.trim()) => v.trim().to_ascii_lowercase(),
        _ => FALLBACK_PEN_COLOR.to_owned(),
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
