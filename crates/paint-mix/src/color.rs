//! Hex string ⇄ channel conversion with silent fallback.
//!
//! Malformed color strings never surface as errors here: they degrade to a
//! caller-chosen default. Use [`Rgb::from_hex`] directly when the error
//! matters.

use paint_model::Rgb;
use tracing::warn;

/// Parse `#rrggbb` (case-insensitive, `#` optional), returning `fallback`
/// when the input does not match.
pub fn hex_to_channels(hex: &str, fallback: Rgb) -> Rgb {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb,
        Err(error) => {
            warn!(input = hex, %error, fallback = %fallback, "unreadable color, using fallback");
            fallback
        }
    }
}

/// Target colors typed or picked by the user fall back to mid-gray.
pub fn target_color(hex: &str) -> Rgb {
    hex_to_channels(hex, Rgb::MID_GRAY)
}

pub fn channels_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_call_site_specific() {
        assert_eq!(hex_to_channels("#ffffff", Rgb::BLACK), Rgb::WHITE);
        assert_eq!(hex_to_channels("not-a-color", Rgb::BLACK), Rgb::BLACK);
        assert_eq!(target_color("not-a-color"), Rgb::MID_GRAY);
        assert_eq!(target_color("#12345"), Rgb::MID_GRAY);
    }

    #[test]
    fn formats_extremes() {
        assert_eq!(channels_to_hex(Rgb::BLACK), "#000000");
        assert_eq!(channels_to_hex(Rgb::WHITE), "#ffffff");
    }
}
