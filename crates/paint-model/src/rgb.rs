//! Channel-triple color representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const MID_GRAY: Rgb = Rgb::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color with an optional leading `#`.
    ///
    /// Digits are case-insensitive. Shorthand (`#fff`) and alpha forms are
    /// rejected.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        let mut out = [0u8; 3];
        hex::decode_to_slice(digits, &mut out)
            .map_err(|_| ColorParseError::InvalidHex(value.to_string()))?;
        Ok(Self::new(out[0], out[1], out[2]))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }

    /// CSS functional notation, `rgb(r, g, b)`.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Mean of the three channels.
    pub fn brightness(self) -> f64 {
        (f64::from(self.r) + f64::from(self.g) + f64::from(self.b)) / 3.0
    }

    /// Spread between the strongest and weakest channel.
    pub fn saturation(self) -> u8 {
        let channels = self.channels();
        let max = channels.iter().copied().max().unwrap_or(0);
        let min = channels.iter().copied().min().unwrap_or(0);
        max - min
    }

    /// Euclidean distance in RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Text color readable on top of this color.
    pub fn contrast_text(self) -> Rgb {
        if self.brightness() > 128.0 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
