//! Named reference paints and the built-in catalog.

use std::fmt;

use crate::rgb::Rgb;

/// A named paint with fixed channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub name: &'static str,
    pub rgb: Rgb,
}

impl Swatch {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: Rgb::new(r, g, b),
        }
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rgb)
    }
}

pub const WHITE: Swatch = Swatch::new("White", 255, 255, 255);
pub const BLACK: Swatch = Swatch::new("Black", 0, 0, 0);
pub const RED: Swatch = Swatch::new("Red", 220, 38, 38);
pub const YELLOW: Swatch = Swatch::new("Yellow", 250, 204, 21);
pub const BLUE: Swatch = Swatch::new("Blue", 37, 99, 235);
pub const GREEN: Swatch = Swatch::new("Green", 34, 197, 94);
pub const ORANGE: Swatch = Swatch::new("Orange", 249, 115, 22);
pub const PURPLE: Swatch = Swatch::new("Purple", 168, 85, 247);
pub const PINK: Swatch = Swatch::new("Pink", 236, 72, 153);
pub const BROWN: Swatch = Swatch::new("Brown", 120, 53, 15);
pub const GRAY: Swatch = Swatch::new("Gray", 156, 163, 175);

/// Base acrylic paints, in palette order.
///
/// Order matters: closest-swatch ties resolve to the earlier entry.
pub const BASIC_SWATCHES: [Swatch; 11] = [
    WHITE, BLACK, RED, YELLOW, BLUE, GREEN, ORANGE, PURPLE, PINK, BROWN, GRAY,
];

/// Case-insensitive lookup in [`BASIC_SWATCHES`].
pub fn swatch_by_name(name: &str) -> Option<&'static Swatch> {
    let name = name.trim();
    BASIC_SWATCHES
        .iter()
        .find(|swatch| swatch.name.eq_ignore_ascii_case(name))
}
