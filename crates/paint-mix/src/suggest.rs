//! Rule-based starting mix for a target color.
//!
//! This is a fixed decision tree, not an optimizer. The thresholds are part
//! of the observable behavior and must not drift.

use std::fmt;

use paint_model::swatch::{BLACK, BLUE, GRAY, GREEN, RED, WHITE, YELLOW};
use paint_model::{BASIC_SWATCHES, MixComponent, Rgb, Swatch, WorkingMix};
use tracing::debug;

use crate::closest::find_closest_swatch;

const LIGHT_BRIGHTNESS: f64 = 230.0;
const DARK_BRIGHTNESS: f64 = 30.0;
const NEUTRAL_SATURATION: u8 = 30;
const NEUTRAL_MIDPOINT: f64 = 128.0;
const SECONDARY_CHANNEL_MIN: u8 = 50;
const TINT_BRIGHTNESS: f64 = 180.0;
const SHADE_BRIGHTNESS: f64 = 100.0;

/// Which branch of the heuristic a target falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRule {
    /// Brightness above 230: mostly white.
    Light,
    /// Brightness below 30: mostly black.
    Dark,
    /// Channel spread below 30: white and black only.
    Neutral,
    /// Everything else: built from the dominant primaries.
    Chromatic,
}

impl SuggestionRule {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionRule::Light => "light",
            SuggestionRule::Dark => "dark",
            SuggestionRule::Neutral => "neutral",
            SuggestionRule::Chromatic => "chromatic",
        }
    }
}

impl fmt::Display for SuggestionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(target: Rgb) -> SuggestionRule {
    let brightness = target.brightness();
    if brightness > LIGHT_BRIGHTNESS {
        SuggestionRule::Light
    } else if brightness < DARK_BRIGHTNESS {
        SuggestionRule::Dark
    } else if target.saturation() < NEUTRAL_SATURATION {
        SuggestionRule::Neutral
    } else {
        SuggestionRule::Chromatic
    }
}

/// Suggest a starting mix (amount weights) for `target`.
pub fn suggest_mix(target: Rgb) -> WorkingMix {
    let rule = classify(target);
    let brightness = target.brightness();
    let mut parts: Vec<(Swatch, f64)> = Vec::new();

    match rule {
        SuggestionRule::Light => base_with_accent(&mut parts, WHITE, target),
        SuggestionRule::Dark => base_with_accent(&mut parts, BLACK, target),
        SuggestionRule::Neutral => {
            parts.push((WHITE, 3.0));
            let black = if brightness < NEUTRAL_MIDPOINT { 2.0 } else { 1.0 };
            parts.push((BLACK, black));
        }
        SuggestionRule::Chromatic => {
            let mut ranked = [(target.r, RED), (target.g, GREEN), (target.b, BLUE)];
            // Stable: equal channels keep red, green, blue order.
            ranked.sort_by(|a, b| b.0.cmp(&a.0));

            parts.push((ranked[0].1, 3.0));
            if ranked[1].0 > SECONDARY_CHANNEL_MIN {
                parts.push((ranked[1].1, 2.0));
            }
            if target.r > 200 && target.g > 150 && target.b < 80 {
                parts.push((YELLOW, 2.0));
            }
            if brightness > TINT_BRIGHTNESS {
                parts.push((WHITE, 2.0));
            } else if brightness < SHADE_BRIGHTNESS {
                parts.push((BLACK, 1.0));
            }
        }
    }

    if parts.is_empty() {
        parts.push((WHITE, 1.0));
        parts.push((GRAY, 1.0));
    }

    debug!(
        target = %target,
        rule = %rule,
        brightness,
        saturation = target.saturation(),
        components = parts.len(),
        "suggested mix"
    );

    parts
        .iter()
        .map(|(swatch, weight)| MixComponent::from_swatch(swatch, *weight))
        .collect()
}

fn base_with_accent(parts: &mut Vec<(Swatch, f64)>, base: Swatch, target: Rgb) {
    parts.push((base, 5.0));
    if let Some(accent) = find_closest_swatch(target, &BASIC_SWATCHES)
        && *accent != base
    {
        parts.push((*accent, 0.5));
    }
}
