//! Weighted linear mixing.

use paint_model::{Rgb, WorkingMix};
use tracing::{debug, warn};

/// Snapping grid applied before the final rounding.
const SNAP_SCALE: f64 = 1e9;

/// Weighted per-channel average of `(channels, weight)` pairs.
///
/// Returns white for an empty input or a total weight of exactly zero.
/// Negative and non-finite weights count as zero. Each channel is
/// `Σ weight · channel / total`, rounded half away from zero. The result
/// does not depend on component order or on a uniform positive scaling of
/// the weights.
pub fn compute_mix<I>(components: I) -> Rgb
where
    I: IntoIterator<Item = (Rgb, f64)>,
{
    let mut components: Vec<(Rgb, f64)> = components
        .into_iter()
        .map(|(rgb, weight)| (rgb, usable_weight(weight)))
        .collect();
    // Summed in a canonical order so float addition sees the same sequence
    // whatever order the caller used.
    components.sort_by(|(a_rgb, a_weight), (b_rgb, b_weight)| {
        a_weight
            .total_cmp(b_weight)
            .then_with(|| a_rgb.channels().cmp(&b_rgb.channels()))
    });
    let total: f64 = components.iter().map(|(_, weight)| weight).sum();
    if components.is_empty() || total == 0.0 {
        return Rgb::WHITE;
    }

    let (mut r, mut g, mut b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (rgb, weight) in &components {
        r += f64::from(rgb.r) * weight;
        g += f64::from(rgb.g) * weight;
        b += f64::from(rgb.b) * weight;
    }

    let result = Rgb::new(
        to_channel(r / total),
        to_channel(g / total),
        to_channel(b / total),
    );
    debug!(
        components = components.len(),
        total_weight = total,
        result = %result,
        "computed mix"
    );
    result
}

/// Result color of a working mix.
pub fn mix_working(mix: &WorkingMix) -> Rgb {
    compute_mix(mix.weighted_channels())
}

fn usable_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        warn!(weight, "ignoring invalid mix weight");
        0.0
    }
}

/// Values within float noise of a half step land on it before rounding.
fn to_channel(value: f64) -> u8 {
    let snapped = (value * SNAP_SCALE).round() / SNAP_SCALE;
    snapped.round().clamp(0.0, 255.0) as u8
}
