//! Splitting a batch volume across mix components.

use paint_model::{Rgb, WorkingMix};
use tracing::debug;

/// Volume share of one component.
#[derive(Debug, Clone, PartialEq)]
pub struct Portion {
    pub name: String,
    pub rgb: Rgb,
    pub volume: f64,
}

/// Split `total_volume` proportionally to component weights, each share
/// rounded to two decimals.
///
/// Returns an empty vec when the split is not computable: zero total weight
/// or a total volume that is not a positive finite number. The rounded
/// shares may miss `total_volume` by a small residue; that is left as is.
pub fn apportion_volumes(mix: &WorkingMix, total_volume: f64) -> Vec<Portion> {
    let total_weight = mix.total_weight();
    if total_weight == 0.0 || !total_volume.is_finite() || total_volume <= 0.0 {
        debug!(total_weight, total_volume, "volume split not computable");
        return Vec::new();
    }
    mix.iter()
        .map(|component| Portion {
            name: component.name.clone(),
            rgb: component.rgb,
            volume: round_to(component.weight / total_weight * total_volume, 2),
        })
        .collect()
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
