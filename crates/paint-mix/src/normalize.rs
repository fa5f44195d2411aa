//! Percentage views of a working mix.

use paint_model::WorkingMix;

use crate::volume::round_to;

/// Rescale weights to percentages, each rounded to one decimal. The total
/// is 100 give or take 0.05 per component. A mix with zero total weight is
/// returned unchanged.
pub fn normalize(mix: &WorkingMix) -> WorkingMix {
    let total = mix.total_weight();
    if total == 0.0 {
        return mix.clone();
    }
    mix.iter()
        .map(|component| {
            let mut component = component.clone();
            component.weight = round_to(component.weight / total * 100.0, 1);
            component
        })
        .collect()
}

/// Display percentages in component order; empty when total weight is zero.
pub fn percentages(mix: &WorkingMix) -> Vec<f64> {
    let total = mix.total_weight();
    if total == 0.0 {
        return Vec::new();
    }
    mix.iter()
        .map(|component| round_to(component.weight / total * 100.0, 1))
        .collect()
}

/// Human-readable proportions line, e.g. `White: 1 + Red: 2.5`.
pub fn proportions_label(mix: &WorkingMix) -> String {
    if mix.is_empty() {
        return "none".to_string();
    }
    mix.iter()
        .map(|component| format!("{}: {}", component.name, component.weight))
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_model::swatch::{BLACK, RED, WHITE};
    use paint_model::{MixComponent, WeightMode};

    #[test]
    fn normalize_rescales_to_hundred() {
        let mix = WorkingMix::from_components(vec![
            MixComponent::from_swatch(&WHITE, 1.0),
            MixComponent::from_swatch(&RED, 2.0),
        ]);
        let normalized = normalize(&mix);
        let weights: Vec<f64> = normalized.iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![33.3, 66.7]);
        assert_eq!(normalized.get(0).map(|c| &c.id), mix.get(0).map(|c| &c.id));
    }

    #[test]
    fn rounding_drift_is_bounded_per_component() {
        let mix: WorkingMix = (0..6)
            .map(|_| MixComponent::from_swatch(&WHITE, 1.0))
            .collect();
        let normalized = normalize(&mix);
        assert!(normalized.iter().all(|c| c.weight == 16.7));
        let drift = (normalized.total_weight() - 100.0).abs();
        assert!(drift > 0.1 && drift <= 0.05 * 6.0 + 1e-9, "drift {drift}");
    }

    #[test]
    fn zero_total_is_unchanged() {
        let mut mix = WorkingMix::new();
        mix.add(&RED, WeightMode::Percent);
        mix.set_weight(0, 0.0).expect("set weight");
        mix.add(&BLACK, WeightMode::Percent);
        assert_eq!(normalize(&mix), mix);
        assert!(percentages(&mix).is_empty());
    }

    #[test]
    fn label_uses_shortest_weights() {
        let mix = WorkingMix::from_components(vec![
            MixComponent::from_swatch(&WHITE, 1.0),
            MixComponent::from_swatch(&RED, 2.5),
        ]);
        assert_eq!(proportions_label(&mix), "White: 1 + Red: 2.5");
        assert_eq!(proportions_label(&WorkingMix::new()), "none");
    }
}
