//! Command-line mix specifications.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use paint_model::{BASIC_SWATCHES, MixComponent, Swatch, WeightMode, WorkingMix, swatch_by_name};
use tracing::warn;

/// One `NAME[:WEIGHT]` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentSpec {
    pub swatch: &'static Swatch,
    pub weight: Option<f64>,
}

impl FromStr for ComponentSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, weight) = match s.split_once(':') {
            Some((name, weight)) => {
                let weight: f64 = weight
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid weight in {s:?}"))?;
                if !weight.is_finite() || weight < 0.0 {
                    bail!("weight must be a non-negative number in {s:?}");
                }
                (name, Some(weight))
            }
            None => (s, None),
        };
        let swatch = swatch_by_name(name).ok_or_else(|| {
            let known: Vec<&str> = BASIC_SWATCHES.iter().map(|s| s.name).collect();
            anyhow!("unknown paint {:?} (known: {})", name.trim(), known.join(", "))
        })?;
        Ok(Self { swatch, weight })
    }
}

/// Build a working mix the way the slider UI would: components without a
/// weight get the mode's initial weight, explicit weights snap to the
/// slider.
pub fn build_mix(specs: &[ComponentSpec], mode: WeightMode) -> Result<WorkingMix> {
    let mut mix = WorkingMix::new();
    for spec in specs {
        match spec.weight {
            None => {
                mix.add(spec.swatch, mode);
            }
            Some(weight) => {
                let snapped = mode.clamp(weight);
                if snapped != weight {
                    warn!(
                        paint = spec.swatch.name,
                        requested = weight,
                        used = snapped,
                        mode = mode.as_str(),
                        "weight adjusted to slider range"
                    );
                }
                mix.push(MixComponent::from_swatch(spec.swatch, snapped))
                    .with_context(|| format!("add {}", spec.swatch.name))?;
            }
        }
    }
    Ok(mix)
}

/// Parse every argument, stopping at the first bad one.
pub fn parse_specs(args: &[String]) -> Result<Vec<ComponentSpec>> {
    args.iter().map(|arg| arg.parse()).collect()
}
