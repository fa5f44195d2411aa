//! The working mix: an ordered list of weighted paint components.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::rgb::Rgb;
use crate::swatch::Swatch;

/// How component weights are interpreted when a component is added or
/// adjusted.
///
/// Both modes feed the same normalization: the mix result only depends on
/// the ratios between weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightMode {
    /// Free-scale amount, adjusted between 0.5 and 10 in steps of 0.5.
    #[default]
    Amount,
    /// Percentage-style value in [0, 100]. The first component starts at
    /// 100, later ones at 0.
    Percent,
}

impl WeightMode {
    /// Weight given to a component added at `position` (0-based).
    pub fn initial_weight(self, position: usize) -> f64 {
        match self {
            WeightMode::Amount => 1.0,
            WeightMode::Percent if position == 0 => 100.0,
            WeightMode::Percent => 0.0,
        }
    }

    /// Inclusive slider bounds.
    pub fn range(self) -> (f64, f64) {
        match self {
            WeightMode::Amount => (0.5, 10.0),
            WeightMode::Percent => (0.0, 100.0),
        }
    }

    pub fn step(self) -> f64 {
        match self {
            WeightMode::Amount => 0.5,
            WeightMode::Percent => 1.0,
        }
    }

    /// Snap a raw value onto the slider: nearest step, then bounds.
    pub fn clamp(self, weight: f64) -> f64 {
        let (min, max) = self.range();
        if !weight.is_finite() {
            return min;
        }
        let step = self.step();
        ((weight / step).round() * step).clamp(min, max)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightMode::Amount => "amount",
            WeightMode::Percent => "percent",
        }
    }
}

/// One ingredient of a working mix.
///
/// Channels are embedded rather than referenced so that snapshots stay
/// valid if the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixComponent {
    pub id: String,
    pub name: String,
    pub rgb: Rgb,
    pub weight: f64,
}

impl MixComponent {
    pub fn new(name: impl Into<String>, rgb: Rgb, weight: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            rgb,
            weight,
        }
    }

    pub fn from_swatch(swatch: &Swatch, weight: f64) -> Self {
        Self::new(swatch.name, swatch.rgb, weight)
    }
}

/// Ordered, mutable list of mix components. Duplicates are allowed: adding
/// the same swatch twice yields two independent components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingMix {
    components: Vec<MixComponent>,
}

impl WorkingMix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weights are taken as given; mixing counts invalid ones as zero.
    pub fn from_components(components: Vec<MixComponent>) -> Self {
        Self { components }
    }

    /// Append a swatch with the mode's initial weight.
    pub fn add(&mut self, swatch: &Swatch, mode: WeightMode) -> &MixComponent {
        let weight = mode.initial_weight(self.components.len());
        self.components.push(MixComponent::from_swatch(swatch, weight));
        &self.components[self.components.len() - 1]
    }

    /// Append a component whose weight is finite and non-negative.
    pub fn push(&mut self, component: MixComponent) -> Result<&MixComponent> {
        check_weight(component.weight)?;
        self.components.push(component);
        Ok(&self.components[self.components.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Result<MixComponent> {
        self.check_index(index)?;
        Ok(self.components.remove(index))
    }

    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        check_weight(weight)?;
        self.check_index(index)?;
        self.components[index].weight = weight;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }

    pub fn total_weight(&self) -> f64 {
        self.components.iter().map(|c| c.weight).sum()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MixComponent> {
        self.components.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MixComponent> {
        self.components.iter()
    }

    pub fn components(&self) -> &[MixComponent] {
        &self.components
    }

    /// `(channels, weight)` pairs in insertion order.
    pub fn weighted_channels(&self) -> impl Iterator<Item = (Rgb, f64)> + '_ {
        self.components.iter().map(|c| (c.rgb, c.weight))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.components.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.components.len(),
            });
        }
        Ok(())
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(ModelError::InvalidWeight(weight));
    }
    Ok(())
}

impl<'a> IntoIterator for &'a WorkingMix {
    type Item = &'a MixComponent;
    type IntoIter = std::slice::Iter<'a, MixComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl FromIterator<MixComponent> for WorkingMix {
    fn from_iter<T: IntoIterator<Item = MixComponent>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}
