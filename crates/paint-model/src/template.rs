//! Built-in recipe templates.

use crate::error::{ModelError, Result};
use crate::mix::{MixComponent, WorkingMix};
use crate::swatch::swatch_by_name;

/// A read-only starting recipe: swatch names with parallel percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeTemplate {
    pub name: &'static str,
    pub swatches: &'static [&'static str],
    pub percentages: &'static [u32],
}

impl RecipeTemplate {
    /// Build a working mix whose weights are the template percentages.
    pub fn instantiate(&self) -> Result<WorkingMix> {
        if self.swatches.len() != self.percentages.len() {
            return Err(ModelError::TemplateMismatch {
                name: self.name.to_string(),
                swatches: self.swatches.len(),
                percentages: self.percentages.len(),
            });
        }
        self.swatches
            .iter()
            .zip(self.percentages)
            .map(|(name, percent)| {
                swatch_by_name(name)
                    .map(|swatch| MixComponent::from_swatch(swatch, f64::from(*percent)))
                    .ok_or_else(|| ModelError::UnknownSwatch((*name).to_string()))
            })
            .collect::<Result<Vec<_>>>()
            .map(WorkingMix::from_components)
    }
}

pub const RECIPE_TEMPLATES: [RecipeTemplate; 8] = [
    RecipeTemplate {
        name: "Sky Blue",
        swatches: &["White", "Blue"],
        percentages: &[80, 20],
    },
    RecipeTemplate {
        name: "Olive",
        swatches: &["Yellow", "Green", "Black"],
        percentages: &[50, 30, 20],
    },
    RecipeTemplate {
        name: "Peach",
        swatches: &["White", "Orange", "Pink"],
        percentages: &[60, 30, 10],
    },
    RecipeTemplate {
        name: "Lavender",
        swatches: &["White", "Purple"],
        percentages: &[70, 30],
    },
    RecipeTemplate {
        name: "Terracotta",
        swatches: &["Orange", "Brown", "Red"],
        percentages: &[50, 35, 15],
    },
    RecipeTemplate {
        name: "Mint",
        swatches: &["White", "Green"],
        percentages: &[65, 35],
    },
    RecipeTemplate {
        name: "Slate",
        swatches: &["Gray", "Blue", "Black"],
        percentages: &[60, 25, 15],
    },
    RecipeTemplate {
        name: "Beige",
        swatches: &["White", "Yellow", "Brown"],
        percentages: &[70, 15, 15],
    },
];

/// Case-insensitive lookup in [`RECIPE_TEMPLATES`].
pub fn template_by_name(name: &str) -> Option<&'static RecipeTemplate> {
    let name = name.trim();
    RECIPE_TEMPLATES
        .iter()
        .find(|template| template.name.eq_ignore_ascii_case(name))
}
