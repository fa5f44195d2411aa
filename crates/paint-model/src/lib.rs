//! Data model for the paint mixer: colors, catalog swatches, working mixes,
//! saved recipes and recipe templates.

pub mod error;
pub mod mix;
pub mod recipe;
pub mod rgb;
pub mod swatch;
pub mod template;

pub use error::{ColorParseError, ModelError, Result};
pub use mix::{MixComponent, WeightMode, WorkingMix};
pub use recipe::{RecipeColor, SavedRecipe};
pub use rgb::Rgb;
pub use swatch::{BASIC_SWATCHES, Swatch, swatch_by_name};
pub use template::{RECIPE_TEMPLATES, RecipeTemplate, template_by_name};
