//! Persisted recipe snapshots.
//!
//! The JSON shape is shared with previously stored data:
//!
//! ```json
//! {
//!   "id": "…",
//!   "name": "Dusty rose",
//!   "colors": [{ "id": "…", "name": "Red", "hex": "#dc2626", "amount": 1.0 }],
//!   "result": "#ee9393",
//!   "timestamp": 1760000000000
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::mix::{MixComponent, WorkingMix};
use crate::rgb::Rgb;

/// One stored ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeColor {
    pub id: String,
    pub name: String,
    pub hex: String,
    pub amount: f64,
}

/// A named, timestamped snapshot of a working mix and its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub id: String,
    pub name: String,
    #[serde(alias = "components")]
    pub colors: Vec<RecipeColor>,
    pub result: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl SavedRecipe {
    pub fn new(name: impl Into<String>, mix: &WorkingMix, result: Rgb, timestamp: i64) -> Self {
        let colors = mix
            .iter()
            .map(|component| RecipeColor {
                id: component.id.clone(),
                name: component.name.clone(),
                hex: component.rgb.to_hex(),
                amount: component.weight,
            })
            .collect();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            colors,
            result: result.to_hex(),
            timestamp,
        }
    }

    /// Rebuild a working mix. Unreadable stored colors degrade to black.
    pub fn to_working_mix(&self) -> WorkingMix {
        self.colors
            .iter()
            .map(|color| MixComponent {
                id: color.id.clone(),
                name: color.name.clone(),
                rgb: Rgb::from_hex(&color.hex).unwrap_or(Rgb::BLACK),
                weight: color.amount,
            })
            .collect()
    }

    /// Stored result color, black if unreadable.
    pub fn result_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.result).unwrap_or(Rgb::BLACK)
    }
}
