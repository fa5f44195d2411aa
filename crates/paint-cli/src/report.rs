//! Display-ready views of mixes and recipes.

use anyhow::{Result, bail};
use paint_mix::{apportion_volumes, mix_working, percentages, proportions_label};
use paint_model::{Rgb, SavedRecipe, WorkingMix};

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRow {
    pub name: String,
    pub rgb: Rgb,
    pub weight: f64,
    /// Percent of the total weight; `None` when the total is zero.
    pub share: Option<f64>,
    /// Volume share when a batch volume was requested and computable.
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixReport {
    pub result: Rgb,
    pub proportions: String,
    pub rows: Vec<ComponentRow>,
    /// Requested batch volume (ml).
    pub volume: Option<f64>,
}

impl MixReport {
    pub fn new(mix: &WorkingMix, volume: Option<f64>) -> Self {
        let shares = percentages(mix);
        let portions = volume
            .map(|total| apportion_volumes(mix, total))
            .unwrap_or_default();
        let rows = mix
            .iter()
            .enumerate()
            .map(|(index, component)| ComponentRow {
                name: component.name.clone(),
                rgb: component.rgb,
                weight: component.weight,
                share: shares.get(index).copied(),
                volume: portions.get(index).map(|portion| portion.volume),
            })
            .collect();
        Self {
            result: mix_working(mix),
            proportions: proportions_label(mix),
            rows,
            volume,
        }
    }

    /// `#rrggbb  rgb(r, g, b)`.
    pub fn headline(&self) -> String {
        format!("{}  {}", self.result.to_hex(), self.result.css())
    }

    /// True when a volume was requested but could not be split.
    pub fn volume_not_computable(&self) -> bool {
        self.volume.is_some() && self.rows.iter().all(|row| row.volume.is_none())
    }
}

/// First eight characters of a recipe id.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Recipe timestamp as UTC `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Find a recipe by full id or unique id prefix.
pub fn find_recipe<'a, I>(recipes: I, query: &str) -> Result<&'a SavedRecipe>
where
    I: IntoIterator<Item = &'a SavedRecipe>,
{
    let query = query.trim();
    if query.is_empty() {
        bail!("recipe id must not be empty");
    }
    let mut matches: Vec<&SavedRecipe> = Vec::new();
    for recipe in recipes {
        if recipe.id == query {
            return Ok(recipe);
        }
        if recipe.id.starts_with(query) && !matches.iter().any(|m| m.id == recipe.id) {
            matches.push(recipe);
        }
    }
    match matches.as_slice() {
        [] => bail!("no saved recipe matches {query:?}"),
        [recipe] => Ok(*recipe),
        _ => bail!(
            "{query:?} matches {} recipes; use more of the id",
            matches.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_truncates() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn timestamp_formats_in_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00");
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13");
    }
}
