//! Recipe history and palette lists.

use paint_model::SavedRecipe;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Store key for the capped, most-recent-first history list.
pub const HISTORY_KEY: &str = "paintHistory";
/// Store key for the uncapped palette list.
pub const PALETTE_KEY: &str = "savedPalettes";
/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 20;

/// Which of the two recipe lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeList {
    History,
    Palette,
}

impl RecipeList {
    pub fn key(self) -> &'static str {
        match self {
            RecipeList::History => HISTORY_KEY,
            RecipeList::Palette => PALETTE_KEY,
        }
    }
}

/// Saved recipes backed by a key-value store.
///
/// Both lists are read once in [`RecipeBook::load`] and rewritten in full
/// after every mutation. The lists are independent: a failed write to one
/// never touches the other. A failed write leaves the in-memory list
/// unchanged.
#[derive(Debug)]
pub struct RecipeBook<S> {
    store: S,
    history: Vec<SavedRecipe>,
    palette: Vec<SavedRecipe>,
}

impl<S: KeyValueStore> RecipeBook<S> {
    /// Load both lists. Absent keys start empty; malformed contents are an
    /// error.
    pub fn load(store: S) -> Result<Self> {
        let history = read_list(&store, HISTORY_KEY)?;
        let palette = read_list(&store, PALETTE_KEY)?;
        tracing::debug!(
            history = history.len(),
            palette = palette.len(),
            "Loaded recipe book"
        );
        Ok(Self {
            store,
            history,
            palette,
        })
    }

    /// Most recent first, at most [`HISTORY_LIMIT`] entries.
    pub fn history(&self) -> &[SavedRecipe] {
        &self.history
    }

    /// Most recent first.
    pub fn palette(&self) -> &[SavedRecipe] {
        &self.palette
    }

    pub fn list(&self, list: RecipeList) -> &[SavedRecipe] {
        match list {
            RecipeList::History => &self.history,
            RecipeList::Palette => &self.palette,
        }
    }

    /// Prepend to history, dropping the oldest entries beyond the cap.
    pub fn record_history(&mut self, recipe: SavedRecipe) -> Result<()> {
        let mut next = Vec::with_capacity(HISTORY_LIMIT);
        next.push(recipe);
        next.extend(self.history.iter().take(HISTORY_LIMIT - 1).cloned());
        self.commit(RecipeList::History, next)
    }

    /// Prepend to the palette.
    pub fn save_to_palette(&mut self, recipe: SavedRecipe) -> Result<()> {
        let mut next = Vec::with_capacity(self.palette.len() + 1);
        next.push(recipe);
        next.extend(self.palette.iter().cloned());
        self.commit(RecipeList::Palette, next)
    }

    /// Remove a palette entry by id. Returns whether anything was removed.
    pub fn remove_from_palette(&mut self, id: &str) -> Result<bool> {
        if !self.palette.iter().any(|recipe| recipe.id == id) {
            return Ok(false);
        }
        let next = self
            .palette
            .iter()
            .filter(|recipe| recipe.id != id)
            .cloned()
            .collect();
        self.commit(RecipeList::Palette, next)?;
        Ok(true)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.commit(RecipeList::History, Vec::new())
    }

    /// Look a recipe up by id, palette first.
    pub fn find(&self, id: &str) -> Option<&SavedRecipe> {
        self.palette
            .iter()
            .chain(self.history.iter())
            .find(|recipe| recipe.id == id)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, list: RecipeList, next: Vec<SavedRecipe>) -> Result<()> {
        let json = serde_json::to_string(&next)
            .map_err(|source| StoreError::Serialization { source })?;
        self.store.set(list.key(), &json)?;
        tracing::info!(list = list.key(), entries = next.len(), "Saved recipes");
        match list {
            RecipeList::History => self.history = next,
            RecipeList::Palette => self.palette = next,
        }
        Ok(())
    }
}

fn read_list<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<SavedRecipe>> {
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Current time as epoch milliseconds, the recipe timestamp unit.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
