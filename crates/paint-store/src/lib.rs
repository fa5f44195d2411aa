//! Persistent storage for saved paint recipes.
//!
//! Two independent lists live in a key-value store:
//!
//! - `paintHistory`: every saved mix, most recent first, capped at 20
//! - `savedPalettes`: recipes the user pinned, most recent first, uncapped
//!
//! Each list is one JSON array of recipe records. A missing key means an
//! empty list.
//!
//! # Example
//!
//! ```ignore
//! use paint_store::{JsonFileStore, RecipeBook};
//!
//! let mut book = RecipeBook::load(JsonFileStore::new(data_dir))?;
//! book.record_history(recipe)?;
//! ```

mod book;
mod error;
mod kv;

pub use book::{HISTORY_KEY, HISTORY_LIMIT, PALETTE_KEY, RecipeBook, RecipeList, now_millis};
pub use error::{Result, StoreError};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
