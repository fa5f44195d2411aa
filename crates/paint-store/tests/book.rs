//! Recipe book behavior over both store backends.

use paint_model::{Rgb, SavedRecipe, WeightMode, WorkingMix, swatch_by_name};
use paint_store::{
    HISTORY_KEY, HISTORY_LIMIT, JsonFileStore, KeyValueStore, MemoryStore, PALETTE_KEY,
    RecipeBook, RecipeList, StoreError,
};
use tempfile::tempdir;

fn recipe(name: &str, timestamp: i64) -> SavedRecipe {
    let mut mix = WorkingMix::new();
    mix.add(swatch_by_name("red").unwrap(), WeightMode::Amount);
    mix.add(swatch_by_name("white").unwrap(), WeightMode::Amount);
    SavedRecipe::new(name, &mix, Rgb::new(238, 147, 147), timestamp)
}

#[test]
fn empty_store_loads_empty_lists() {
    let book = RecipeBook::load(MemoryStore::new()).unwrap();
    assert!(book.history().is_empty());
    assert!(book.palette().is_empty());
}

#[test]
fn history_is_most_recent_first_and_capped() {
    let mut book = RecipeBook::load(MemoryStore::new()).unwrap();
    for i in 0..30 {
        book.record_history(recipe(&format!("mix {i}"), i)).unwrap();
        assert!(book.history().len() <= HISTORY_LIMIT);
    }
    assert_eq!(book.history().len(), HISTORY_LIMIT);
    assert_eq!(book.history()[0].name, "mix 29");
    assert_eq!(book.history()[HISTORY_LIMIT - 1].name, "mix 10");
}

#[test]
fn palette_is_uncapped() {
    let mut book = RecipeBook::load(MemoryStore::new()).unwrap();
    for i in 0..25 {
        book.save_to_palette(recipe(&format!("swatch {i}"), i)).unwrap();
    }
    assert_eq!(book.palette().len(), 25);
    assert_eq!(book.list(RecipeList::Palette)[0].name, "swatch 24");
    assert!(book.history().is_empty());
}

#[test]
fn mutations_rewrite_the_store() {
    let mut book = RecipeBook::load(MemoryStore::new()).unwrap();
    let first = recipe("first", 1);
    let id = first.id.clone();
    book.save_to_palette(first).unwrap();
    book.record_history(recipe("second", 2)).unwrap();

    let store = book.into_store();
    let palette = store.get(PALETTE_KEY).unwrap().expect("palette written");
    assert!(palette.contains("\"first\""));
    assert!(store.get(HISTORY_KEY).unwrap().is_some());

    let mut reloaded = RecipeBook::load(store).unwrap();
    assert_eq!(reloaded.palette().len(), 1);
    assert_eq!(reloaded.find(&id).map(|r| r.name.as_str()), Some("first"));

    assert!(reloaded.remove_from_palette(&id).unwrap());
    assert!(!reloaded.remove_from_palette(&id).unwrap());
    assert!(reloaded.palette().is_empty());

    reloaded.clear_history().unwrap();
    assert!(reloaded.history().is_empty());
}

#[test]
fn file_store_survives_reload() {
    let dir = tempdir().unwrap();
    {
        let mut book = RecipeBook::load(JsonFileStore::new(dir.path())).unwrap();
        book.record_history(recipe("kept", 42)).unwrap();
    }
    let book = RecipeBook::load(JsonFileStore::new(dir.path())).unwrap();
    assert_eq!(book.history().len(), 1);
    let saved = &book.history()[0];
    assert_eq!(saved.name, "kept");
    assert_eq!(saved.timestamp, 42);
    assert_eq!(saved.result, "#ee9393");
    assert_eq!(saved.to_working_mix().len(), 2);
    assert!(dir.path().join("paintHistory.json").exists());
}

#[test]
fn malformed_contents_are_reported() {
    let mut store = MemoryStore::new();
    store.set(PALETTE_KEY, "{not json").unwrap();
    let err = RecipeBook::load(store).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { ref key, .. } if key == PALETTE_KEY));
    assert!(err.suggestion().is_some());
}

#[test]
fn reads_recipes_written_with_components_field() {
    let mut store = MemoryStore::new();
    store
        .set(
            HISTORY_KEY,
            r##"[{"id":"1","name":"old","components":[{"id":"a","name":"Blue","hex":"#2563eb","amount":2}],"result":"#2563eb","timestamp":5}]"##,
        )
        .unwrap();
    let book = RecipeBook::load(store).unwrap();
    assert_eq!(book.history()[0].colors[0].amount, 2.0);
}

#[derive(Debug)]
struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> paint_store::Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> paint_store::Result<()> {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[test]
fn failed_write_leaves_lists_untouched() {
    let mut book = RecipeBook::load(FailingStore).unwrap();
    assert!(book.record_history(recipe("lost", 1)).is_err());
    assert!(book.save_to_palette(recipe("lost", 1)).is_err());
    assert!(book.history().is_empty());
    assert!(book.palette().is_empty());
}

#[test]
fn find_prefers_the_palette_copy() {
    let mut book = RecipeBook::load(MemoryStore::new()).unwrap();
    let pinned = recipe("pinned", 1);
    let mut older = pinned.clone();
    older.name = "history copy".to_string();
    book.record_history(older).unwrap();
    book.save_to_palette(pinned.clone()).unwrap();
    book.record_history(recipe("other", 2)).unwrap();

    assert_eq!(book.find(&pinned.id).map(|r| r.name.as_str()), Some("pinned"));
    let other_id = book.history()[0].id.clone();
    assert_eq!(book.find(&other_id).map(|r| r.name.as_str()), Some("other"));
    assert!(book.find("missing").is_none());
}
