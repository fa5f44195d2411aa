//! Tests for paint-model types.

use paint_model::{
    BASIC_SWATCHES, MixComponent, ModelError, RECIPE_TEMPLATES, RecipeTemplate, Rgb, SavedRecipe,
    WeightMode, WorkingMix, swatch_by_name, template_by_name,
};

fn swatch(name: &str) -> &'static paint_model::Swatch {
    swatch_by_name(name).expect("catalog swatch")
}

#[test]
fn add_allows_duplicates() {
    let mut mix = WorkingMix::new();
    let first = mix.add(swatch("red"), WeightMode::Amount).id.clone();
    let second = mix.add(swatch("red"), WeightMode::Amount).id.clone();
    assert_eq!(mix.len(), 2);
    assert_ne!(first, second);
    assert_eq!(mix.total_weight(), 2.0);
}

#[test]
fn set_weight_validates_input() {
    let mut mix = WorkingMix::new();
    mix.add(swatch("blue"), WeightMode::Amount);

    mix.set_weight(0, 4.5).expect("valid weight");
    assert_eq!(mix.get(0).map(|c| c.weight), Some(4.5));

    assert_eq!(
        mix.set_weight(0, -1.0),
        Err(ModelError::InvalidWeight(-1.0))
    );
    assert!(matches!(
        mix.set_weight(0, f64::INFINITY),
        Err(ModelError::InvalidWeight(_))
    ));
    assert_eq!(
        mix.set_weight(3, 1.0),
        Err(ModelError::IndexOutOfRange { index: 3, len: 1 })
    );
}

#[test]
fn remove_and_clear() {
    let mut mix = WorkingMix::new();
    mix.add(swatch("white"), WeightMode::Amount);
    mix.add(swatch("black"), WeightMode::Amount);

    let removed = mix.remove(0).expect("remove first");
    assert_eq!(removed.name, "White");
    assert_eq!(mix.get(0).map(|c| c.name.as_str()), Some("Black"));
    assert!(mix.remove(5).is_err());

    mix.clear();
    assert!(mix.is_empty());
    assert_eq!(mix.total_weight(), 0.0);
}

#[test]
fn every_template_instantiates_to_one_hundred_percent() {
    for template in &RECIPE_TEMPLATES {
        let mix = template.instantiate().expect("template swatches exist");
        assert_eq!(mix.len(), template.swatches.len(), "{}", template.name);
        assert_eq!(mix.total_weight(), 100.0, "{}", template.name);
    }
}

#[test]
fn template_lookup_and_errors() {
    let sky = template_by_name("sky blue").expect("template");
    let mix = sky.instantiate().expect("instantiate");
    assert_eq!(mix.get(0).map(|c| c.rgb), Some(Rgb::WHITE));
    assert_eq!(mix.get(1).map(|c| c.weight), Some(20.0));

    let unknown = RecipeTemplate {
        name: "Broken",
        swatches: &["White", "Teal"],
        percentages: &[50, 50],
    };
    assert_eq!(
        unknown.instantiate(),
        Err(ModelError::UnknownSwatch("Teal".to_string()))
    );

    let mismatched = RecipeTemplate {
        name: "Short",
        swatches: &["White"],
        percentages: &[50, 50],
    };
    assert!(matches!(
        mismatched.instantiate(),
        Err(ModelError::TemplateMismatch { .. })
    ));
}

#[test]
fn recipe_serializes_with_stored_field_names() {
    let mut mix = WorkingMix::new();
    mix.add(swatch("red"), WeightMode::Amount);
    let recipe = SavedRecipe::new("Test", &mix, Rgb::new(220, 38, 38), 1_700_000_000_000);

    let value = serde_json::to_value(&recipe).expect("serialize recipe");
    assert_eq!(value["name"], "Test");
    assert_eq!(value["result"], "#dc2626");
    assert_eq!(value["timestamp"], 1_700_000_000_000_i64);
    assert_eq!(value["colors"][0]["name"], "Red");
    assert_eq!(value["colors"][0]["hex"], "#dc2626");
    assert_eq!(value["colors"][0]["amount"], 1.0);
    assert!(value["colors"][0]["id"].is_string());
}

#[test]
fn recipe_reads_components_alias_and_degrades_bad_hex() {
    let json = r##"{
        "id": "1",
        "name": "Legacy",
        "components": [
            {"id": "a", "name": "White", "hex": "#FFFFFF", "amount": 100},
            {"id": "b", "name": "Mystery", "hex": "oops", "amount": 0}
        ],
        "result": "#ffffff",
        "timestamp": 1
    }"##;
    let recipe: SavedRecipe = serde_json::from_str(json).expect("deserialize recipe");
    let mix = recipe.to_working_mix();
    assert_eq!(mix.len(), 2);
    assert_eq!(mix.get(0).map(|c| c.rgb), Some(Rgb::WHITE));
    assert_eq!(mix.get(1).map(|c| c.rgb), Some(Rgb::BLACK));
    assert_eq!(mix.get(1).map(|c| c.id.as_str()), Some("b"));
    assert_eq!(recipe.result_rgb(), Rgb::WHITE);
}

#[test]
fn catalog_matches_palette_order() {
    let names: Vec<&str> = BASIC_SWATCHES.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "White", "Black", "Red", "Yellow", "Blue", "Green", "Orange", "Purple", "Pink",
            "Brown", "Gray"
        ]
    );
}

#[test]
fn component_from_swatch_copies_channels() {
    let component = MixComponent::from_swatch(swatch("brown"), 2.0);
    assert_eq!(component.rgb, Rgb::new(120, 53, 15));
    assert_eq!(component.name, "Brown");
    assert!(!component.id.is_empty());
}
