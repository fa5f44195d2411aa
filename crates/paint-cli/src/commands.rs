use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info, info_span};

use paint_cli::input::{build_mix, parse_specs};
use paint_cli::report::{MixReport, find_recipe, short_id};
use paint_cli::settings::{Settings, SettingsUpdate, save_settings, settings_path};
use paint_mix::{classify, find_closest_swatch, suggest_mix, target_color};
use paint_model::{BASIC_SWATCHES, RECIPE_TEMPLATES, Rgb, SavedRecipe, template_by_name};
use paint_picker::load_canvas;
use paint_store::{JsonFileStore, RecipeBook, StoreError, now_millis};

use crate::cli::{
    ClosestArgs, MixArgs, PickArgs, RecipeArgs, SettingsArgs, SuggestArgs, TemplateArgs,
};
use crate::summary::{
    print_mix_report, print_recipe_header, print_recipes, print_settings, print_suggestion,
    print_swatches, print_templates,
};

pub fn run_swatches() -> Result<()> {
    print_swatches(&BASIC_SWATCHES);
    Ok(())
}

pub fn run_mix(args: &MixArgs, settings: &Settings) -> Result<()> {
    let specs = parse_specs(&args.components)?;
    let mode = args.mode.map(Into::into).unwrap_or(settings.default_mode);
    let mix = build_mix(&specs, mode)?;
    let report = MixReport::new(&mix, args.volume.volume.or(settings.default_volume_ml));
    print_mix_report(&report);

    if let Some(name) = &args.save {
        let name = name.trim();
        if name.is_empty() {
            return Err(anyhow!("recipe name must not be empty"));
        }
        let span = info_span!("save", recipe = %name);
        let _guard = span.enter();
        let recipe = SavedRecipe::new(name, &mix, report.result, now_millis());
        let mut book = open_book(settings)?;
        book.record_history(recipe.clone()).map_err(store_error)?;
        if args.palette {
            book.save_to_palette(recipe.clone()).map_err(store_error)?;
        }
        println!(
            "Saved \"{}\" ({}){}",
            recipe.name,
            short_id(&recipe.id),
            if args.palette { " to history and palette" } else { " to history" }
        );
    }
    Ok(())
}

pub fn run_suggest(args: &SuggestArgs, settings: &Settings) -> Result<()> {
    suggest_for(target_color(&args.target), args.volume.volume, settings);
    Ok(())
}

pub fn run_closest(args: &ClosestArgs) -> Result<()> {
    let target = target_color(&args.target);
    let swatch = find_closest_swatch(target, &BASIC_SWATCHES)
        .ok_or_else(|| anyhow!("no base paints to compare against"))?;
    println!("Target: {}  {}", target.to_hex(), target.css());
    println!(
        "Closest paint: {} {} (distance {:.1})",
        swatch.name,
        swatch.rgb.to_hex(),
        target.distance(swatch.rgb)
    );
    Ok(())
}

pub fn run_pick(args: &PickArgs, settings: &Settings) -> Result<()> {
    let span = info_span!("pick", image = %args.image.display());
    let _guard = span.enter();
    let canvas = load_canvas(&args.image)
        .with_context(|| format!("load image {}", args.image.display()))?;
    let (width, height) = canvas.dimensions();
    let picked = canvas.pick(args.x, args.y).context("sample image")?;
    info!(x = args.x, y = args.y, color = %picked, "picked color");
    println!("Preview: {width}x{height}");
    println!("Picked: {}  {}", picked.to_hex(), picked.css());
    if args.suggest {
        println!();
        suggest_for(picked, None, settings);
    }
    Ok(())
}

pub fn run_templates() -> Result<()> {
    print_templates(&RECIPE_TEMPLATES);
    Ok(())
}

pub fn run_template(args: &TemplateArgs, settings: &Settings) -> Result<()> {
    let template = template_by_name(&args.name).ok_or_else(|| {
        let known: Vec<&str> = RECIPE_TEMPLATES.iter().map(|t| t.name).collect();
        anyhow!(
            "unknown template {:?} (known: {})",
            args.name,
            known.join(", ")
        )
    })?;
    let mix = template
        .instantiate()
        .with_context(|| format!("build template {}", template.name))?;
    println!("Template: {}", template.name);
    print_mix_report(&MixReport::new(
        &mix,
        args.volume.volume.or(settings.default_volume_ml),
    ));
    Ok(())
}

pub fn run_history(settings: &Settings) -> Result<()> {
    let book = open_book(settings)?;
    print_recipes("History", book.history());
    Ok(())
}

pub fn run_palette(settings: &Settings) -> Result<()> {
    let book = open_book(settings)?;
    print_recipes("Palette", book.palette());
    Ok(())
}

pub fn run_recipe(args: &RecipeArgs, settings: &Settings) -> Result<()> {
    let book = open_book(settings)?;
    let recipe = match book.find(args.id.trim()) {
        Some(recipe) => recipe,
        None => find_recipe(book.palette().iter().chain(book.history()), &args.id)?,
    };
    print_recipe_header(recipe);
    let mix = recipe.to_working_mix();
    let report = MixReport::new(&mix, settings.default_volume_ml);
    if report.result.to_hex() != recipe.result.to_lowercase() {
        debug!(
            stored = %recipe.result,
            recomputed = %report.result,
            "stored result differs from recomputed mix"
        );
    }
    print_mix_report(&report);
    Ok(())
}

pub fn run_forget(args: &RecipeArgs, settings: &Settings) -> Result<()> {
    let mut book = open_book(settings)?;
    let recipe = find_recipe(book.palette(), &args.id)?;
    let (id, name) = (recipe.id.clone(), recipe.name.clone());
    if book.remove_from_palette(&id).map_err(store_error)? {
        println!("Removed \"{name}\" from the palette");
    }
    Ok(())
}

pub fn run_clear_history(settings: &Settings) -> Result<()> {
    let mut book = open_book(settings)?;
    let count = book.history().len();
    book.clear_history().map_err(store_error)?;
    println!("Cleared {count} history entries");
    Ok(())
}

pub fn run_settings(args: &SettingsArgs, current: &Settings, config: Option<&Path>) -> Result<()> {
    let update = SettingsUpdate {
        data_dir: args.data_dir.clone(),
        default_mode: args.mode.map(Into::into),
        default_volume_ml: args.volume,
    };
    if let Some(volume) = update.default_volume_ml
        && (!volume.is_finite() || volume <= 0.0)
    {
        bail!("default volume must be a positive number of ml");
    }
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => settings_path().ok_or_else(|| anyhow!("no settings location on this platform"))?,
    };
    let mut settings = current.clone();
    if !update.is_empty() {
        settings.apply(update);
        save_settings(&settings, &path).map_err(|message| anyhow!(message))?;
    }
    print_settings(&settings, &path);
    Ok(())
}

fn suggest_for(target: Rgb, volume: Option<f64>, settings: &Settings) {
    let rule = classify(target);
    let mix = suggest_mix(target);
    print_suggestion(target, rule);
    print_mix_report(&MixReport::new(&mix, volume.or(settings.default_volume_ml)));
}

fn open_book(settings: &Settings) -> Result<RecipeBook<JsonFileStore>> {
    let data_dir = settings.data_dir();
    debug!(path = %data_dir.display(), "opening recipe store");
    RecipeBook::load(JsonFileStore::new(data_dir)).map_err(store_error)
}

/// Attach the store's user-facing message and hint to the error.
fn store_error(error: StoreError) -> anyhow::Error {
    let message = match error.suggestion() {
        Some(hint) => format!("{} {}", error.user_message(), hint),
        None => error.user_message(),
    };
    anyhow::Error::new(error).context(message)
}
