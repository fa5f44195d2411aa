use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use std::path::Path;

use paint_cli::report::{MixReport, format_timestamp, short_id};
use paint_cli::settings::Settings;
use paint_mix::SuggestionRule;
use paint_model::{RecipeTemplate, Rgb, SavedRecipe, Swatch};

pub fn print_swatches(swatches: &[Swatch]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Paint"), header_cell("Hex"), header_cell("RGB")]);
    apply_table_style(&mut table);
    for swatch in swatches {
        table.add_row(vec![
            chip_cell(swatch.rgb, swatch.name),
            Cell::new(swatch.rgb.to_hex()),
            dim_cell(swatch.rgb.css()),
        ]);
    }
    println!("{table}");
}

pub fn print_mix_report(report: &MixReport) {
    println!("Result: {}", report.headline());
    println!("Proportions: {}", report.proportions);
    if report.rows.is_empty() {
        return;
    }
    let with_volume = report.rows.iter().any(|row| row.volume.is_some());
    let mut header = vec![header_cell("Paint"), header_cell("Weight"), header_cell("Share")];
    if with_volume {
        header.push(header_cell("Volume (ml)"));
    }
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &report.rows {
        let mut cells = vec![
            chip_cell(row.rgb, &row.name),
            Cell::new(format_number(row.weight)),
            match row.share {
                Some(share) => Cell::new(format!("{share:.1}%")),
                None => dim_cell("-"),
            },
        ];
        if with_volume {
            cells.push(match row.volume {
                Some(volume) => Cell::new(format_number(volume)),
                None => dim_cell("-"),
            });
        }
        table.add_row(cells);
    }
    println!("{table}");
    if let Some(volume) = report.volume {
        if with_volume {
            println!("Batch: {} ml", format_number(volume));
        } else if report.volume_not_computable() {
            println!("Batch: {} ml cannot be split (no weight or no volume)", format_number(volume));
        }
    }
}

pub fn print_suggestion(target: Rgb, rule: SuggestionRule) {
    println!("Target: {}  {}", target.to_hex(), target.css());
    println!("Rule: {rule}");
}

pub fn print_templates(templates: &[RecipeTemplate]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Template"), header_cell("Recipe")]);
    apply_table_style(&mut table);
    for template in templates {
        let recipe = template
            .swatches
            .iter()
            .zip(template.percentages)
            .map(|(name, percent)| format!("{name} {percent}%"))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(template.name).add_attribute(Attribute::Bold),
            Cell::new(recipe),
        ]);
    }
    println!("{table}");
}

pub fn print_recipes(title: &str, recipes: &[SavedRecipe]) {
    if recipes.is_empty() {
        println!("{title}: empty");
        return;
    }
    println!("{title}:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Result"),
        header_cell("Paints"),
        header_cell("Saved (UTC)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for recipe in recipes {
        table.add_row(vec![
            dim_cell(short_id(&recipe.id)),
            Cell::new(&recipe.name).add_attribute(Attribute::Bold),
            chip_cell(recipe.result_rgb(), &recipe.result),
            Cell::new(recipe.colors.len()),
            dim_cell(format_timestamp(recipe.timestamp)),
        ]);
    }
    println!("{table}");
}

pub fn print_recipe_header(recipe: &SavedRecipe) {
    println!("{} ({})", recipe.name, recipe.id);
    println!("Saved: {} UTC", format_timestamp(recipe.timestamp));
    println!("Stored result: {}", recipe.result);
}

pub fn print_settings(settings: &Settings, path: &Path) {
    println!("Settings file: {}", path.display());
    println!("Data folder: {}", settings.data_dir().display());
    println!("Default mode: {}", settings.default_mode.as_str());
    match settings.default_volume_ml {
        Some(volume) => println!("Default volume: {} ml", format_number(volume)),
        None => println!("Default volume: none"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Whole numbers print without decimals, everything else with up to two.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Label on a patch of the paint color, like the swatch buttons.
fn chip_cell(rgb: Rgb, label: &str) -> Cell {
    let (background, foreground) = chip_colors(rgb);
    Cell::new(format!(" {label} ")).bg(background).fg(foreground)
}

fn chip_colors(rgb: Rgb) -> (Color, Color) {
    let text = rgb.contrast_text();
    (terminal_color(rgb), terminal_color(text))
}

fn terminal_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(125.0), "125");
        assert_eq!(format_number(87.5), "87.5");
        assert_eq!(format_number(33.333), "33.33");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn chips_use_readable_label_colors() {
        let (background, foreground) = chip_colors(Rgb::new(250, 204, 21));
        assert_eq!(background, Color::Rgb { r: 250, g: 204, b: 21 });
        assert_eq!(foreground, Color::Rgb { r: 0, g: 0, b: 0 });

        let (_, foreground) = chip_colors(Rgb::new(37, 99, 235));
        assert_eq!(foreground, Color::Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(chip_cell(Rgb::BLACK, "Black").content(), " Black ");
    }
}
