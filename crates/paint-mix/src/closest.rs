use paint_model::{Rgb, Swatch};

/// Catalog entry nearest to `target` by Euclidean RGB distance.
///
/// Only a strictly smaller distance replaces the current best, so ties go
/// to the earliest entry. Returns `None` for an empty catalog.
pub fn find_closest_swatch(target: Rgb, catalog: &[Swatch]) -> Option<&Swatch> {
    let mut best: Option<(&Swatch, f64)> = None;
    for swatch in catalog {
        let distance = swatch.rgb.distance(target);
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((swatch, distance)),
        }
    }
    best.map(|(swatch, _)| swatch)
}
