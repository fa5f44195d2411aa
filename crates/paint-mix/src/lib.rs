//! Paint mixing computations.
//!
//! Everything here is a pure function of its inputs:
//!
//! - [`color`]: hex string conversion with silent fallback
//! - [`mix`]: weighted linear RGB averaging
//! - [`closest`]: nearest catalog swatch
//! - [`suggest`]: rule-based starting mix for a target color
//! - [`volume`]: splitting a batch volume across components
//! - [`normalize`]: percentage views and proportions text
//!
//! Mixing is a linear convex combination per channel. It does not model
//! pigment behavior.

pub mod closest;
pub mod color;
pub mod mix;
pub mod normalize;
pub mod suggest;
pub mod volume;

pub use closest::find_closest_swatch;
pub use color::{channels_to_hex, hex_to_channels, target_color};
pub use mix::{compute_mix, mix_working};
pub use normalize::{normalize, percentages, proportions_label};
pub use suggest::{SuggestionRule, classify, suggest_mix};
pub use volume::{Portion, apportion_volumes};
