//! Paint mixer command-line library components.

pub mod input;
pub mod logging;
pub mod report;
pub mod settings;
