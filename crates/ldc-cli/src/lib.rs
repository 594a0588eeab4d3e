//! CLI library components for the logistics data cleaner.

pub mod logging;
pub mod pipeline;
pub mod types;
