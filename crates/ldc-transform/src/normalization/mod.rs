//! Per-column value normalization.
//!
//! Each submodule pairs a pure per-value function with the pipeline stage
//! that applies it to the designated columns:
//!
//! - [`text`]: trim and upper-case
//! - [`datetime`]: calendar date parsing with an explicit format list
//! - [`cost`]: currency stripping and numeric parsing

pub mod cost;
pub mod datetime;
pub mod text;

pub use cost::{CostNormalizer, normalize_cost, parse_cost};
pub use datetime::{DATE_FORMATS, DateNormalizer, normalize_date, parse_date};
pub use text::{TextNormalizer, normalize_text};
