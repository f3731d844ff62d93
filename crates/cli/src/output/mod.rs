//! Output formatters for review results

pub mod json;
pub mod markdown;
pub mod terminal;
