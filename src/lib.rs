pub mod grid;
pub mod extractor;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GridSlice;

pub use grid::{GridSpec, Region, SliceError, SliceResult, SECURITY_GRID};
pub use extractor::GridExtractor;
