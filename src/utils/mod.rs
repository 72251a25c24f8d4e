//! Utility modules shared across the crate

pub mod logger;
pub mod progress;
pub mod image_utils;
