//! Grid geometry and error types
//!
//! This module defines the immutable grid configuration, the pixel
//! regions derived from it, and the error taxonomy shared across
//! the crate.

mod spec;
mod region;
pub mod errors;

pub use spec::{GridSpec, SECURITY_GRID};
pub use region::Region;
pub use errors::{SliceError, SliceResult};
