//! Library facade
//!
//! A small entry point for programmatic consumers that don't want to
//! assemble the logger and extractor themselves.

use std::path::PathBuf;

use crate::commands::plan_command;
use crate::extractor::GridExtractor;
use crate::grid::errors::SliceResult;
use crate::grid::{GridSpec, SECURITY_GRID};
use crate::utils::logger::Logger;

/// Main interface to the gridslice library
pub struct GridSlice {
    logger: Logger,
}

impl GridSlice {
    /// Create a new GridSlice instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "gridslice.log"
    ///
    /// # Returns
    /// A GridSlice instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> SliceResult<Self> {
        let log_path = log_file.unwrap_or("gridslice.log");
        let logger = Logger::new(log_path)?;
        Ok(GridSlice { logger })
    }

    /// Slice a grid of cells out of a source image
    ///
    /// # Arguments
    /// * `input_path` - Path to the source image
    /// * `output_dir` - Directory receiving the numbered JPEGs
    /// * `spec` - Grid layout to use; defaults to the security grid
    ///
    /// # Returns
    /// The paths written, in row-major order
    pub fn extract(
        &self,
        input_path: &str,
        output_dir: &str,
        spec: Option<GridSpec>,
    ) -> SliceResult<Vec<PathBuf>> {
        let spec = spec.unwrap_or(SECURITY_GRID);
        let extractor = GridExtractor::new(&self.logger);
        extractor.extract_to_dir(input_path, output_dir, &spec)
    }

    /// Format a human-readable plan of the grid layout
    pub fn plan(&self, spec: Option<GridSpec>) -> String {
        plan_command::format_plan(&spec.unwrap_or(SECURITY_GRID))
    }
}
