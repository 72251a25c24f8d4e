//! Grid slicing command
//!
//! This module implements the command that runs the actual extraction:
//! decode the source photo, slice the security grid out of it and write
//! the numbered JPEGs to the output directory.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::extractor::GridExtractor;
use crate::grid::errors::{SliceError, SliceResult};
use crate::grid::SECURITY_GRID;
use crate::utils::logger::Logger;

/// Command for slicing the grid out of the source image
pub struct SliceCommand<'a> {
    /// Path to the source image
    input_file: String,
    /// Directory receiving the cropped images
    output_dir: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SliceCommand<'a> {
    /// Create a new slice command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SliceCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| SliceError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_dir = args
            .get_one::<String>("output")
            .ok_or_else(|| SliceError::GenericError("Missing output directory".to_string()))?
            .clone();
        info!("Output directory: {}", output_dir);

        Ok(SliceCommand {
            input_file,
            output_dir,
            logger,
        })
    }
}

impl<'a> Command for SliceCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Extracting grid from {} to {}", self.input_file, self.output_dir);

        let extractor = GridExtractor::new(self.logger);
        let written = extractor.extract_to_dir(&self.input_file, &self.output_dir, &SECURITY_GRID)?;

        info!("Extraction successful, {} files written", written.len());
        Ok(())
    }
}
