//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod slice_command;
pub mod plan_command;

pub use command_traits::{Command, CommandFactory};
pub use slice_command::SliceCommand;
pub use plan_command::PlanCommand;

use clap::ArgMatches;
use crate::grid::errors::SliceResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// Examines the command-line arguments and creates the appropriate
/// command instance for execution.
pub struct GridsliceCommandFactory;

impl GridsliceCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GridsliceCommandFactory
    }
}

impl Default for GridsliceCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GridsliceCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SliceResult<Box<dyn Command + 'a>> {
        if args.get_flag("plan") {
            Ok(Box::new(PlanCommand::new(args, logger)?))
        } else {
            // Default to slicing the grid
            Ok(Box::new(SliceCommand::new(args, logger)?))
        }
    }
}
