//! Grid plan command
//!
//! Prints the grid geometry and every computed crop rectangle without
//! touching the filesystem. Useful for checking the hard-coded layout
//! against a new source photo before slicing it.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::grid::errors::SliceResult;
use crate::grid::{GridSpec, SECURITY_GRID};
use crate::utils::logger::Logger;

/// Command that reports the grid layout without extracting anything
pub struct PlanCommand<'a> {
    logger: &'a Logger,
}

impl<'a> PlanCommand<'a> {
    pub fn new(_args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        Ok(PlanCommand { logger })
    }
}

/// Format a human-readable summary of a grid layout
pub fn format_plan(spec: &GridSpec) -> String {
    let (max_x, max_y) = spec.max_extent();
    let mut out = format!("Grid plan: {}x{} cells of {}x{}\n", spec.columns, spec.rows, spec.cell_width, spec.cell_height);
    out.push_str(&format!("  Origin: ({},{}), spacing: {}x{}\n", spec.start_x, spec.start_y, spec.h_spacing, spec.v_spacing));
    out.push_str(&format!("  Source must be at least {}x{} to cover every cell\n", max_x, max_y));

    for (i, region) in spec.regions().iter().enumerate() {
        out.push_str(&format!(
            "  security-{}: x={} y={} {}x{}\n",
            i + 1,
            region.x,
            region.y,
            region.width,
            region.height
        ));
    }
    out
}

impl<'a> Command for PlanCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Printing grid plan");

        let plan = format_plan(&SECURITY_GRID);
        print!("{}", plan);
        self.logger.log(&plan)?;

        Ok(())
    }
}
