use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use gridslice::commands::{CommandFactory, GridsliceCommandFactory};
use gridslice::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("GridSlice")
        .version("0.1")
        .about("Slice a fixed grid of sub-images out of a source photo")
        .arg(
            Arg::new("input")
                .help("Source image containing the grid")
                .index(1)
                .default_value("profile picture.jpeg"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for the cropped images")
                .value_name("DIR")
                .default_value("public/images/security"),
        )
        .arg(
            Arg::new("plan")
                .long("plan")
                .help("Print the computed crop rectangles without writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "gridslice.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("gridslice-global.log", matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = GridsliceCommandFactory::new();

    // Extraction failures are reported but do not force a non-zero exit
    // code; the original tool behaves the same way.
    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
        }
    };
}
