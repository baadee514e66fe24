#![deny(missing_docs)]
//! Shared logging setup for the sheetpull workspace.
//!
//! The operator front end writes to `./sheetpull.log` and/or the terminal;
//! tests get a best-effort terminal logger via [`initialize_for_tests`].

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./sheetpull.log";

/// Destination for log output.
pub enum LogDestination {
    /// Write to ./sheetpull.log in the current directory.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    fn wants_terminal(&self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }

    fn wants_file(&self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }
}

/// Initialize the global logger with the specified destination.
///
/// An unwritable log file degrades to a terminal warning; logging setup
/// never aborts the program. Calling this twice is a no-op.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut sinks: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.wants_terminal() {
        sinks.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match File::create(Path::new(LOG_PATH)) {
            Ok(file) => sinks.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: could not create log file at {LOG_PATH}: {err}"),
        }
    }

    if !sinks.is_empty() {
        let _ = CombinedLogger::init(sinks);
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
