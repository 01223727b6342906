use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Colored status lines on the terminal: info to stdout, warnings and errors to stderr.
pub fn init(verbose: u8) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    // A second init (tests, embedding) keeps the first logger.
    let _ = TermLogger::init(
        level_for(verbose),
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
