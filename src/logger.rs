use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Console logger for the test suites. Safe to call from every test; only
/// the first call installs the logger.
pub fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        TermLogger::init(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .expect("no other logger is installed");
    });
}
