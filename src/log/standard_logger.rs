use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use crate::log::LogConfiguration;

// ISO 8601 timestamp, colour-coded level, module path.
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";
const CONSOLE_APPENDER: &str = "stderr";

impl LogConfiguration {
    /// Builds the `log4rs` configuration: one stderr appender on the root at the global level,
    /// and one logger per entry of [`module_levels`](LogConfiguration::module_levels).
    fn build_config(&self) -> Result<Config, log4rs::config::runtime::ConfigErrors> {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
            .build();

        let loggers = self
            .module_levels()
            .into_iter()
            .map(|(module, level)| Logger::builder().build(module, level));

        Config::builder()
            .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)))
            .loggers(loggers)
            .build(
                Root::builder()
                    .appender(CONSOLE_APPENDER)
                    .build(self.global_log_level),
            )
    }

    /// Installs or reconfigures the global `log4rs` logger to match this configuration.
    pub(in crate::log) fn set_config(&mut self) {
        let config = match self.build_config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("contact-tracer: invalid logger configuration: {e}");
                return;
            }
        };

        match self.root_handle {
            Some(ref mut handle) => handle.set_config(config),
            None => match log4rs::init_config(config) {
                Ok(handle) => self.root_handle = Some(handle),
                // Another logger already owns the process; leave it in charge.
                Err(e) => eprintln!("contact-tracer: logger not installed: {e}"),
            },
        }
    }
}
