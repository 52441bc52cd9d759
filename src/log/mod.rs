//! The `log` module configures the crate's logging. Graph mutations are logged at `trace`,
//! infection seeding at `debug`, and each degree recomputation emits an `info` summary.
//!
//! This module (re)exports the five logging macros: `error!`, `warn!`, `info!`, `debug!` and
//! `trace!`, so callers building a graph can emit messages through the same backend:
//!
//! ```rust
//! use contact_tracer::info;
//!
//! pub fn load_contacts() {
//!     info!("Loading contacts.");
//! }
//! ```
//!
//! Logging is _disabled_ by default. Log messages are enabled/disabled using the functions:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages, including modules with their own filter
//!  - `set_log_level(level: LevelFilter)`: enables only log messages with priority at least `level`
//!
//! Per-module filtering is configured with `set_module_filter()` / `set_module_filters()` and
//! `remove_module_filter()`. While the global level is not `Off`, a module filter replaces the
//! global level for that module and everything beneath it. Propagation is capped at `debug`
//! unless it has a filter of its own, so `enable_logging()` alone does not print every vertex:
//!
//! ```rust
//! use contact_tracer::log::{set_log_level, set_module_filter, LevelFilter};
//!
//! pub fn setup_logging() {
//!     set_log_level(LevelFilter::Info);
//!     // Show every vertex visited during propagation.
//!     set_module_filter("contact_tracer::graph::propagation", LevelFilter::Trace);
//! }
//! ```
//!
//! A [`GraphConfig`](crate::config::GraphConfig) can apply the same settings from a file.
#[cfg(feature = "logging")]
mod standard_logger;

#[cfg(not(feature = "logging"))]
mod null_logger;

pub use log::{debug, error, info, trace, warn, LevelFilter};
use std::collections::hash_map::Entry;

use crate::hashing::HashMap;
#[cfg(feature = "logging")]
use log4rs::Handle;
use std::sync::{LazyLock, Mutex, MutexGuard};

// Logging disabled
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;
// Upper bounds for modules without an explicit filter. Per-vertex propagation messages
// drown everything else at `trace`.
const DEFAULT_MODULE_CAPS: [(&str, LevelFilter); 1] =
    [("contact_tracer::graph::propagation", LevelFilter::Debug)];

static LOG_CONFIGURATION: LazyLock<Mutex<LogConfiguration>> = LazyLock::new(Mutex::default);

/// A level filter for the messages emitted under one module path (e.g.
/// `"contact_tracer::graph"`).
#[derive(Debug, PartialEq)]
struct ModuleLogConfiguration {
    module: String,
    level: LevelFilter,
}

impl From<(&str, LevelFilter)> for ModuleLogConfiguration {
    fn from((module, level): (&str, LevelFilter)) -> Self {
        Self {
            module: module.to_string(),
            level,
        }
    }
}

/// Global level, module filters, and the handle of the installed logger.
///
/// Loggers are installed process-wide, so only the singleton behind `LOG_CONFIGURATION`
/// exists. The public API are free functions that lock it.
#[derive(Debug)]
pub(in crate::log) struct LogConfiguration {
    /// Level for modules without their own filter. `LevelFilter::Off` disables logging.
    pub(in crate::log) global_log_level: LevelFilter,
    pub(in crate::log) module_configurations: HashMap<String, ModuleLogConfiguration>,

    #[cfg(feature = "logging")]
    root_handle: Option<Handle>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            global_log_level: DEFAULT_LOG_LEVEL,
            module_configurations: HashMap::default(),

            #[cfg(feature = "logging")]
            root_handle: None,
        }
    }
}

impl LogConfiguration {
    /// The per-module levels the backend should install, sorted by module path.
    ///
    /// Empty when the global level is `Off`. Otherwise every explicit filter, plus each default
    /// cap that is stricter than the global level and not overridden by an explicit filter.
    pub(in crate::log) fn module_levels(&self) -> Vec<(String, LevelFilter)> {
        if self.global_log_level == LevelFilter::Off {
            return Vec::new();
        }
        let mut levels: Vec<(String, LevelFilter)> = self
            .module_configurations
            .values()
            .map(|module_config| (module_config.module.clone(), module_config.level))
            .collect();
        for (module, cap) in DEFAULT_MODULE_CAPS {
            if cap < self.global_log_level && !self.module_configurations.contains_key(module) {
                levels.push((module.to_string(), cap));
            }
        }
        levels.sort_unstable();
        levels
    }

    fn set_log_level(&mut self, level: LevelFilter) {
        self.global_log_level = level;
        self.set_config();
    }

    /// Returns true if the configuration was mutated.
    fn insert_module_filter(&mut self, module: &str, level: LevelFilter) -> bool {
        match self.module_configurations.entry(module.to_string()) {
            Entry::Occupied(mut entry) => {
                if entry.get().level == level {
                    return false;
                }
                entry.get_mut().level = level;
            }
            Entry::Vacant(entry) => {
                entry.insert((module, level).into());
            }
        }
        true
    }

    fn set_module_filters<S: AsRef<str>>(&mut self, module_filters: &[(S, LevelFilter)]) {
        let mut mutated = false;
        for (module, level) in module_filters {
            mutated |= self.insert_module_filter(module.as_ref(), *level);
        }
        if mutated {
            self.set_config();
        }
    }

    fn remove_module_filter(&mut self, module: &str) {
        if self.module_configurations.remove(module).is_some() {
            self.set_config();
        }
    }
}

/// Turns on every log message. Equivalent to `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Turns off logging. Equivalent to `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

/// Sets the global log level.
pub fn set_log_level(level: LevelFilter) {
    get_log_configuration().set_log_level(level);
}

/// Sets a level filter for the given module path.
pub fn set_module_filter(module_path: &str, level_filter: LevelFilter) {
    get_log_configuration().set_module_filters(&[(module_path, level_filter)]);
}

/// Removes the filter for the given module path; the global level applies to it again.
pub fn remove_module_filter(module_path: &str) {
    get_log_configuration().remove_module_filter(module_path);
}

/// Sets several module filters, rebuilding the logger at most once.
pub fn set_module_filters<S: AsRef<str>>(module_filters: &[(S, LevelFilter)]) {
    get_log_configuration().set_module_filters(module_filters);
}

fn get_log_configuration() -> MutexGuard<'static, LogConfiguration> {
    LOG_CONFIGURATION.lock().expect("Mutex poisoned")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{
        disable_logging, get_log_configuration, remove_module_filter, set_log_level,
        set_module_filter, set_module_filters,
    };
    use log::{error, log_enabled, trace, Level, LevelFilter};
    use std::sync::{LazyLock, Mutex};

    // Tests touching the global logger must run serially.
    pub(crate) static TEST_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

    const PROPAGATION: &str = "contact_tracer::graph::propagation";

    pub(crate) fn configured_global_level() -> LevelFilter {
        get_log_configuration().global_log_level
    }

    pub(crate) fn configured_module_level(module: &str) -> Option<LevelFilter> {
        get_log_configuration()
            .module_configurations
            .get(module)
            .map(|module_config| module_config.level)
    }

    #[test]
    fn test_set_log_level() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        set_log_level(LevelFilter::Error);
        {
            let config = get_log_configuration();
            assert_eq!(config.global_log_level, LevelFilter::Error);
            error!("test_set_log_level: global set to error");
            trace!("test_set_log_level: NOT EMITTED");
        }
        set_log_level(LevelFilter::Trace);
        {
            let config = get_log_configuration();
            assert_eq!(config.global_log_level, LevelFilter::Trace);
            trace!("test_set_log_level: global set to trace");
        }
        set_log_level(LevelFilter::Off);
    }

    #[test]
    fn test_set_remove_module_filters() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        let filters = [
            ("contact_tracer::graph", LevelFilter::Debug),
            ("contact_tracer::config", LevelFilter::Warn),
        ];
        set_module_filters(&filters);
        {
            let config = get_log_configuration();
            for (module_path, level) in &filters {
                assert_eq!(
                    config.module_configurations.get(*module_path),
                    Some(&((*module_path, *level).into()))
                );
            }
        }

        remove_module_filter("contact_tracer::graph");
        assert_eq!(configured_module_level("contact_tracer::graph"), None);
        assert_eq!(
            configured_module_level("contact_tracer::config"),
            Some(LevelFilter::Warn)
        );

        remove_module_filter("contact_tracer::config");
        assert!(get_log_configuration().module_configurations.is_empty());
    }

    #[test]
    fn disable_logging_silences_module_filters() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        set_module_filter("contact_tracer::graph", LevelFilter::Trace);
        disable_logging();

        assert!(get_log_configuration().module_levels().is_empty());
        assert_eq!(log::max_level(), LevelFilter::Off);
        assert!(!log_enabled!(target: PROPAGATION, Level::Debug));
        assert!(!log_enabled!(target: "contact_tracer::graph", Level::Trace));

        remove_module_filter("contact_tracer::graph");
    }

    #[test]
    fn propagation_is_capped_below_trace() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        set_log_level(LevelFilter::Trace);
        assert_eq!(
            get_log_configuration().module_levels(),
            vec![(PROPAGATION.to_string(), LevelFilter::Debug)]
        );
        assert!(!log_enabled!(target: PROPAGATION, Level::Trace));

        // The cap never raises a quieter global level.
        set_log_level(LevelFilter::Info);
        assert!(get_log_configuration().module_levels().is_empty());
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(!log_enabled!(target: PROPAGATION, Level::Debug));

        // An explicit filter replaces the cap.
        set_module_filter(PROPAGATION, LevelFilter::Trace);
        assert_eq!(
            get_log_configuration().module_levels(),
            vec![(PROPAGATION.to_string(), LevelFilter::Trace)]
        );

        remove_module_filter(PROPAGATION);
        set_log_level(LevelFilter::Off);
    }
}
