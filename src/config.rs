//! Configuration for a [`Graph`](crate::graph::Graph) and for logging, loadable from JSON.
//!
//! ```json
//! {
//!     "propagation": "breadth_first",
//!     "log_level": "info",
//!     "module_filters": { "contact_tracer::graph::propagation": "trace" }
//! }
//! ```
//!
//! Every field is optional. Unknown fields are rejected so that typos do not go unnoticed.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TracerError;
use crate::graph::PropagationStrategy;
use crate::hashing::HashMap;
use crate::log::{set_log_level, set_module_filters, LevelFilter};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub propagation: PropagationStrategy,
    /// Global log level name: `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: Option<String>,
    /// Module path to log level name.
    pub module_filters: HashMap<String, String>,
}

impl GraphConfig {
    /// # Errors
    ///
    /// Returns [`TracerError::JsonError`] if `json` is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self, TracerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`TracerError`] if the file cannot be read or is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TracerError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Applies `log_level` and `module_filters` to the global logger. Nothing is applied
    /// unless every level name parses.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::InvalidConfig`] for an unknown level name.
    pub fn init_logging(&self) -> Result<(), TracerError> {
        let global = self.log_level.as_deref().map(parse_level).transpose()?;
        let module_filters = self
            .module_filters
            .iter()
            .map(|(module, level)| Ok((module.as_str(), parse_level(level)?)))
            .collect::<Result<Vec<_>, TracerError>>()?;

        if let Some(level) = global {
            set_log_level(level);
        }
        if !module_filters.is_empty() {
            set_module_filters(module_filters.as_slice());
        }
        Ok(())
    }
}

fn parse_level(name: &str) -> Result<LevelFilter, TracerError> {
    LevelFilter::from_str(name)
        .map_err(|_| TracerError::InvalidConfig(format!("unknown log level '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::remove_module_filter;
    use crate::log::tests::{configured_global_level, configured_module_level, TEST_MUTEX};
    use std::io::Write;

    #[test]
    fn empty_object_is_default() {
        let config = GraphConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GraphConfig::default());
        assert_eq!(config.propagation, PropagationStrategy::BreadthFirst);
    }

    #[test]
    fn parses_every_field() {
        let config = GraphConfig::from_json_str(
            r#"{
                "propagation": "exhaustive_paths",
                "log_level": "warn",
                "module_filters": { "contact_tracer::graph": "debug" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.propagation, PropagationStrategy::ExhaustivePaths);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert_eq!(
            config.module_filters.get("contact_tracer::graph").map(String::as_str),
            Some("debug")
        );
    }

    #[test]
    fn rejects_unknown_fields_and_strategies() {
        assert!(matches!(
            GraphConfig::from_json_str(r#"{ "propagaton": "breadth_first" }"#),
            Err(TracerError::JsonError(_))
        ));
        assert!(matches!(
            GraphConfig::from_json_str(r#"{ "propagation": "depth_first" }"#),
            Err(TracerError::JsonError(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "propagation": "exhaustive_paths" }}"#).unwrap();
        let config = GraphConfig::from_file(file.path()).unwrap();
        assert_eq!(config.propagation, PropagationStrategy::ExhaustivePaths);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GraphConfig::from_file(dir.path().join("missing.json")),
            Err(TracerError::IoError(_))
        ));
    }

    #[test]
    fn bad_level_name_is_rejected() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        let config = GraphConfig {
            log_level: Some("loud".to_string()),
            ..GraphConfig::default()
        };
        assert!(matches!(
            config.init_logging(),
            Err(TracerError::InvalidConfig(_))
        ));
        assert_eq!(configured_global_level(), LevelFilter::Off);
    }

    #[test]
    fn init_logging_applies_levels() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        let config = GraphConfig::from_json_str(
            r#"{
                "log_level": "info",
                "module_filters": { "contact_tracer::graph": "trace" }
            }"#,
        )
        .unwrap();
        config.init_logging().unwrap();

        assert_eq!(configured_global_level(), LevelFilter::Info);
        assert_eq!(
            configured_module_level("contact_tracer::graph"),
            Some(LevelFilter::Trace)
        );
        assert_eq!(log::max_level(), LevelFilter::Trace);

        remove_module_filter("contact_tracer::graph");
        set_log_level(LevelFilter::Off);
        assert_eq!(log::max_level(), LevelFilter::Off);
    }

    #[test]
    fn bad_module_level_applies_nothing() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        set_module_filters(&[("contact_tracer::graph", LevelFilter::Info)]);
        let global_before = configured_global_level();

        let config = GraphConfig::from_json_str(
            r#"{
                "log_level": "debug",
                "module_filters": {
                    "contact_tracer::graph": "trace",
                    "contact_tracer::config": "loud"
                }
            }"#,
        )
        .unwrap();
        assert!(matches!(
            config.init_logging(),
            Err(TracerError::InvalidConfig(message)) if message.contains("loud")
        ));

        assert_eq!(configured_global_level(), global_before);
        assert_eq!(
            configured_module_level("contact_tracer::graph"),
            Some(LevelFilter::Info)
        );
        assert_eq!(configured_module_level("contact_tracer::config"), None);

        remove_module_filter("contact_tracer::graph");
    }
}
