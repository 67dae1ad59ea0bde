//! Property-based tests for config persistence.
//!
//! Any valid `AppConfig` written by the ConfigEngine must load back unchanged,
//! and `set_value` must agree with direct field assignment.

use articleview::services::config_engine::{ConfigEngine, ConfigEngineTrait};
use articleview::types::config::{AppConfig, ContentConfig, LoggingConfig, WindowConfig};
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn arb_config() -> impl Strategy<Value = AppConfig> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,20}",
        200u32..4000,
        200u32..3000,
        any::<bool>(),
        proptest::option::of("[a-z/]{1,20}\\.txt"),
        prop_oneof![Just("info"), Just("debug"), Just("warn"), Just("articleview=trace")],
    )
        .prop_map(|(title, width, height, devtools, article_path, filter)| AppConfig {
            window: WindowConfig { title, width, height, devtools },
            content: ContentConfig { article_path },
            logging: LoggingConfig { filter: filter.to_string() },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn config_serde_roundtrip(config in arb_config()) {
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn set_value_persists_across_engines(config in arb_config()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut engine = ConfigEngine::new(Some(path.clone()));
        engine.load().unwrap();
        engine.set_value("window.title", json!(config.window.title)).unwrap();
        engine.set_value("window.width", json!(config.window.width)).unwrap();
        engine.set_value("window.height", json!(config.window.height)).unwrap();
        engine.set_value("window.devtools", json!(config.window.devtools)).unwrap();
        engine.set_value("content.article_path", json!(config.content.article_path)).unwrap();
        engine.set_value("logging.filter", json!(config.logging.filter)).unwrap();

        let mut reloaded = ConfigEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().unwrap(), config);
    }
}
