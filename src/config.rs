//! Configuration for the ggspec command line tool
//!
//! ```toml
//! [output]
//! pretty = true
//!
//! [theme]
//! name = "minimal"
//! legend_position = "bottom"
//! axis_title = { blank = true }
//! ```
//!
//! The `[theme]` table is converted verbatim into an option map and installed
//! as the ambient theme by [`Config::apply`].

use std::path::Path;

use toml_edit::{DocumentMut, Item, Table, Value};
use tracing::{debug, warn};

use crate::plot::{context, OptionMap, OptionValue};
use crate::{GgspecError, Result};

const KNOWN_TABLES: &[&str] = &["output", "theme"];

/// Settings loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Theme options installed as the ambient theme
    pub theme: Option<OptionMap>,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document = source
            .parse::<DocumentMut>()
            .map_err(|e| GgspecError::ConfigError(e.to_string()))?;

        for (key, _) in document.iter() {
            if !KNOWN_TABLES.contains(&key) {
                warn!(key, "Ignoring unknown configuration table");
            }
        }

        let pretty = match document.get("output").and_then(|output| output.get("pretty")) {
            None => false,
            Some(item) => item.as_bool().ok_or_else(|| {
                GgspecError::ConfigError("output.pretty must be a boolean".to_string())
            })?,
        };

        let theme = match document.get("theme") {
            None => None,
            Some(Item::Table(table)) => Some(table_to_options(table)),
            Some(Item::Value(Value::InlineTable(table))) => Some(
                table
                    .iter()
                    .map(|(key, value)| (key, value_to_option(value)))
                    .collect(),
            ),
            Some(_) => {
                return Err(GgspecError::ConfigError(
                    "theme must be a table".to_string(),
                ))
            }
        };

        Ok(Self { pretty, theme })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), pretty = config.pretty, "Loaded configuration");
        Ok(config)
    }

    /// Install the configured theme as the ambient theme
    pub fn apply(&self) {
        if let Some(theme) = &self.theme {
            context::set_theme(theme.clone());
        }
    }
}

fn table_to_options(table: &Table) -> OptionMap {
    table
        .iter()
        .filter_map(|(key, item)| item_to_option(item).map(|value| (key, value)))
        .collect()
}

fn item_to_option(item: &Item) -> Option<OptionValue> {
    match item {
        Item::None => None,
        Item::Value(value) => Some(value_to_option(value)),
        Item::Table(table) => Some(OptionValue::Map(table_to_options(table))),
        Item::ArrayOfTables(tables) => Some(OptionValue::Array(
            tables
                .iter()
                .map(|table| OptionValue::Map(table_to_options(table)))
                .collect(),
        )),
    }
}

fn value_to_option(value: &Value) -> OptionValue {
    match value {
        Value::String(s) => OptionValue::String(s.value().clone()),
        Value::Integer(i) => OptionValue::Integer(*i.value()),
        Value::Float(f) => OptionValue::Number(*f.value()),
        Value::Boolean(b) => OptionValue::Boolean(*b.value()),
        Value::Datetime(dt) => OptionValue::String(dt.value().to_string()),
        Value::Array(items) => OptionValue::Array(items.iter().map(value_to_option).collect()),
        Value::InlineTable(table) => OptionValue::Map(
            table
                .iter()
                .map(|(key, value)| (key, value_to_option(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[output]
pretty = true

[theme]
name = "minimal"
legend_position = "bottom"
axis_title = { blank = true }
plot_inset = [4, 8.5]
"#;

    #[test]
    fn test_parse_sample() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert!(config.pretty);

        let theme = config.theme.unwrap();
        assert_eq!(
            theme.keys().collect::<Vec<_>>(),
            vec!["name", "legend_position", "axis_title", "plot_inset"]
        );
        let axis_title = theme.get("axis_title").and_then(OptionValue::as_map).unwrap();
        assert_eq!(axis_title.get("blank"), Some(&OptionValue::Boolean(true)));
        assert_eq!(
            theme.get("plot_inset"),
            Some(&OptionValue::Array(vec![
                OptionValue::Integer(4),
                OptionValue::Number(8.5)
            ]))
        );
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml_str("[output]\npretty = \"yes\""),
            Err(GgspecError::ConfigError(_))
        ));
        assert!(matches!(
            Config::from_toml_str("theme = 3"),
            Err(GgspecError::ConfigError(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[output"),
            Err(GgspecError::ConfigError(_))
        ));
    }

    #[test]
    fn test_unknown_tables_are_ignored() {
        let config = Config::from_toml_str("[renderer]\nbackend = \"svg\"").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.pretty);
        assert!(config.theme.is_some());

        let missing = Config::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(GgspecError::Io(_))));
    }

    #[test]
    fn test_apply_installs_theme() {
        let _guard = context::test_lock();
        let config = Config::from_toml_str(SAMPLE).unwrap();
        config.apply();
        let theme = context::theme().unwrap();
        assert_eq!(theme.get("name"), Some(&OptionValue::from("minimal")));
        context::clear_theme();
    }
}
