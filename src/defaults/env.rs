use std::ffi::OsString;

use toml::{Table, Value};

use super::source::DefaultsSource;
use super::DefaultsError;

/// Reads defaults from `PREFIX<separator>KEY` environment variables.
///
/// `KEY` is lowercased and becomes one top-level key, so
/// `FIELDS__TRUE_STRING=1` sets `true_string` to the string `"1"`. Values are
/// always strings; typed fields parse them when the defaults are
/// deserialized. An empty separator means the key follows the prefix
/// directly. Variables whose name or value is not UTF-8 are ignored.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    fn values_from<I>(&self, vars: I) -> Table
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);

        vars.into_iter()
            .filter_map(|(key, value)| {
                let (key, value) = (key.into_string().ok()?, value.into_string().ok()?);
                let name = key.strip_prefix(&prefix_with_sep)?;
                if name.is_empty() {
                    return None;
                }
                Some((name.to_lowercase(), Value::String(value)))
            })
            .collect()
    }
}

impl DefaultsSource for EnvSource {
    fn values(&self) -> Result<Table, DefaultsError> {
        let table = self.values_from(std::env::vars_os());
        tracing::debug!(prefix = %self.prefix, keys = table.len(), "read field defaults from environment");
        Ok(table)
    }
}
