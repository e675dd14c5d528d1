use std::path::Path;

use super::env::EnvSource;
use super::file::FileSource;
use super::source::DefaultsSource;
use super::{DefaultsError, FieldDefaults};

/// Loads [`FieldDefaults`] from layered TOML files and environment variables.
///
/// Sources are overlaid key by key in registration order, later ones
/// overriding earlier ones. Keys that are not `FieldDefaults` fields make
/// [`build`](Self::build) fail, wherever they came from.
///
/// ## Example
///
/// ```no_run
/// use field_config::FieldDefaults;
///
/// // built-in values -> site file -> FIELDS__* variables -> local file
/// let defaults = FieldDefaults::loader()
///     .with_file("config/fields.toml", true)
///     .with_env("FIELDS", "__")
///     .with_file("config/fields.local.toml", false)
///     .build()?;
/// # Ok::<(), field_config::DefaultsError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "loaders do nothing until .build() is called"]
pub struct DefaultsLoader {
    sources: Vec<Box<dyn DefaultsSource>>,
}

impl DefaultsLoader {
    /// Adds a TOML file.
    ///
    /// If `required` is `true`, the build fails when the file doesn't exist.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds environment variables named `PREFIX<separator>KEY`.
    ///
    /// `KEY` is lowercased. Values are taken as strings, and
    /// `inline_label_wraps_element` accepts `true`/`false` in any case.
    pub fn with_env(self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix, separator))
    }

    pub fn with_source(mut self, source: impl DefaultsSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads and overlays every source, then deserializes the result once.
    pub fn build(self) -> Result<FieldDefaults, DefaultsError> {
        let mut merged = toml::Table::new();

        for source in &self.sources {
            merged.extend(source.values()?);
        }

        let value = toml::Value::Table(merged);
        value.try_into().map_err(DefaultsError::DeserializeError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[derive(Debug)]
    struct Fixed(Vec<(&'static str, toml::Value)>);

    impl DefaultsSource for Fixed {
        fn values(&self) -> Result<toml::Table, DefaultsError> {
            Ok(self
                .0
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect())
        }
    }

    // Each test uses its own prefix so parallel tests never see each other's variables.
    fn set_env(vars: &[(&str, &str)]) {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
    }

    #[test]
    fn test_no_sources_gives_builtin_defaults() {
        let defaults = FieldDefaults::loader().build().unwrap();
        assert_eq!(defaults, FieldDefaults::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let base = toml_file("true_string = \"Ja\"\nfalse_string = \"Nein\"\nclass = \"form-control\"\n");
        let local = toml_file("false_string = \"Nee\"\n");

        let defaults = FieldDefaults::loader()
            .with_file(base.path(), true)
            .with_file(local.path(), true)
            .with_file("/nonexistent/fields.toml", false)
            .build()
            .unwrap();

        assert_eq!(defaults.true_string, "Ja");
        assert_eq!(defaults.false_string, "Nee");
        assert_eq!(defaults.none_string, "");
        assert_eq!(defaults.class.as_deref(), Some("form-control"));
    }

    #[test]
    fn test_custom_source_layers_over_file() {
        let base = toml_file("inline_label_wraps_element = false\nlabel_class = \"a\"\n");

        let defaults = FieldDefaults::loader()
            .with_file(base.path(), true)
            .with_source(Fixed(vec![
                ("inline_label_wraps_element", toml::Value::Boolean(true)),
                ("label_class", toml::Value::String("b".into())),
            ]))
            .build()
            .unwrap();

        assert!(defaults.inline_label_wraps_element);
        assert_eq!(defaults.label_class.as_deref(), Some("b"));
    }

    #[test]
    fn test_required_file_missing() {
        let result = FieldDefaults::loader()
            .with_file("/nonexistent/fields.toml", true)
            .build();
        assert!(matches!(result, Err(DefaultsError::FileNotFound(_))));
    }

    #[test]
    fn test_wrong_value_type_fails_deserialize() {
        let file = toml_file("true_string = 1\n");
        let result = FieldDefaults::loader().with_file(file.path(), true).build();
        assert!(matches!(result, Err(DefaultsError::DeserializeError(_))));
    }

    #[test]
    fn test_env_values_are_strings_end_to_end() {
        set_env(&[
            ("FCENVSTR__TRUE_STRING", "1"),
            ("FCENVSTR__FALSE_STRING", "0"),
            ("FCENVSTR__NONE_STRING", "false"),
            ("FCENVSTR__CLASS", "1.5"),
        ]);

        let defaults = FieldDefaults::loader()
            .with_env("FCENVSTR", "__")
            .build()
            .unwrap();

        assert_eq!(defaults.true_string, "1");
        assert_eq!(defaults.false_string, "0");
        assert_eq!(defaults.none_string, "false");
        assert_eq!(defaults.class.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_env_bool_field_parses_and_overrides_file() {
        let base = toml_file("inline_label_wraps_element = false\ntrue_string = \"Ja\"\n");
        set_env(&[("FCENVBOOL__INLINE_LABEL_WRAPS_ELEMENT", "TRUE")]);

        let defaults = FieldDefaults::loader()
            .with_file(base.path(), true)
            .with_env("FCENVBOOL", "__")
            .build()
            .unwrap();

        assert!(defaults.inline_label_wraps_element);
        assert_eq!(defaults.true_string, "Ja");
    }

    #[test]
    fn test_env_bool_field_rejects_other_text() {
        set_env(&[("FCENVBAD__INLINE_LABEL_WRAPS_ELEMENT", "sometimes")]);

        let result = FieldDefaults::loader().with_env("FCENVBAD", "__").build();
        assert!(matches!(result, Err(DefaultsError::DeserializeError(_))));
    }

    #[test]
    fn test_nested_env_key_is_rejected() {
        set_env(&[("FCENVNEST__LABEL__CLASS", "x")]);

        let result = FieldDefaults::loader().with_env("FCENVNEST", "__").build();
        assert!(matches!(result, Err(DefaultsError::DeserializeError(_))));
    }

    #[test]
    fn test_misspelled_file_key_is_rejected() {
        let file = toml_file("label_clas = \"control-label\"\n");

        let result = FieldDefaults::loader().with_file(file.path(), true).build();
        match result {
            Err(DefaultsError::DeserializeError(e)) => {
                assert!(e.to_string().contains("label_clas"), "{e}");
            }
            other => panic!("expected unknown key error, got {other:?}"),
        }
    }
}
