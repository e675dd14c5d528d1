use serde::{Deserialize, Deserializer};

use super::builder::DefaultsLoader;

/// House-wide starting values for every [`FieldConfiguration`](crate::FieldConfiguration).
///
/// Missing keys keep their built-in values, so a defaults file only needs to
/// list what it changes:
///
/// ```toml
/// true_string = "Ja"
/// false_string = "Nein"
/// class = "form-control"
/// label_class = "control-label"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldDefaults {
    pub true_string: String,
    pub false_string: String,
    pub none_string: String,
    pub class: Option<String>,
    pub label_class: Option<String>,
    pub field_container_class: Option<String>,
    pub validation_class: Option<String>,
    #[serde(deserialize_with = "bool_or_text")]
    pub inline_label_wraps_element: bool,
}

/// Accepts a TOML boolean or the text `true`/`false` in any case, which is
/// how the value arrives from an environment variable.
fn bool_or_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrText {
        Bool(bool),
        Text(String),
    }

    match BoolOrText::deserialize(deserializer)? {
        BoolOrText::Bool(value) => Ok(value),
        BoolOrText::Text(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        BoolOrText::Text(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        BoolOrText::Text(text) => Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&text),
            &"true or false",
        )),
    }
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            true_string: "Yes".to_string(),
            false_string: "No".to_string(),
            none_string: String::new(),
            class: None,
            label_class: None,
            field_container_class: None,
            validation_class: None,
            inline_label_wraps_element: false,
        }
    }
}

impl FieldDefaults {
    /// Starts a loader that layers TOML files and environment variables.
    pub fn loader() -> DefaultsLoader {
        DefaultsLoader::default()
    }
}
