//! HTML attribute storage with case-insensitive keys.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

const CLASS: &str = "class";

/// An ordered set of class tokens.
///
/// Adding never removes existing tokens and does not de-duplicate, so
/// `add("a").add("b c")` and `add("a b").add("c")` produce the same list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated token in `class_names`.
    pub fn add(&mut self, class_names: &str) -> &mut Self {
        self.tokens
            .extend(class_names.split_ascii_whitespace().map(str::to_owned));
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens joined by single spaces, as written into a `class` attribute.
    pub fn as_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attribute {
    name: String,
    value: String,
}

/// Attribute name to value mapping.
///
/// Keys compare ASCII case-insensitively. The spelling of the first write is
/// kept for output while later writes replace the value, except for `class`
/// whose values are appended with a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    entries: IndexMap<String, Attribute>,
}

impl HtmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = key.into();
        let value = value.into();
        let normalized = name.to_ascii_lowercase();

        match self.entries.get_mut(&normalized) {
            Some(existing) if normalized == CLASS => {
                let mut classes = ClassList::new();
                classes.add(&existing.value).add(&value);
                existing.value = classes.as_string();
            }
            Some(existing) => existing.value = value,
            None => {
                let value = if normalized == CLASS {
                    ClassList::new().add(&value).as_string()
                } else {
                    value
                };
                self.entries.insert(normalized, Attribute { name, value });
            }
        }
        self
    }

    /// Writes `value` under `key`, replacing any existing value, `class` included.
    pub(crate) fn replace(&mut self, key: &str, value: impl Into<String>) {
        let normalized = key.to_ascii_lowercase();
        let value = value.into();
        match self.entries.get_mut(&normalized) {
            Some(existing) => existing.value = value,
            None => {
                self.entries.insert(
                    normalized,
                    Attribute {
                        name: key.to_owned(),
                        value,
                    },
                );
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|attr| attr.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_ascii_lowercase())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries
            .shift_remove(&key.to_ascii_lowercase())
            .map(|attr| attr.value)
    }

    /// Iterates `(name, value)` pairs in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|attr| (attr.name.as_str(), attr.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for HtmlAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut attrs = HtmlAttributes::new();
        attrs.set("data-Role", "first").set("DATA-ROLE", "second");

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("data-role"), Some("second"));
        assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("data-Role", "second")]);
    }

    #[test]
    fn test_class_appends() {
        let mut attrs = HtmlAttributes::new();
        attrs.set("class", "a").set("CLASS", "b  c");

        assert_eq!(attrs.get("class"), Some("a b c"));
    }

    #[test]
    fn test_replace_overwrites_class() {
        let mut attrs = HtmlAttributes::new();
        attrs.set("class", "a");
        attrs.replace("class", "b");

        assert_eq!(attrs.get("class"), Some("b"));
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut attrs = HtmlAttributes::new();
        attrs.set("a", "1").set("b", "2").set("c", "3");
        assert_eq!(attrs.remove("B"), Some("2".to_string()));

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_class_list_ignores_blank_input() {
        let mut classes = ClassList::new();
        classes.add("   ").add("");
        assert!(classes.is_empty());
        assert_eq!(classes.as_string(), "");
    }
}
