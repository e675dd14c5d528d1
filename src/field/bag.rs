//! Free-form extension data attached to a field.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Typed key-value storage for data the core configuration does not model.
///
/// Reads never fail: a missing key or a value of another type yields the
/// requested type's default. Stored values are immutable; `set` swaps in a new
/// value, so a cloned bag is unaffected by later writes to the original.
#[derive(Clone, Default)]
pub struct ExtensionBag {
    entries: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ExtensionBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing whatever was there.
    pub fn set<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) -> &mut Self {
        self.entries.insert(key.into(), Arc::new(value));
        self
    }

    /// Returns a clone of the value under `key`, or `T::default()` if the key
    /// is absent or holds a different type.
    pub fn get<T: Any + Clone + Default>(&self, key: &str) -> T {
        self.try_get::<T>(key).cloned().unwrap_or_default()
    }

    pub fn try_get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ExtensionBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("ExtensionBag").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_roundtrip() {
        let mut bag = ExtensionBag::new();
        bag.set("max_items", 12_u32).set("tooltip", String::from("Pick one"));

        assert_eq!(bag.get::<u32>("max_items"), 12);
        assert_eq!(bag.get::<String>("tooltip"), "Pick one");
    }

    #[test]
    fn test_missing_key_yields_default() {
        let bag = ExtensionBag::new();
        assert_eq!(bag.get::<i64>("nope"), 0);
        assert_eq!(bag.get::<String>("nope"), "");
        assert!(bag.try_get::<i64>("nope").is_none());
    }

    #[test]
    fn test_type_mismatch_yields_default() {
        let mut bag = ExtensionBag::new();
        bag.set("count", 3_i32);

        assert_eq!(bag.get::<u64>("count"), 0);
        assert!(!bag.get::<bool>("count"));
        assert_eq!(bag.get::<i32>("count"), 3);
    }

    #[test]
    fn test_clone_is_isolated_from_later_writes() {
        let mut bag = ExtensionBag::new();
        bag.set("tag", "before");
        let copy = bag.clone();
        bag.set("tag", "after").set("extra", true);

        assert_eq!(copy.get::<&str>("tag"), "before");
        assert!(!copy.contains_key("extra"));
    }
}
