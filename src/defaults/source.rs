use toml::Table;

use super::DefaultsError;

/// Something that contributes top-level `FieldDefaults` keys.
///
/// Each source yields a flat table; the loader overlays them in order, so a
/// key from a later source replaces the same key from an earlier one.
pub trait DefaultsSource: std::fmt::Debug {
    fn values(&self) -> Result<Table, DefaultsError>;
}
