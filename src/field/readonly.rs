use indexmap::IndexSet;
use serde::Serialize;

use super::attributes::{ClassList, HtmlAttributes};
use super::bag::ExtensionBag;
use super::display::FieldDisplayType;
use super::html::Html;

/// Frozen view of a [`FieldConfiguration`](super::FieldConfiguration).
///
/// Produced by [`FieldConfiguration::to_readonly`](super::FieldConfiguration::to_readonly).
/// It owns its own copies of all state and exposes no mutators, so what a
/// template reads cannot change after rendering starts.
#[derive(Debug, Clone, Serialize)]
pub struct ReadonlyFieldConfiguration {
    pub(super) field_name: Option<String>,
    pub(super) attributes: HtmlAttributes,
    pub(super) label: Option<Html>,
    pub(super) has_label: bool,
    pub(super) inline_label: Option<Html>,
    pub(super) has_inline_label: bool,
    pub(super) inline_label_wraps_element: bool,
    pub(super) hint: Option<Html>,
    pub(super) prepended: Vec<Html>,
    pub(super) appended: Vec<Html>,
    pub(super) field_html: Html,
    pub(super) has_field_html_override: bool,
    pub(super) display_type: FieldDisplayType,
    pub(super) true_string: String,
    pub(super) false_string: String,
    pub(super) none_string: String,
    pub(super) format_string: Option<String>,
    pub(super) empty_item_hidden: bool,
    pub(super) label_classes: ClassList,
    pub(super) field_container_classes: ClassList,
    pub(super) validation_classes: ClassList,
    pub(super) excluded_enum_values: IndexSet<String>,
    #[serde(skip)]
    pub(super) bag: ExtensionBag,
}

impl ReadonlyFieldConfiguration {
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// Merged attributes for the field element: generic attributes overlaid
    /// with the dedicated ones. Boolean attributes appear only when set.
    pub fn attributes(&self) -> &HtmlAttributes {
        &self.attributes
    }

    /// The label content, or `None` if there is none or it was suppressed.
    pub fn label(&self) -> Option<&Html> {
        self.label.as_ref().filter(|_| self.has_label)
    }

    pub fn has_label(&self) -> bool {
        self.has_label
    }

    pub fn inline_label(&self) -> Option<&Html> {
        self.inline_label.as_ref().filter(|_| self.has_inline_label)
    }

    pub fn has_inline_label(&self) -> bool {
        self.has_inline_label
    }

    pub fn inline_label_wraps_element(&self) -> bool {
        self.inline_label_wraps_element
    }

    pub fn hint(&self) -> Option<&Html> {
        self.hint.as_ref()
    }

    /// Fragments rendered before the field, first to last.
    pub fn prepended_html(&self) -> &[Html] {
        &self.prepended
    }

    /// Fragments rendered after the field, first to last.
    pub fn appended_html(&self) -> &[Html] {
        &self.appended
    }

    /// The field's own markup, resolved when the snapshot was taken.
    pub fn field_html(&self) -> &Html {
        &self.field_html
    }

    pub fn has_field_html_override(&self) -> bool {
        self.has_field_html_override
    }

    pub fn display_type(&self) -> FieldDisplayType {
        self.display_type
    }

    pub fn true_string(&self) -> &str {
        &self.true_string
    }

    pub fn false_string(&self) -> &str {
        &self.false_string
    }

    pub fn none_string(&self) -> &str {
        &self.none_string
    }

    pub fn format_string(&self) -> Option<&str> {
        self.format_string.as_deref()
    }

    pub fn empty_item_hidden(&self) -> bool {
        self.empty_item_hidden
    }

    pub fn label_classes(&self) -> &ClassList {
        &self.label_classes
    }

    pub fn field_container_classes(&self) -> &ClassList {
        &self.field_container_classes
    }

    pub fn validation_classes(&self) -> &ClassList {
        &self.validation_classes
    }

    pub fn excluded_enum_values(&self) -> &IndexSet<String> {
        &self.excluded_enum_values
    }

    pub fn bag(&self) -> &ExtensionBag {
        &self.bag
    }

    pub fn get_bag_data<T>(&self, key: &str) -> T
    where
        T: std::any::Any + Clone + Default,
    {
        self.bag.get(key)
    }
}
