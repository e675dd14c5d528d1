use std::collections::HashMap;

use indexmap::IndexSet;

use super::attributes::{ClassList, HtmlAttributes};
use super::bag::ExtensionBag;
use super::content::{resolve, FieldContent};
use super::display::FieldDisplayType;
use super::error::{BoxError, FieldError};
use super::html::Html;
use super::readonly::ReadonlyFieldConfiguration;
use crate::defaults::FieldDefaults;

/// Attributes owned by a dedicated setter rather than the generic map.
#[derive(Debug, Clone, Default)]
struct DedicatedAttributes {
    id: Option<String>,
    classes: ClassList,
    rows: Option<String>,
    cols: Option<String>,
    placeholder: Option<String>,
    min: Option<String>,
    max: Option<String>,
    step: Option<String>,
    tab_index: Option<String>,
    disabled: bool,
    readonly: bool,
    required: bool,
    autofocus: bool,
    /// Spelling of the first generic write per lowercased dedicated key.
    spellings: HashMap<&'static str, String>,
}

impl DedicatedAttributes {
    fn name<'a>(&'a self, key: &'static str) -> &'a str {
        self.spellings.get(key).map_or(key, String::as_str)
    }
}

/// Mutable description of how one form field should be rendered.
///
/// Every setter mutates in place and returns `&mut Self`, so calls chain.
/// Rendering reads from the immutable snapshot produced by
/// [`to_readonly`](Self::to_readonly), never from the builder itself.
///
/// ## Attribute precedence
///
/// `id`, `class`, `rows`, `cols`, `placeholder`, `min`, `max`, `step`,
/// `tabindex`, `disabled`, `readonly`, `required` and `autofocus` have
/// dedicated setters. Writing one of them through
/// [`set_attribute`](Self::set_attribute) is the same as calling the
/// dedicated setter, and in the snapshot dedicated values win over anything in
/// the generic attribute map. `class` always appends. A dedicated key keeps
/// the spelling of its first `set_attribute` write (`TabIndex` stays
/// `TabIndex`); keys only ever set through dedicated setters are lowercase.
///
/// ## Example
///
/// ```
/// use field_config::{FieldConfiguration, Html};
///
/// let mut field = FieldConfiguration::for_field("age");
/// field
///     .set_id("age")
///     .add_class("form-control")
///     .append(Html::raw("<small>years</small>"))
///     .set_field_content("42");
///
/// let snapshot = field.to_readonly()?;
/// assert_eq!(snapshot.attributes().get("class"), Some("form-control"));
/// assert_eq!(snapshot.field_html().as_str(), "42");
/// # Ok::<(), field_config::FieldError>(())
/// ```
#[derive(Debug)]
pub struct FieldConfiguration {
    name: Option<String>,
    attributes: HtmlAttributes,
    dedicated: DedicatedAttributes,
    label: Option<Html>,
    has_label: bool,
    inline_label: Option<Html>,
    has_inline_label: bool,
    inline_label_wraps_element: bool,
    hint: Option<Html>,
    prepended: Vec<Html>,
    appended: Vec<Html>,
    display_type: FieldDisplayType,
    true_string: String,
    false_string: String,
    none_string: String,
    format_string: Option<String>,
    empty_item_hidden: bool,
    label_classes: ClassList,
    field_container_classes: ClassList,
    validation_classes: ClassList,
    excluded_enum_values: IndexSet<String>,
    content: FieldContent,
    field_html_override: Option<Html>,
    bag: ExtensionBag,
}

impl Default for FieldConfiguration {
    fn default() -> Self {
        Self::from_defaults(None, &FieldDefaults::default())
    }
}

impl FieldConfiguration {
    /// Creates an unnamed configuration with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for the field called `name`.
    pub fn for_field(name: impl Into<String>) -> Self {
        Self::from_defaults(Some(name.into()), &FieldDefaults::default())
    }

    /// Creates a configuration seeded from loaded [`FieldDefaults`].
    pub fn from_defaults(name: Option<String>, defaults: &FieldDefaults) -> Self {
        let mut dedicated = DedicatedAttributes::default();
        let mut label_classes = ClassList::new();
        let mut field_container_classes = ClassList::new();
        let mut validation_classes = ClassList::new();
        if let Some(class) = &defaults.class {
            dedicated.classes.add(class);
        }
        if let Some(class) = &defaults.label_class {
            label_classes.add(class);
        }
        if let Some(class) = &defaults.field_container_class {
            field_container_classes.add(class);
        }
        if let Some(class) = &defaults.validation_class {
            validation_classes.add(class);
        }

        Self {
            name,
            attributes: HtmlAttributes::new(),
            dedicated,
            label: None,
            has_label: true,
            inline_label: None,
            has_inline_label: true,
            inline_label_wraps_element: defaults.inline_label_wraps_element,
            hint: None,
            prepended: Vec::new(),
            appended: Vec::new(),
            display_type: FieldDisplayType::Default,
            true_string: defaults.true_string.clone(),
            false_string: defaults.false_string.clone(),
            none_string: defaults.none_string.clone(),
            format_string: None,
            empty_item_hidden: false,
            label_classes,
            field_container_classes,
            validation_classes,
            excluded_enum_values: IndexSet::new(),
            content: FieldContent::Unset,
            field_html_override: None,
            bag: ExtensionBag::new(),
        }
    }

    /// The field name this configuration was created for, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.dedicated.id = Some(id.into());
        self
    }

    /// Appends space-separated class names to the `class` attribute.
    pub fn add_class(&mut self, class_names: impl AsRef<str>) -> &mut Self {
        self.dedicated.classes.add(class_names.as_ref());
        self
    }

    /// Writes an attribute, routing keys with a dedicated setter to that setter.
    ///
    /// For the boolean attributes (`disabled`, `readonly`, `required`,
    /// `autofocus`) only `false` (any case) clears the attribute. Any other
    /// value, the empty string included, sets it, as presence does in HTML.
    pub fn set_attribute(&mut self, key: impl AsRef<str>, value: impl ToString) -> &mut Self {
        let key = key.as_ref();
        let value = value.to_string();
        let normalized = key.to_ascii_lowercase();
        if let Some(&dedicated) = DEDICATED_KEYS.iter().find(|k| **k == normalized) {
            self.dedicated
                .spellings
                .entry(dedicated)
                .or_insert_with(|| key.to_owned());
        }
        match normalized.as_str() {
            "id" => self.set_id(value),
            "class" => self.add_class(value),
            "rows" => self.with_dedicated(|d| d.rows = Some(value)),
            "cols" => self.with_dedicated(|d| d.cols = Some(value)),
            "placeholder" => self.set_placeholder(value),
            "min" => self.set_min(value),
            "max" => self.set_max(value),
            "step" => self.set_step(value),
            "tabindex" => self.with_dedicated(|d| d.tab_index = Some(value)),
            "disabled" => self.set_disabled(is_truthy(&value)),
            "readonly" => self.set_readonly(is_truthy(&value)),
            "required" => self.set_required(is_truthy(&value)),
            "autofocus" => self.set_autofocus(is_truthy(&value)),
            _ => {
                self.attributes.set(key, value);
                self
            }
        }
    }

    /// Writes each pair through [`set_attribute`](Self::set_attribute), in order.
    pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        for (key, value) in attributes {
            self.set_attribute(key, value);
        }
        self
    }

    pub fn set_rows(&mut self, rows: i64) -> &mut Self {
        self.with_dedicated(|d| d.rows = Some(rows.to_string()))
    }

    pub fn set_cols(&mut self, cols: i64) -> &mut Self {
        self.with_dedicated(|d| d.cols = Some(cols.to_string()))
    }

    pub fn set_min(&mut self, min: impl ToString) -> &mut Self {
        self.with_dedicated(|d| d.min = Some(min.to_string()))
    }

    pub fn set_max(&mut self, max: impl ToString) -> &mut Self {
        self.with_dedicated(|d| d.max = Some(max.to_string()))
    }

    pub fn set_step(&mut self, step: impl ToString) -> &mut Self {
        self.with_dedicated(|d| d.step = Some(step.to_string()))
    }

    pub fn set_tab_index(&mut self, index: i32) -> &mut Self {
        self.with_dedicated(|d| d.tab_index = Some(index.to_string()))
    }

    /// Sets or clears `disabled`. `false` removes the attribute.
    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.with_dedicated(|d| d.disabled = disabled)
    }

    /// Sets or clears `readonly`. `false` removes the attribute.
    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        self.with_dedicated(|d| d.readonly = readonly)
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.with_dedicated(|d| d.required = required)
    }

    pub fn set_autofocus(&mut self, autofocus: bool) -> &mut Self {
        self.with_dedicated(|d| d.autofocus = autofocus)
    }

    pub fn set_placeholder(&mut self, text: impl Into<String>) -> &mut Self {
        self.dedicated.placeholder = Some(text.into());
        self
    }

    /// Sets the label content and turns the label back on.
    pub fn set_label(&mut self, content: impl Into<Html>) -> &mut Self {
        self.label = Some(content.into());
        self.has_label = true;
        self
    }

    /// Sets the inline label content and turns the inline label back on.
    pub fn set_inline_label(&mut self, content: impl Into<Html>) -> &mut Self {
        self.inline_label = Some(content.into());
        self.has_inline_label = true;
        self
    }

    /// Suppresses the label. Content set earlier is kept but not rendered.
    pub fn without_label(&mut self) -> &mut Self {
        self.has_label = false;
        self
    }

    pub fn without_inline_label(&mut self) -> &mut Self {
        self.has_inline_label = false;
        self
    }

    pub fn inline_label_wraps_element(&mut self, wraps: bool) -> &mut Self {
        self.inline_label_wraps_element = wraps;
        self
    }

    pub fn as_radio_list(&mut self) -> &mut Self {
        self.display_type = FieldDisplayType::RadioList;
        self
    }

    pub fn as_checkbox_list(&mut self) -> &mut Self {
        self.display_type = FieldDisplayType::CheckboxList;
        self
    }

    pub fn as_drop_down(&mut self) -> &mut Self {
        self.display_type = FieldDisplayType::DropDown;
        self
    }

    pub fn with_true_as(&mut self, text: impl Into<String>) -> &mut Self {
        self.true_string = text.into();
        self
    }

    pub fn with_false_as(&mut self, text: impl Into<String>) -> &mut Self {
        self.false_string = text.into();
        self
    }

    pub fn with_none_as(&mut self, text: impl Into<String>) -> &mut Self {
        self.none_string = text.into();
        self
    }

    /// Sets the field's own markup to an already-rendered value.
    ///
    /// An [`override_field_html`](Self::override_field_html) still takes
    /// precedence, whichever of the two was called last.
    pub fn set_field_content(&mut self, content: impl Into<Html>) -> &mut Self {
        self.content = FieldContent::Resolved(content.into());
        self
    }

    /// Defers producing the field's own markup until the snapshot is taken.
    ///
    /// `resolver` runs once per [`to_readonly`](Self::to_readonly) call, and
    /// not at all when an override is installed.
    pub fn set_field_content_with<F, E>(&mut self, resolver: F) -> &mut Self
    where
        F: Fn() -> Result<Html, E> + 'static,
        E: Into<BoxError>,
    {
        self.content = FieldContent::Deferred(Box::new(move || -> Result<Html, BoxError> {
            resolver().map_err(Into::into)
        }));
        self
    }

    pub fn with_hint(&mut self, content: impl Into<Html>) -> &mut Self {
        self.hint = Some(content.into());
        self
    }

    pub fn prepend(&mut self, content: impl Into<Html>) -> &mut Self {
        self.prepended.push(content.into());
        self
    }

    pub fn append(&mut self, content: impl Into<Html>) -> &mut Self {
        self.appended.push(content.into());
        self
    }

    /// Replaces the field's own markup regardless of any content source.
    pub fn override_field_html(&mut self, content: impl Into<Html>) -> &mut Self {
        self.field_html_override = Some(content.into());
        self
    }

    pub fn with_format_string(&mut self, format: impl Into<String>) -> &mut Self {
        self.format_string = Some(format.into());
        self
    }

    pub fn hide_empty_item(&mut self) -> &mut Self {
        self.empty_item_hidden = true;
        self
    }

    pub fn add_label_class(&mut self, class_names: impl AsRef<str>) -> &mut Self {
        self.label_classes.add(class_names.as_ref());
        self
    }

    pub fn add_field_container_class(&mut self, class_names: impl AsRef<str>) -> &mut Self {
        self.field_container_classes.add(class_names.as_ref());
        self
    }

    pub fn add_validation_class(&mut self, class_names: impl AsRef<str>) -> &mut Self {
        self.validation_classes.add(class_names.as_ref());
        self
    }

    /// Adds enum values to leave out of generated option lists.
    pub fn exclude_enum_values<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.excluded_enum_values
            .extend(values.into_iter().map(|value| value.to_string()));
        self
    }

    pub fn set_bag_data<T>(&mut self, key: impl Into<String>, value: T) -> &mut Self
    where
        T: std::any::Any + Send + Sync,
    {
        self.bag.set(key, value);
        self
    }

    /// Reads extension data, falling back to `T::default()`.
    pub fn get_bag_data<T>(&self, key: &str) -> T
    where
        T: std::any::Any + Clone + Default,
    {
        self.bag.get(key)
    }

    pub fn bag(&self) -> &ExtensionBag {
        &self.bag
    }

    pub fn bag_mut(&mut self) -> &mut ExtensionBag {
        &mut self.bag
    }

    /// Freezes the current state into an immutable snapshot.
    ///
    /// The field markup is resolved here: an override wins, then a value set
    /// with [`set_field_content`](Self::set_field_content), then the deferred
    /// resolver, which is invoked exactly once. The snapshot owns copies of
    /// everything, so later changes to this builder never reach it.
    pub fn to_readonly(&self) -> Result<ReadonlyFieldConfiguration, FieldError> {
        let (field_html, source) = resolve(
            &self.content,
            self.field_html_override.as_ref(),
            self.name.as_deref(),
        )?;
        tracing::trace!(field = ?self.name, ?source, "froze field configuration");

        Ok(ReadonlyFieldConfiguration {
            field_name: self.name.clone(),
            attributes: self.merged_attributes(),
            label: self.label.clone(),
            has_label: self.has_label,
            inline_label: self.inline_label.clone(),
            has_inline_label: self.has_inline_label,
            inline_label_wraps_element: self.inline_label_wraps_element,
            hint: self.hint.clone(),
            prepended: self.prepended.clone(),
            appended: self.appended.clone(),
            field_html,
            has_field_html_override: self.field_html_override.is_some(),
            display_type: self.display_type,
            true_string: self.true_string.clone(),
            false_string: self.false_string.clone(),
            none_string: self.none_string.clone(),
            format_string: self.format_string.clone(),
            empty_item_hidden: self.empty_item_hidden,
            label_classes: self.label_classes.clone(),
            field_container_classes: self.field_container_classes.clone(),
            validation_classes: self.validation_classes.clone(),
            excluded_enum_values: self.excluded_enum_values.clone(),
            bag: self.bag.clone(),
        })
    }

    fn with_dedicated(&mut self, update: impl FnOnce(&mut DedicatedAttributes)) -> &mut Self {
        update(&mut self.dedicated);
        self
    }

    /// Generic attributes first, then dedicated values on top.
    fn merged_attributes(&self) -> HtmlAttributes {
        let mut merged = self.attributes.clone();
        let d = &self.dedicated;

        let valued = [
            ("id", d.id.clone()),
            ("class", (!d.classes.is_empty()).then(|| d.classes.as_string())),
            ("rows", d.rows.clone()),
            ("cols", d.cols.clone()),
            ("placeholder", d.placeholder.clone()),
            ("min", d.min.clone()),
            ("max", d.max.clone()),
            ("step", d.step.clone()),
            ("tabindex", d.tab_index.clone()),
        ];
        for (key, value) in valued {
            if let Some(value) = value {
                merged.replace(d.name(key), value);
            }
        }

        let flags = [
            ("disabled", d.disabled),
            ("readonly", d.readonly),
            ("required", d.required),
            ("autofocus", d.autofocus),
        ];
        for (key, on) in flags {
            if on {
                merged.replace(d.name(key), key);
            }
        }

        merged
    }
}

const DEDICATED_KEYS: [&str; 13] = [
    "id",
    "class",
    "rows",
    "cols",
    "placeholder",
    "min",
    "max",
    "step",
    "tabindex",
    "disabled",
    "readonly",
    "required",
    "autofocus",
];

fn is_truthy(value: &str) -> bool {
    !value.eq_ignore_ascii_case("false")
}
