//! Entry point that hands out field configurations seeded with shared defaults.

use crate::defaults::FieldDefaults;
use crate::field::FieldConfiguration;
use crate::Error;

/// Creates [`FieldConfiguration`]s that start from one set of [`FieldDefaults`].
///
/// ## Example
///
/// ```no_run
/// use field_config::{FieldDefaults, FormContext};
///
/// let ctx = FormContext::builder()
///     .with_defaults(
///         FieldDefaults::loader()
///             .with_file("fields.toml", true)
///             .build()?,
///     )
///     .build()?;
///
/// let mut age = ctx.field("age");
/// age.set_id("age").set_field_content("42");
/// let snapshot = age.to_readonly()?;
/// # Ok::<(), field_config::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FormContext {
    defaults: FieldDefaults,
}

impl FormContext {
    pub fn builder() -> FormContextBuilder {
        FormContextBuilder { defaults: None }
    }

    pub fn defaults(&self) -> &FieldDefaults {
        &self.defaults
    }

    /// Starts the configuration of the field called `name`.
    ///
    /// Deriving an id or label from the name is left to the caller.
    pub fn field(&self, name: impl Into<String>) -> FieldConfiguration {
        FieldConfiguration::from_defaults(Some(name.into()), &self.defaults)
    }
}

/// Builder for constructing a [`FormContext`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct FormContextBuilder {
    defaults: Option<FieldDefaults>,
}

impl FormContextBuilder {
    /// Sets the defaults every field starts from, usually the result of
    /// [`FieldDefaults::loader`].
    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Returns an error if no defaults were provided.
    pub fn build(self) -> Result<FormContext, Error> {
        Ok(FormContext {
            defaults: self.defaults.ok_or(Error::MissingDefaults)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldError;

    fn german() -> FieldDefaults {
        FieldDefaults {
            true_string: "Ja".into(),
            false_string: "Nein".into(),
            class: Some("form-control".into()),
            label_class: Some("control-label".into()),
            validation_class: Some("invalid-feedback".into()),
            inline_label_wraps_element: true,
            ..FieldDefaults::default()
        }
    }

    #[test]
    fn test_build_requires_defaults() {
        let result = FormContext::builder().build();
        assert!(matches!(result, Err(Error::MissingDefaults)));
    }

    #[test]
    fn test_field_is_seeded_from_defaults() {
        let ctx = FormContext::builder().with_defaults(german()).build().unwrap();

        let mut field = ctx.field("accept");
        field.add_class("wide").set_field_content("");
        let snapshot = field.to_readonly().unwrap();

        assert_eq!(snapshot.field_name(), Some("accept"));
        assert_eq!(snapshot.true_string(), "Ja");
        assert_eq!(snapshot.false_string(), "Nein");
        assert_eq!(snapshot.none_string(), "");
        assert_eq!(snapshot.attributes().get("class"), Some("form-control wide"));
        assert_eq!(snapshot.label_classes().as_string(), "control-label");
        assert!(snapshot.field_container_classes().is_empty());
        assert_eq!(snapshot.validation_classes().as_string(), "invalid-feedback");
        assert!(snapshot.inline_label_wraps_element());
    }

    #[test]
    fn test_fields_do_not_share_state() {
        let ctx = FormContext::builder().with_defaults(german()).build().unwrap();

        let mut first = ctx.field("a");
        first.with_true_as("Yep").set_field_content("");
        let mut second = ctx.field("b");
        second.set_field_content("");

        assert_eq!(first.to_readonly().unwrap().true_string(), "Yep");
        assert_eq!(second.to_readonly().unwrap().true_string(), "Ja");
    }

    #[test]
    fn test_missing_content_converts_to_top_level_error() {
        let ctx = FormContext::builder().with_defaults(german()).build().unwrap();
        let field = ctx.field("empty");

        let err: Error = field.to_readonly().unwrap_err().into();
        assert!(matches!(err, Error::Field(FieldError::MissingFieldContent { .. })));
    }
}
