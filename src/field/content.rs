//! Where a field's own markup comes from.

use std::fmt;

use super::error::{BoxError, FieldError};
use super::html::Html;

pub(crate) type Resolver = Box<dyn Fn() -> Result<Html, BoxError>>;

/// The authoritative source of a field's markup.
#[derive(Default)]
pub(crate) enum FieldContent {
    #[default]
    Unset,
    Resolved(Html),
    Deferred(Resolver),
}

/// Which source supplied the markup of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentSource {
    Override,
    Resolved,
    Deferred,
}

impl fmt::Debug for FieldContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Resolved(html) => f.debug_tuple("Resolved").field(html).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Picks the field markup: override, then resolved value, then deferred resolver.
///
/// The resolver, if reached, runs exactly once per call.
pub(crate) fn resolve(
    content: &FieldContent,
    override_html: Option<&Html>,
    field: Option<&str>,
) -> Result<(Html, ContentSource), FieldError> {
    if let Some(html) = override_html {
        return Ok((html.clone(), ContentSource::Override));
    }

    match content {
        FieldContent::Resolved(html) => Ok((html.clone(), ContentSource::Resolved)),
        FieldContent::Deferred(resolver) => match resolver() {
            Ok(html) => Ok((html, ContentSource::Deferred)),
            Err(source) => {
                tracing::debug!(field = ?field, error = %source, "field content resolver failed");
                Err(FieldError::Resolver {
                    field: field.map(str::to_owned),
                    source,
                })
            }
        },
        FieldContent::Unset => Err(FieldError::MissingFieldContent {
            field: field.map(str::to_owned),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_override_skips_resolver() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let content = FieldContent::Deferred(Box::new(move || {
            counter.set(counter.get() + 1);
            Ok(Html::raw("<input>"))
        }));

        let (html, source) = resolve(&content, Some(&Html::raw("<b>x</b>")), None).unwrap();

        assert_eq!(html.as_str(), "<b>x</b>");
        assert_eq!(source, ContentSource::Override);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unset_is_missing_content() {
        let result = resolve(&FieldContent::Unset, None, Some("age"));
        assert!(matches!(
            result,
            Err(FieldError::MissingFieldContent { field: Some(ref name) }) if name == "age"
        ));
    }
}
