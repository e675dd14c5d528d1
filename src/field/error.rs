use thiserror::Error;

/// Boxed error returned by a deferred field content resolver.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while freezing a [`FieldConfiguration`](super::FieldConfiguration).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("no field content was supplied{}", field_suffix(.field))]
    MissingFieldContent { field: Option<String> },

    #[error("field content resolver failed{}: {source}", field_suffix(.field))]
    Resolver {
        field: Option<String>,
        source: BoxError,
    },
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" for field '{name}'"),
        None => String::new(),
    }
}
