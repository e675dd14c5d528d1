pub mod context;
pub mod defaults;
mod error;
pub mod field;

pub use context::{FormContext, FormContextBuilder};
pub use defaults::{DefaultsError, DefaultsLoader, FieldDefaults};
pub use error::Error;
pub use field::{
    BoxError, ClassList, ExtensionBag, FieldConfiguration, FieldDisplayType, FieldError,
    FieldTemplate, Html, HtmlAttributes, ReadonlyFieldConfiguration,
};
