//! Field rendering configuration and its frozen snapshot.

mod attributes;
mod bag;
mod builder;
mod content;
mod display;
mod error;
mod html;
mod readonly;
mod template;

pub use attributes::{ClassList, HtmlAttributes};
pub use bag::ExtensionBag;
pub use builder::FieldConfiguration;
pub use display::FieldDisplayType;
pub use error::{BoxError, FieldError};
pub use html::Html;
pub use readonly::ReadonlyFieldConfiguration;
pub use template::FieldTemplate;
