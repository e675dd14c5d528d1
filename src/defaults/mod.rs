//! Loading of house-wide field defaults.

mod builder;
mod env;
mod error;
mod field;
mod file;
mod source;

pub use builder::DefaultsLoader;
pub use error::DefaultsError;
pub use field::FieldDefaults;
pub use source::DefaultsSource;
