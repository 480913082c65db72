//! Path parsing, data-context resolution and format interpolation.

pub mod context;
pub mod path;
pub mod template;

pub use context::DataContext;
pub use path::{BindingPath, PathSegment};
pub use template::{MissingBehavior, resolve_template, stringify, validate_format};
