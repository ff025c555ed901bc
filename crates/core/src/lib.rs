pub mod error;
pub mod markup;
pub mod options;

pub use error::{GizmoError, Result};
pub use markup::MarkupOptions;
pub use options::GizmoOptions;
