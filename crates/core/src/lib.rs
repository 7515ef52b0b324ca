pub mod emitter;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use emitter::{CssText, CssTextOptions, DeclarationList, Emitter, Raw};
pub use error::{Result, TransformError};
pub use types::{Declaration, Template};
