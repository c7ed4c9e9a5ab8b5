pub mod errors;
pub mod value_objects;

// Re-export commonly used types
pub use errors::ValidationError;
pub use value_objects::*;
