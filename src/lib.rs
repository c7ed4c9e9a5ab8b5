pub mod domain;

// Re-export key types for convenience

// Domain types - the content URL value object and its validation rule
pub use domain::{
    ContentUrl,
    // Errors
    ValidationError,
    is_valid_content_url,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{ContentUrl, ValidationError, is_valid_content_url};
}
