mod content_url;

pub use content_url::*;
