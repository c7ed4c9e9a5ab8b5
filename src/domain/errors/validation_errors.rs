use thiserror::Error as ThisError;

/// Validation errors for domain value objects
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate failed the content URL rules. Carries the name of
    /// the offending parameter; parser internals are not exposed.
    #[error("Invalid content URL (parameter: {parameter})")]
    InvalidContentUrl { parameter: &'static str },
}
