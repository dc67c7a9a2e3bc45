//! Form error types.

/// Errors raised while building or driving a form.
///
/// A field failing its validators is not an error; see
/// [`ValidationResult`](crate::validation::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Two body fields declare the same name under `DuplicatePolicy::Reject`.
    #[error("Field '{name}' is declared more than once")]
    DuplicateField { name: String },

    /// A pattern validator was given a regex that does not compile.
    #[error("Invalid validation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl FormError {
    /// Creates a new duplicate field error.
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::DuplicateField { name: name.into() }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
