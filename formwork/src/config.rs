//! Form configuration types.

use crate::widgets::DEFAULT_ERROR_MESSAGE;

/// Per-form configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Display name used in log lines.
    pub name: String,

    /// Message for invalid fields that declare none.
    pub default_error_message: String,

    /// What to do when two body fields share a name.
    pub duplicate_names: DuplicatePolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: "Form".to_string(),
            default_error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            duplicate_names: DuplicatePolicy::default(),
        }
    }
}

impl FormConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the fallback error message.
    pub fn default_error_message(mut self, msg: impl Into<String>) -> Self {
        self.default_error_message = msg.into();
        self
    }

    /// Set the duplicate name policy.
    pub fn duplicate_names(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }

    /// Refuse to render or submit forms with duplicate field names.
    pub fn reject_duplicates(mut self) -> Self {
        self.duplicate_names = DuplicatePolicy::Reject;
        self
    }
}

/// Handling of body fields that declare the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fields share one value slot; a change to either shows in both.
    /// A warning is logged on every render that sees the collision.
    #[default]
    Share,
    /// Rendering or submitting fails with `FormError::DuplicateField`.
    Reject,
}
