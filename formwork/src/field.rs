//! The contract between the form container and its fields.
//!
//! A field never reads form-wide state. The container resolves everything a
//! field needs on every render and passes it in as [`FieldProps`]; the field
//! hands value changes back through the injected [`ChangeHandler`].

use crate::handler::ChangeHandler;
use crate::node::Node;
use crate::validation::ValidatorChain;
use crate::value::FieldValue;

/// A named, independently validated unit of form input.
pub trait Field: Send + Sync {
    /// Name under which the value is stored. Expected to be unique per form.
    fn name(&self) -> &str;

    /// Validators the value must all satisfy.
    fn validators(&self) -> &ValidatorChain;

    /// Author-supplied error message, if any.
    fn error_message(&self) -> Option<&str> {
        None
    }

    /// Render the field with the props injected by the container.
    ///
    /// Implementations must show `props.error_message` only when
    /// `props.show_error` is set, and must call `props.on_change` with their
    /// own name on every value change.
    fn render(&self, props: FieldProps) -> Node;
}

/// Props the container injects into a field on every render.
#[derive(Debug, Clone)]
pub struct FieldProps {
    /// Whether the field's error is currently visible.
    pub show_error: bool,
    /// Message to show when the error is visible.
    pub error_message: String,
    /// Current value from the form store.
    pub value: FieldValue,
    /// Shared change handler forwarding into the form store.
    pub on_change: ChangeHandler,
}

/// Resolved, owned view of a field used by validation and submission.
///
/// Captured per render so a submit handler can outlive the borrow of the
/// consumer's children.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Field validators.
    pub validators: ValidatorChain,
    /// Message reported when the field is invalid.
    pub error_message: String,
}

impl FieldSpec {
    /// Create a spec directly.
    pub fn new(
        name: impl Into<String>,
        validators: impl Into<ValidatorChain>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            validators: validators.into(),
            error_message: error_message.into(),
        }
    }

    /// Resolve a field, falling back to `default_message`.
    pub fn of(field: &dyn Field, default_message: &str) -> Self {
        Self {
            name: field.name().to_string(),
            validators: field.validators().clone(),
            error_message: field.error_message().unwrap_or(default_message).to_string(),
        }
    }
}
