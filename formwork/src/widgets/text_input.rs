//! Text input widget.

use crate::field::{Field, FieldProps};
use crate::node::{InputNode, Node};
use crate::validation::{Validator, ValidatorChain};
use crate::value::FieldValue;

/// Message shown for an invalid field that declares none.
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid data input";

/// A single-line text field.
///
/// Stateless: the current value, error visibility and change handler all
/// come from the form container through [`FieldProps`].
///
/// # Example
///
/// ```
/// use formwork::validation::rules;
/// use formwork::widgets::TextInput;
///
/// let email = TextInput::new("email")
///     .label("Email")
///     .validator(rules::contains("@"))
///     .error_message("Please enter a valid email");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    name: String,
    label: Option<String>,
    placeholder: Option<String>,
    error_message: Option<String>,
    validators: ValidatorChain,
}

impl TextInput {
    /// Create a text input for the named field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the label. Defaults to the name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder. Defaults to the name.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the message shown when the value is invalid.
    pub fn error_message(mut self, msg: impl Into<String>) -> Self {
        self.error_message = Some(msg.into());
        self
    }

    /// Add a validator.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

impl Field for TextInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn validators(&self) -> &ValidatorChain {
        &self.validators
    }

    fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn render(&self, props: FieldProps) -> Node {
        let value = match props.value {
            FieldValue::Absent => String::new(),
            other => other.to_text().unwrap_or_default(),
        };

        Node::Input(InputNode {
            name: self.name.clone(),
            label: self.label.clone().unwrap_or_else(|| self.name.clone()),
            value,
            placeholder: self.placeholder.clone().unwrap_or_else(|| self.name.clone()),
            error: props.show_error.then_some(props.error_message),
            on_change: Some(props.on_change),
        })
    }
}
