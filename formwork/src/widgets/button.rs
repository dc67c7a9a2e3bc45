//! Button widget.

use crate::handler::ClickHandler;
use crate::node::{ButtonNode, Node};

/// Role a button declares inside the actions region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    /// Plain button, passed through unmodified.
    #[default]
    Button,
    /// Triggers the form's submission controller.
    Submit,
    /// Passed through unmodified; forms have no reset operation.
    Reset,
}

/// A button widget builder.
///
/// This is a stateless widget. Inside a form's actions region a
/// submit-typed button gets the form's submit handler attached; every other
/// button keeps its own `on_click`.
///
/// # Example
///
/// ```
/// use formwork::widgets::{Button, ButtonType};
///
/// let submit = Button::new().label("Submit").kind(ButtonType::Submit);
/// assert!(submit.is_submit());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Button {
    label: Option<String>,
    kind: ButtonType,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submit button with the given label.
    pub fn submit(label: impl Into<String>) -> Self {
        Self::new().label(label).kind(ButtonType::Submit)
    }

    /// Set the button label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the button role.
    pub fn kind(mut self, kind: ButtonType) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the button as disabled.
    ///
    /// Disabled buttons ignore presses.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the click handler.
    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(ClickHandler::new(f));
        self
    }

    /// Check if this is a submit button.
    pub fn is_submit(&self) -> bool {
        self.kind == ButtonType::Submit
    }

    /// Build the button node with its own handler.
    pub fn build(&self) -> Node {
        self.build_with(self.on_click.clone())
    }

    /// Build the button node with `on_click` replacing its own handler.
    pub fn build_with(&self, on_click: Option<ClickHandler>) -> Node {
        Node::Button(ButtonNode {
            label: self.label.clone().unwrap_or_default(),
            kind: self.kind,
            disabled: self.disabled,
            on_click,
        })
    }
}
