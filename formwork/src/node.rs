//! Node types for the rendered view tree.

use crate::handler::{ChangeHandler, ClickHandler};
use crate::value::FieldValue;
use crate::widgets::ButtonType;

/// A node in the view tree
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String },

    /// Container with vertical layout
    Column { children: Vec<Node> },

    /// Container with horizontal layout
    Row { children: Vec<Node> },

    /// Text input field
    Input(InputNode),

    /// Clickable button
    Button(ButtonNode),
}

/// A rendered text input.
#[derive(Debug, Clone, Default)]
pub struct InputNode {
    /// Field name, forwarded with every change
    pub name: String,
    /// Label shown before the value
    pub label: String,
    /// Current text value
    pub value: String,
    /// Placeholder text
    pub placeholder: String,
    /// Error message, present only while the error is visible
    pub error: Option<String>,
    /// Handler for value changes
    pub on_change: Option<ChangeHandler>,
}

impl InputNode {
    /// Simulate the user replacing the input's text.
    pub fn change(&self, raw: impl Into<String>) {
        if let Some(handler) = &self.on_change {
            handler.call(&self.name, FieldValue::Text(raw.into()));
        }
    }

    /// Check if the error message is visible.
    pub fn shows_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A rendered button.
#[derive(Debug, Clone, Default)]
pub struct ButtonNode {
    /// Button label
    pub label: String,
    /// Declared role
    pub kind: ButtonType,
    /// Disabled buttons ignore presses
    pub disabled: bool,
    /// Click handler
    pub on_click: Option<ClickHandler>,
}

impl ButtonNode {
    /// Simulate the user activating the button.
    ///
    /// Returns `false` if the button is disabled or has no handler.
    pub fn press(&self) -> bool {
        match &self.on_click {
            Some(handler) if !self.disabled => {
                handler.call();
                true
            }
            _ => false,
        }
    }
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Create a column
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column { children }
    }

    /// Create a row
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row { children }
    }

    /// Check if this node renders nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Direct children of a container node.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Column { children } | Self::Row { children } => children,
            _ => &[],
        }
    }

    /// All inputs in depth-first order.
    pub fn inputs(&self) -> Vec<&InputNode> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Self::Input(input) = node {
                out.push(input);
            }
        });
        out
    }

    /// All buttons in depth-first order.
    pub fn buttons(&self) -> Vec<&ButtonNode> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Self::Button(button) = node {
                out.push(button);
            }
        });
        out
    }

    /// First input with the given field name.
    pub fn find_input(&self, name: &str) -> Option<&InputNode> {
        self.inputs().into_iter().find(|input| input.name == name)
    }

    /// First button with the given label.
    pub fn find_button(&self, label: &str) -> Option<&ButtonNode> {
        self.buttons().into_iter().find(|button| button.label == label)
    }

    /// First submit-typed button.
    pub fn submit_button(&self) -> Option<&ButtonNode> {
        self.buttons()
            .into_iter()
            .find(|button| button.kind == ButtonType::Submit)
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Plain-text rendering, one line per input, button row or text.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        self.write_lines(&mut lines);
        lines.join("\n")
    }

    fn write_lines(&self, lines: &mut Vec<String>) {
        match self {
            Self::Empty => {}
            Self::Text { content } => lines.push(content.clone()),
            Self::Column { children } => {
                for child in children {
                    child.write_lines(lines);
                }
            }
            Self::Row { children } => {
                let parts: Vec<String> = children
                    .iter()
                    .map(Node::to_text)
                    .filter(|s| !s.is_empty())
                    .collect();
                if !parts.is_empty() {
                    lines.push(parts.join(" "));
                }
            }
            Self::Input(input) => {
                let shown = if input.value.is_empty() {
                    format!("<{}>", input.placeholder)
                } else {
                    format!("[{}]", input.value)
                };
                lines.push(format!("{}: {}", input.label, shown));
                if let Some(error) = &input.error {
                    lines.push(format!("  ! {error}"));
                }
            }
            Self::Button(button) => lines.push(format!("[ {} ]", button.label)),
        }
    }
}
