//! Region classification for a form's children.
//!
//! The consumer wraps each region explicitly in a [`Child`] variant; the
//! variant is the role marker, so position and count never matter.

use std::fmt;

use crate::field::Field;
use crate::node::Node;
use crate::widgets::Button;

/// A direct child of a form container.
#[derive(Debug)]
pub enum Child {
    /// Title area.
    Header(Header),
    /// The fields.
    Body(Body),
    /// Controls, of which submit buttons are special-cased.
    Actions(Actions),
    /// Anything else; ignored by the form.
    Other(Node),
}

impl From<Header> for Child {
    fn from(header: Header) -> Self {
        Self::Header(header)
    }
}

impl From<Body> for Child {
    fn from(body: Body) -> Self {
        Self::Body(body)
    }
}

impl From<Actions> for Child {
    fn from(actions: Actions) -> Self {
        Self::Actions(actions)
    }
}

/// Header region: a title line.
#[derive(Debug, Clone, Default)]
pub struct Header {
    label: String,
}

impl Header {
    /// Create a header with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Render the header.
    pub fn build(&self) -> Node {
        Node::text(&self.label)
    }
}

/// Body region: the form's fields in declaration order.
#[derive(Default)]
pub struct Body {
    fields: Vec<Box<dyn Field>>,
}

impl Body {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    pub fn field(mut self, field: impl Field + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }

    /// The fields.
    pub fn fields(&self) -> &[Box<dyn Field>] {
        &self.fields
    }
}

impl FromIterator<Box<dyn Field>> for Body {
    fn from_iter<I: IntoIterator<Item = Box<dyn Field>>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.name()).collect();
        f.debug_struct("Body").field("fields", &names).finish()
    }
}

/// Actions region: buttons in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Actions {
    controls: Vec<Button>,
}

impl Actions {
    /// Create an empty actions region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a button.
    pub fn button(mut self, button: Button) -> Self {
        self.controls.push(button);
        self
    }

    /// The buttons.
    pub fn controls(&self) -> &[Button] {
        &self.controls
    }
}

/// The three regions found among a form's children.
///
/// A missing region is `None` and renders as nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormRegions<'a> {
    pub header: Option<&'a Header>,
    pub body: Option<&'a Body>,
    pub actions: Option<&'a Actions>,
}

impl<'a> FormRegions<'a> {
    /// Fields of the body, empty when there is no body.
    pub fn fields(&self) -> &'a [Box<dyn Field>] {
        self.body.map(Body::fields).unwrap_or(&[])
    }

    /// Buttons of the actions region, empty when there are none.
    pub fn controls(&self) -> &'a [Button] {
        self.actions.map(Actions::controls).unwrap_or(&[])
    }
}

/// Split a form's direct children into header, body and actions.
///
/// The first child of each role wins; later ones are ignored.
pub fn classify(children: &[Child]) -> FormRegions<'_> {
    let mut regions = FormRegions::default();

    for (index, child) in children.iter().enumerate() {
        let duplicate = match child {
            Child::Header(header) => claim(&mut regions.header, header),
            Child::Body(body) => claim(&mut regions.body, body),
            Child::Actions(actions) => claim(&mut regions.actions, actions),
            Child::Other(_) => false,
        };
        if duplicate {
            log::debug!("Ignoring duplicate form region at child {}: {:?}", index, child);
        }
    }

    regions
}

/// Store `region` if the slot is free; report whether it was taken.
fn claim<'a, T>(slot: &mut Option<&'a T>, region: &'a T) -> bool {
    if slot.is_some() {
        return true;
    }
    *slot = Some(region);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::TextInput;

    #[test]
    fn test_missing_regions_are_none() {
        let regions = classify(&[]);
        assert!(regions.header.is_none());
        assert!(regions.fields().is_empty());
        assert!(regions.controls().is_empty());
    }

    #[test]
    fn test_first_region_of_each_role_wins() {
        let children = vec![
            Child::Other(Node::text("ignored")),
            Body::new().field(TextInput::new("first")).into(),
            Header::new("Title").into(),
            Body::new().field(TextInput::new("second")).into(),
            Header::new("Other title").into(),
        ];

        let regions = classify(&children);

        assert_eq!(regions.header.map(Header::label), Some("Title"));
        let names: Vec<&str> = regions.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["first"]);
        assert!(regions.actions.is_none());
    }
}
