//! The form container.
//!
//! [`Form`] owns a form instance's store and turns the consumer's children
//! into a rendered [`Node`] tree: body fields get their error visibility and
//! the shared change handler injected, submit buttons get the submission
//! controller attached.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::compose::{Child, FormRegions, classify};
use crate::config::{DuplicatePolicy, FormConfig};
use crate::error::FormError;
use crate::field::{FieldProps, FieldSpec};
use crate::handler::{ChangeHandler, ClickHandler};
use crate::node::Node;
use crate::state::{FormPhase, FormStore};
use crate::validation::{ValidationResult, is_field_valid, validate_form};
use crate::value::{FieldValue, FormData};

/// Unique identifier for a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(Uuid);

impl FormId {
    /// Create a new unique form ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External callback receiving the values of a successful submission.
pub type SubmitCallback = Arc<dyn Fn(FormData) + Send + Sync>;

/// What a submit press led to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field was valid; the callback got this snapshot.
    Submitted(FormData),
    /// At least one field was invalid; the callback was not called.
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    /// Check if the callback was invoked.
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Runs a submit press against a field list resolved at render time.
#[derive(Clone)]
struct SubmitController {
    form: Arc<str>,
    store: FormStore,
    fields: Arc<[FieldSpec]>,
    on_submit: SubmitCallback,
}

impl SubmitController {
    fn on_submit_pressed(&self) -> SubmitOutcome {
        self.store.mark_submitted();

        let values = self.store.values();
        let result = validate_form(&self.fields, &values);
        if result.is_invalid() {
            log::warn!(
                "Form '{}' submit rejected, invalid fields: {:?}",
                self.form,
                result.invalid_fields()
            );
            return SubmitOutcome::Rejected(result);
        }

        log::info!("Form '{}' submitted with {} value(s)", self.form, values.len());
        (self.on_submit)(values.clone());
        SubmitOutcome::Submitted(values)
    }
}

/// A form instance.
///
/// # Example
///
/// ```
/// use formwork::prelude::*;
///
/// let form = Form::new(|data| println!("{:?}", data));
/// let children: Vec<Child> = vec![
///     Header::new("Sign up").into(),
///     Body::new()
///         .field(TextInput::new("email").validator(rules::contains("@")))
///         .into(),
///     Actions::new().button(Button::submit("Submit")).into(),
/// ];
///
/// let view = form.render(&children).unwrap();
/// view.find_input("email").unwrap().change("a@b.com");
/// assert!(form.submit(&children).unwrap().is_submitted());
/// ```
pub struct Form {
    id: FormId,
    config: FormConfig,
    store: FormStore,
    on_change: ChangeHandler,
    on_submit: SubmitCallback,
}

impl Form {
    /// Create a form with the default config.
    pub fn new<F>(on_submit: F) -> Self
    where
        F: Fn(FormData) + Send + Sync + 'static,
    {
        Self::with_config(FormConfig::default(), on_submit)
    }

    /// Create a form with the given config.
    pub fn with_config<F>(config: FormConfig, on_submit: F) -> Self
    where
        F: Fn(FormData) + Send + Sync + 'static,
    {
        let id = FormId::new();
        let store = FormStore::new();
        let on_change = change_handler(&config.name, store.clone());
        log::debug!("Created form '{}' ({})", config.name, id);

        Self {
            id,
            config,
            store,
            on_change,
            on_submit: Arc::new(on_submit),
        }
    }

    /// Get the form ID.
    pub fn id(&self) -> FormId {
        self.id
    }

    /// Get the config.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Get the form's store.
    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Snapshot of the current values.
    pub fn values(&self) -> FormData {
        self.store.values()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        self.store.phase()
    }

    /// Check if a re-render is due.
    pub fn needs_render(&self) -> bool {
        self.store.is_dirty()
    }

    /// Apply a field change, the same way a rendered field does.
    pub fn change(&self, name: &str, value: impl Into<FieldValue>) {
        self.on_change.call(name, value.into());
    }

    /// Resolve the body fields currently declared in `children`.
    pub fn fields(&self, children: &[Child]) -> Result<Vec<FieldSpec>, FormError> {
        self.resolve_fields(&classify(children))
    }

    /// Whether a field's error is visible right now.
    pub fn shows_error(&self, field: &FieldSpec) -> bool {
        self.store.is_submitted()
            && !is_field_valid(&self.store.value(&field.name), &field.validators)
    }

    /// Press submit against the fields declared in `children` right now.
    ///
    /// Marks the form submitted, validates every field and calls the submit
    /// callback only if all of them pass.
    pub fn submit(&self, children: &[Child]) -> Result<SubmitOutcome, FormError> {
        let fields = self.fields(children)?;
        Ok(self.controller(fields).on_submit_pressed())
    }

    /// Render the form.
    ///
    /// Output is a column of the header text, a column of the fields and a
    /// row of the action buttons; absent regions are left out.
    pub fn render(&self, children: &[Child]) -> Result<Node, FormError> {
        let regions = classify(children);
        let fields = self.resolve_fields(&regions)?;

        let values = self.store.values();
        let submitted = self.store.is_submitted();
        let mut nodes = Vec::new();

        if let Some(header) = regions.header {
            nodes.push(header.build());
        }

        if regions.body.is_some() {
            let inputs = regions
                .fields()
                .iter()
                .zip(&fields)
                .map(|(field, spec)| {
                    let value = values.get(&spec.name).clone();
                    let show_error = submitted && !is_field_valid(&value, &spec.validators);
                    field.render(FieldProps {
                        show_error,
                        error_message: spec.error_message.clone(),
                        value,
                        on_change: self.on_change.clone(),
                    })
                })
                .collect();
            nodes.push(Node::column(inputs));
        }

        if regions.actions.is_some() {
            let controller = self.controller(fields);
            let on_submit = ClickHandler::new(move || {
                controller.on_submit_pressed();
            });
            let buttons = regions
                .controls()
                .iter()
                .map(|button| {
                    if button.is_submit() {
                        button.build_with(Some(on_submit.clone()))
                    } else {
                        button.build()
                    }
                })
                .collect();
            nodes.push(Node::row(buttons));
        }

        self.store.clear_dirty();
        Ok(Node::column(nodes))
    }

    fn controller(&self, fields: Vec<FieldSpec>) -> SubmitController {
        SubmitController {
            form: Arc::from(self.config.name.as_str()),
            store: self.store.clone(),
            fields: fields.into(),
            on_submit: Arc::clone(&self.on_submit),
        }
    }

    fn resolve_fields(&self, regions: &FormRegions<'_>) -> Result<Vec<FieldSpec>, FormError> {
        let mut seen = HashSet::new();
        let mut specs = Vec::with_capacity(regions.fields().len());

        for field in regions.fields() {
            let spec = FieldSpec::of(field.as_ref(), &self.config.default_error_message);
            if !seen.insert(spec.name.clone()) {
                match self.config.duplicate_names {
                    DuplicatePolicy::Share => log::warn!(
                        "Form '{}' declares field '{}' more than once; the fields share one value",
                        self.config.name,
                        spec.name
                    ),
                    DuplicatePolicy::Reject => return Err(FormError::duplicate_field(spec.name)),
                }
            }
            specs.push(spec);
        }

        Ok(specs)
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

fn change_handler(form: &str, store: FormStore) -> ChangeHandler {
    let form = form.to_string();
    ChangeHandler::new(move |name, value| {
        log::debug!("Form '{}' field '{}' changed: {:?}", form, name, value);
        store.set_value(name, value);
    })
}
