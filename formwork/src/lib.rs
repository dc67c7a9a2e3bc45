//! Declarative form composition.
//!
//! A [`Form`] takes a header, a body of fields and a row of actions, tracks
//! the field values, validates them, and calls the submit callback only
//! once every field passes. Fields never see form-level state; the form
//! injects their error visibility and change handler on every render.

pub mod compose;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod handler;
pub mod node;
pub mod state;
pub mod validation;
pub mod value;
pub mod widgets;

pub use error::FormError;
pub use form::{Form, FormId, SubmitOutcome};
pub use value::{FieldValue, FormData};

pub mod prelude {
    pub use crate::compose::{Actions, Body, Child, Header, classify};
    pub use crate::config::{DuplicatePolicy, FormConfig};
    pub use crate::error::FormError;
    pub use crate::field::{Field, FieldProps, FieldSpec};
    pub use crate::form::{Form, FormId, SubmitOutcome};
    pub use crate::handler::{ChangeHandler, ClickHandler};
    pub use crate::node::{ButtonNode, InputNode, Node};
    pub use crate::state::{FormPhase, FormState, FormStore};
    pub use crate::validation::{
        FieldError, ValidationResult, Validator, ValidatorChain, is_field_valid, is_form_valid,
        rules, validate_form,
    };
    pub use crate::value::{FieldValue, FormData};
    pub use crate::widgets::{Button, ButtonType, TextInput};
}
