//! Field validation for forms.
//!
//! Validators are plain synchronous predicates grouped into a
//! [`ValidatorChain`] per field. The engine functions decide per-field and
//! whole-form validity from the current [`FormData`](crate::FormData).
//!
//! # Example
//!
//! ```
//! use formwork::validation::{ValidatorChain, is_field_valid, rules};
//! use formwork::FieldValue;
//!
//! let chain = ValidatorChain::new()
//!     .with(rules::required())
//!     .with(rules::contains("@"));
//!
//! assert!(is_field_valid(&FieldValue::from("a@b.com"), &chain));
//! assert!(!is_field_valid(&FieldValue::Absent, &chain));
//! assert!(is_field_valid(&FieldValue::Absent, &ValidatorChain::new()));
//! ```

mod engine;
mod result;
pub mod rules;
mod validator;

pub use engine::{is_field_valid, is_form_valid, validate_form};
pub use result::{FieldError, ValidationResult};
pub use validator::{Validator, ValidatorChain};
