//! Validators and validator chains.

use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

/// Type alias for the predicate closure behind a validator.
type Predicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// A named, pure predicate over a single field value.
///
/// Validators must be synchronous and side-effect free. The name only shows
/// up in logs and `Debug` output.
///
/// # Example
///
/// ```
/// use formwork::validation::Validator;
/// use formwork::FieldValue;
///
/// let has_at = Validator::new("has-at", |v: &FieldValue| {
///     v.as_text().is_some_and(|t| t.contains('@'))
/// });
/// assert!(has_at.check(&FieldValue::from("a@b.com")));
/// assert!(!has_at.check(&FieldValue::Absent));
/// ```
#[derive(Clone)]
pub struct Validator {
    name: Arc<str>,
    predicate: Predicate,
}

impl Validator {
    /// Create a validator from a predicate.
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            predicate: Arc::new(f),
        }
    }

    /// Get the validator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the predicate against a value.
    pub fn check(&self, value: &FieldValue) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name).finish()
    }
}

/// Ordered set of validators a field value must all satisfy.
///
/// The aggregate is a logical AND, so evaluation order never changes the
/// outcome. An empty chain accepts every value, including `Absent`.
#[derive(Debug, Clone, Default)]
pub struct ValidatorChain {
    validators: Vec<Validator>,
}

impl ValidatorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator.
    pub fn with(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Append a validator in place.
    pub fn push(&mut self, validator: Validator) {
        self.validators.push(validator);
    }

    /// Check a value against every validator.
    pub fn is_valid(&self, value: &FieldValue) -> bool {
        self.validators.iter().all(|v| v.check(value))
    }

    /// Names of the validators rejecting `value`.
    pub fn failing(&self, value: &FieldValue) -> Vec<&str> {
        self.validators
            .iter()
            .filter(|v| !v.check(value))
            .map(Validator::name)
            .collect()
    }
}

impl From<Validator> for ValidatorChain {
    fn from(validator: Validator) -> Self {
        Self {
            validators: vec![validator],
        }
    }
}

impl From<Vec<Validator>> for ValidatorChain {
    fn from(validators: Vec<Validator>) -> Self {
        Self { validators }
    }
}

impl FromIterator<Validator> for ValidatorChain {
    fn from_iter<I: IntoIterator<Item = Validator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}
