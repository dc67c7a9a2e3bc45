//! Per-field and whole-form validity.

use super::result::{FieldError, ValidationResult};
use super::ValidatorChain;
use crate::field::FieldSpec;
use crate::value::{FieldValue, FormData};

/// True iff every validator in the chain accepts `value`.
pub fn is_field_valid(value: &FieldValue, validators: &ValidatorChain) -> bool {
    validators.is_valid(value)
}

/// True iff every field validates against its value in `values`.
///
/// Unset fields are checked as [`FieldValue::Absent`].
pub fn is_form_valid(fields: &[FieldSpec], values: &FormData) -> bool {
    fields
        .iter()
        .all(|field| is_field_valid(values.get(&field.name), &field.validators))
}

/// Validate every field and collect the failures.
///
/// Unlike [`is_form_valid`] this does not short-circuit, so the result lists
/// every invalid field in declaration order.
pub fn validate_form(fields: &[FieldSpec], values: &FormData) -> ValidationResult {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(|field| {
            let value = values.get(&field.name);
            let failed = field.validators.failing(value);
            if failed.is_empty() {
                return None;
            }
            Some(FieldError {
                field_name: field.name.clone(),
                message: field.error_message.clone(),
                failed_rules: failed.into_iter().map(String::from).collect(),
            })
        })
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}
