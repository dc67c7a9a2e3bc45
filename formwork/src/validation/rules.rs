//! Built-in validation rules.
//!
//! Every rule treats `Absent` as a failure except where noted, so a field
//! with any of these rules must be touched before it can pass.

use regex::Regex;

use super::Validator;
use crate::error::FormError;
use crate::value::FieldValue;

/// Require the value to match a regex pattern.
///
/// Text is tested as-is, numbers against their decimal rendering.
pub fn pattern(pattern: &str) -> Result<Validator, FormError> {
    let re = compile(pattern)?;
    Ok(Validator::new(format!("pattern({pattern})"), move |v| {
        v.to_text().is_some_and(|text| re.is_match(&text))
    }))
}

/// Require the value to match every pattern.
pub fn all_patterns<'a>(
    patterns: impl IntoIterator<Item = &'a str>,
) -> Result<Validator, FormError> {
    let mut sources = Vec::new();
    let mut compiled = Vec::new();
    for p in patterns {
        compiled.push(compile(p)?);
        sources.push(p);
    }
    let name = format!("all_patterns({})", sources.join(", "));
    Ok(Validator::new(name, move |v| {
        v.to_text()
            .is_some_and(|text| compiled.iter().all(|re| re.is_match(&text)))
    }))
}

/// Require the field to be present and non-blank.
pub fn required() -> Validator {
    Validator::new("required", |v| match v {
        FieldValue::Text(text) => !text.trim().is_empty(),
        FieldValue::Number(_) => true,
        FieldValue::Absent => false,
    })
}

/// Require the value to contain a substring.
pub fn contains(substr: impl Into<String>) -> Validator {
    let substr = substr.into();
    Validator::new(format!("contains({substr:?})"), move |v| {
        v.to_text().is_some_and(|text| text.contains(&substr))
    })
}

/// Require minimum length (in characters).
pub fn min_length(min: usize) -> Validator {
    Validator::new(format!("min_length({min})"), move |v| {
        v.to_text().is_some_and(|text| text.chars().count() >= min)
    })
}

/// Require maximum length (in characters).
///
/// An absent value has no length and passes.
pub fn max_length(max: usize) -> Validator {
    Validator::new(format!("max_length({max})"), move |v| {
        v.to_text().is_none_or(|text| text.chars().count() <= max)
    })
}

/// Require a valid email address.
pub fn email() -> Validator {
    Validator::new("email", |v| {
        v.as_text()
            .is_some_and(email_address::EmailAddress::is_valid)
    })
}

/// Require a number, or numeric text, within `min..=max`.
pub fn number_between(min: f64, max: f64) -> Validator {
    Validator::new(format!("number_between({min}, {max})"), move |v| {
        let n = match v {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
            FieldValue::Absent => None,
        };
        n.is_some_and(|n| (min..=max).contains(&n))
    })
}

fn compile(pattern: &str) -> Result<Regex, FormError> {
    Regex::new(pattern).map_err(|e| FormError::invalid_pattern(pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rejects_absent() {
        let v = pattern("^wooga\\.name").unwrap();
        assert!(v.check(&"wooga.name.ann".into()));
        assert!(!v.check(&"ann".into()));
        assert!(!v.check(&FieldValue::Absent));
    }

    #[test]
    fn test_pattern_tests_numbers_as_text() {
        let v = pattern("^[0-9]+$").unwrap();
        assert!(v.check(&FieldValue::from(12i64)));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = pattern("(unclosed").unwrap_err();
        assert!(matches!(err, FormError::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_all_patterns() {
        let v = all_patterns(["[0-9]", "[a-z]", "[A-Z]", "^.{8,}$"]).unwrap();
        assert!(v.check(&"Passw0rdX".into()));
        assert!(!v.check(&"password1".into()));
        assert!(!v.check(&"Pw0".into()));
    }

    #[test]
    fn test_required() {
        let v = required();
        assert!(v.check(&"x".into()));
        assert!(!v.check(&"   ".into()));
        assert!(!v.check(&FieldValue::Absent));
        assert!(v.check(&FieldValue::Number(0.0)));
    }

    #[test]
    fn test_lengths() {
        assert!(min_length(3).check(&"abc".into()));
        assert!(!min_length(3).check(&"ab".into()));
        assert!(!min_length(0).check(&FieldValue::Absent));
        assert!(max_length(2).check(&"ab".into()));
        assert!(!max_length(2).check(&"abc".into()));
        assert!(max_length(2).check(&FieldValue::Absent));
    }

    #[test]
    fn test_email() {
        assert!(email().check(&"ann@example.com".into()));
        assert!(!email().check(&"ann".into()));
        assert!(!email().check(&FieldValue::Absent));
    }

    #[test]
    fn test_number_between() {
        let v = number_between(1.0, 10.0);
        assert!(v.check(&FieldValue::Number(5.0)));
        assert!(v.check(&" 10 ".into()));
        assert!(!v.check(&"eleven".into()));
        assert!(!v.check(&FieldValue::Absent));
    }
}
