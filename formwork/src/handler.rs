//! Handler types injected into rendered nodes.
//!
//! This module provides:
//! - `ChangeHandler`: the shared `(name, value)` callback every field receives
//! - `ClickHandler`: the activation callback attached to buttons

use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

// =============================================================================
// ChangeHandler
// =============================================================================

/// Callback a field invokes on every value change with its own name.
#[derive(Clone)]
pub struct ChangeHandler(Arc<dyn Fn(&str, FieldValue) + Send + Sync>);

impl ChangeHandler {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, FieldValue) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Forward a change.
    pub fn call(&self, name: &str, value: FieldValue) {
        (self.0)(name, value)
    }
}

impl fmt::Debug for ChangeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeHandler")
    }
}

// =============================================================================
// ClickHandler
// =============================================================================

/// Callback invoked when a button is activated.
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn() + Send + Sync>);

impl ClickHandler {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the handler.
    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler")
    }
}
