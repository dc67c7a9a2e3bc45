use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::value::{FieldValue, FormData};

/// Shared state cell with interior mutability.
///
/// `State<T>` is cheap to clone; clones observe the same value. Writes raise
/// a dirty flag that the owner clears once it has re-rendered.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Read the value through a closure without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&*guard),
            Err(poisoned) => f(&*poisoned.into_inner()),
        }
    }

    /// Update the value using a closure.
    ///
    /// The closure reports whether it changed anything; only a change marks
    /// the state dirty.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let changed = f(&mut guard);
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        changed
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Everything a form instance remembers between renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Current field values by name.
    pub values: FormData,
    /// Whether submit was pressed at least once.
    pub submitted: bool,
}

/// Where a form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// No submit attempt yet; no errors are shown.
    #[default]
    Pristine,
    /// Submit was pressed; errors show live for invalid fields.
    Attempted,
}

/// Sole owner of a form's [`FormState`].
///
/// Handles are shared between the form container and the change and submit
/// handlers it injects into rendered nodes. There is no reset: a fresh form
/// starts with a fresh store.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: State<FormState>,
}

impl FormStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `name` to `value`, keeping every other entry.
    ///
    /// Returns whether the stored value changed.
    pub fn set_value(&self, name: &str, value: FieldValue) -> bool {
        self.state.update(|state| {
            if state.values.contains(name) && state.values.get(name) == &value {
                return false;
            }
            state.values = state.values.with(name, value);
            true
        })
    }

    /// Record a submit attempt.
    pub fn mark_submitted(&self) {
        self.state.update(|state| !std::mem::replace(&mut state.submitted, true));
    }

    /// Snapshot of all current values.
    pub fn values(&self) -> FormData {
        self.state.with(|state| state.values.clone())
    }

    /// Current value of a single field.
    pub fn value(&self, name: &str) -> FieldValue {
        self.state.with(|state| state.values.get(name).clone())
    }

    /// Check if submit was pressed at least once.
    pub fn is_submitted(&self) -> bool {
        self.state.with(|state| state.submitted)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        if self.is_submitted() {
            FormPhase::Attempted
        } else {
            FormPhase::Pristine
        }
    }

    /// Check if anything changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.state.clear_dirty();
    }
}
