//! Stateless rendering wrappers.

mod button;
mod text_input;

pub use button::{Button, ButtonType};
pub use text_input::{DEFAULT_ERROR_MESSAGE, TextInput};
