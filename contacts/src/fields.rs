//! The contact form declaration.

use formwork::prelude::*;

pub const WOOGA_NAME: &str = r"^wooga\.name";
pub const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PASSWORD: [&str; 4] = [r"[0-9]", r"[a-z]", r"[A-Z]", r"^.{8,}$"];
pub const PASSWORD_MESSAGE: &str =
    "Should contain at least one digit, one lower case, one upper case, least 8 characters";
pub const PHONE_PLACEHOLDER: &str = "+1 555 0100";

/// Build the form's children: header, the five fields, a submit button.
pub fn contact_form() -> Result<Vec<Child>, FormError> {
    let body = Body::new()
        .field(
            TextInput::new("firstName")
                .label("First Name")
                .error_message("Should start with 'wooga.name'")
                .validator(rules::pattern(WOOGA_NAME)?),
        )
        .field(TextInput::new("lastName").label("Last Name"))
        .field(
            TextInput::new("email")
                .label("Email")
                .validator(rules::pattern(EMAIL)?),
        )
        .field(
            TextInput::new("password")
                .label("Password")
                .error_message(PASSWORD_MESSAGE)
                .validator(rules::all_patterns(PASSWORD)?),
        )
        .field(
            TextInput::new("phone")
                .label("Phone")
                .placeholder(PHONE_PLACEHOLDER),
        );

    Ok(vec![
        Header::new("Contacts").into(),
        body.into(),
        Actions::new().button(Button::submit("Submit")).into(),
    ])
}
