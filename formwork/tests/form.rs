//! Tests for form rendering, error visibility and submission.

use std::sync::{Arc, Mutex, OnceLock};

use formwork::prelude::*;

/// Form whose callback records every submitted snapshot.
fn recording_form(config: FormConfig) -> (Form, Arc<Mutex<Vec<FormData>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let form = Form::with_config(config, move |data| sink.lock().unwrap().push(data));
    (form, calls)
}

/// firstName has no validators, email must contain '@'.
fn scenario_children() -> Vec<Child> {
    vec![
        Header::new("Contacts").into(),
        Body::new()
            .field(TextInput::new("firstName").label("First Name"))
            .field(TextInput::new("email").label("Email").validator(rules::contains("@")))
            .into(),
        Actions::new().button(Button::submit("Submit")).into(),
    ]
}

fn shows_error(view: &Node, name: &str) -> bool {
    view.find_input(name).unwrap().shows_error()
}

#[test]
fn test_scenarios_a_b_c() {
    let (form, calls) = recording_form(FormConfig::new("contacts"));
    let children = scenario_children();

    // A: submit with email absent
    let view = form.render(&children).unwrap();
    view.find_input("firstName").unwrap().change("Ann");
    assert!(view.submit_button().unwrap().press());

    let view = form.render(&children).unwrap();
    assert!(calls.lock().unwrap().is_empty());
    assert!(shows_error(&view, "email"));
    assert!(!shows_error(&view, "firstName"));
    assert_eq!(form.phase(), FormPhase::Attempted);
    let specs = form.fields(&children).unwrap();
    assert!(form.shows_error(&specs[1]));
    assert!(!form.shows_error(&specs[0]));

    // B: fixing email clears its error without another submit
    view.find_input("email").unwrap().change("a@b.com");
    let view = form.render(&children).unwrap();
    assert!(!shows_error(&view, "email"));
    assert!(calls.lock().unwrap().is_empty());

    // C: second submit goes through
    view.submit_button().unwrap().press();
    let expected: FormData = [("firstName", "Ann"), ("email", "a@b.com")].into_iter().collect();
    assert_eq!(calls.lock().unwrap().as_slice(), &[expected]);
}

#[test]
fn test_no_errors_before_first_submit() {
    let (form, _) = recording_form(FormConfig::default());
    let children = scenario_children();

    let view = form.render(&children).unwrap();
    view.find_input("email").unwrap().change("not-an-email");
    let view = form.render(&children).unwrap();

    assert!(!shows_error(&view, "email"));
    assert_eq!(form.phase(), FormPhase::Pristine);
}

#[test]
fn test_error_message_defaults_and_overrides() {
    let (form, _) = recording_form(FormConfig::default());
    let children: Vec<Child> = vec![
        Body::new()
            .field(TextInput::new("a").validator(rules::required()))
            .field(
                TextInput::new("b")
                    .validator(rules::required())
                    .error_message("B is required"),
            )
            .into(),
    ];

    let outcome = form.submit(&children).unwrap();
    let view = form.render(&children).unwrap();

    assert!(!outcome.is_submitted());
    assert_eq!(view.find_input("a").unwrap().error.as_deref(), Some("Invalid data input"));
    assert_eq!(view.find_input("b").unwrap().error.as_deref(), Some("B is required"));
}

#[test]
fn test_rejected_outcome_lists_invalid_fields() {
    let (form, _) = recording_form(FormConfig::default());
    let children = scenario_children();
    form.change("firstName", "Ann");

    match form.submit(&children).unwrap() {
        SubmitOutcome::Rejected(result) => {
            assert_eq!(result.invalid_fields(), vec!["email"]);
            assert_eq!(result.errors()[0].failed_rules, vec!["contains(\"@\")".to_string()]);
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn test_form_without_body_submits_empty_snapshot() {
    let (form, calls) = recording_form(FormConfig::default());
    let children: Vec<Child> = vec![Actions::new().button(Button::submit("Go")).into()];

    let view = form.render(&children).unwrap();
    assert!(view.inputs().is_empty());
    view.submit_button().unwrap().press();

    assert_eq!(calls.lock().unwrap().as_slice(), &[FormData::new()]);
}

#[test]
fn test_form_without_any_regions_renders() {
    let (form, calls) = recording_form(FormConfig::default());

    let view = form.render(&[]).unwrap();
    assert!(view.children().is_empty());
    assert!(view.submit_button().is_none());

    assert!(form.submit(&[]).unwrap().is_submitted());
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn test_duplicate_names_share_a_slot() {
    let (form, _) = recording_form(FormConfig::default());
    let children: Vec<Child> = vec![
        Body::new()
            .field(TextInput::new("x").label("First"))
            .field(TextInput::new("x").label("Second"))
            .into(),
    ];

    let view = form.render(&children).unwrap();
    view.inputs()[0].change("shared");
    let view = form.render(&children).unwrap();

    let values: Vec<&str> = view.inputs().iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["shared", "shared"]);
    assert_eq!(form.values().len(), 1);
}

#[test]
fn test_duplicate_names_rejected_when_configured() {
    let config = FormConfig::new("strict").duplicate_names(DuplicatePolicy::Reject);
    let (form, calls) = recording_form(config);
    let children: Vec<Child> = vec![
        Body::new()
            .field(TextInput::new("x"))
            .field(TextInput::new("x"))
            .into(),
    ];

    let err = form.render(&children).unwrap_err();
    assert!(matches!(err, FormError::DuplicateField { ref name } if name == "x"));
    assert!(form.submit(&children).is_err());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_reject_duplicates_shorthand() {
    let config = FormConfig::new("strict").reject_duplicates();
    assert_eq!(config.duplicate_names, DuplicatePolicy::Reject);
    assert_eq!(FormConfig::default().duplicate_names, DuplicatePolicy::Share);
}

#[test]
fn test_config_fallback_message() {
    let config = FormConfig::new("signup").default_error_message("Please check this field");
    let (form, _) = recording_form(config);
    let children = scenario_children();

    form.submit(&children).unwrap();
    let view = form.render(&children).unwrap();

    assert_eq!(form.config().name, "signup");
    assert_eq!(
        view.find_input("email").unwrap().error.as_deref(),
        Some("Please check this field")
    );
}

#[test]
fn test_submit_uses_fields_declared_at_submit_time() {
    let (form, calls) = recording_form(FormConfig::default());
    let with_email = scenario_children();
    let without_email: Vec<Child> = vec![Body::new().field(TextInput::new("firstName")).into()];

    form.render(&with_email).unwrap();
    assert!(!form.submit(&with_email).unwrap().is_submitted());

    // email was removed; only firstName is checked now
    assert!(form.submit(&without_email).unwrap().is_submitted());
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn test_non_submit_buttons_keep_their_handler() {
    let (form, calls) = recording_form(FormConfig::default());
    let cancelled = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&cancelled);
    let children: Vec<Child> = vec![
        Actions::new()
            .button(Button::new().label("Cancel").on_click(move || *counter.lock().unwrap() += 1))
            .button(Button::new().label("Reset").kind(ButtonType::Reset))
            .into(),
    ];

    let view = form.render(&children).unwrap();
    assert!(view.find_button("Cancel").unwrap().press());
    assert!(!view.find_button("Reset").unwrap().press());

    assert_eq!(*cancelled.lock().unwrap(), 1);
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(form.phase(), FormPhase::Pristine);
}

#[test]
fn test_disabled_submit_button_does_nothing() {
    let (form, calls) = recording_form(FormConfig::default());
    let children: Vec<Child> = vec![
        Body::new().field(TextInput::new("note")).into(),
        Actions::new().button(Button::submit("Submit").disabled()).into(),
    ];

    let view = form.render(&children).unwrap();
    view.find_input("note").unwrap().change("hello");
    let button = view.submit_button().unwrap();

    assert!(button.disabled);
    assert!(!button.press());
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(form.phase(), FormPhase::Pristine);
}

#[test]
fn test_callback_can_write_to_store() {
    let slot: Arc<OnceLock<FormStore>> = Arc::new(OnceLock::new());
    let handle = Arc::clone(&slot);
    let form = Form::new(move |data| {
        let store = handle.get().unwrap();
        store.set_value("after", FieldValue::from(data.len() as i64));
    });
    slot.set(form.store().clone()).unwrap();
    form.change("before", "x");

    assert!(form.submit(&[]).unwrap().is_submitted());

    assert_eq!(form.values().get("after"), &FieldValue::Number(1.0));
}

#[test]
#[should_panic(expected = "boom")]
fn test_callback_panic_propagates() {
    let form = Form::new(|_| panic!("boom"));
    form.submit(&[]).unwrap();
}

#[test]
fn test_render_clears_dirty_flag() {
    let (form, _) = recording_form(FormConfig::default());
    let children = scenario_children();

    form.render(&children).unwrap();
    assert!(!form.needs_render());

    form.change("email", "a@b.com");
    assert!(form.needs_render());
    form.render(&children).unwrap();
    assert!(!form.needs_render());
}

#[test]
fn test_forms_are_independent() {
    let (first, _) = recording_form(FormConfig::default());
    let (second, _) = recording_form(FormConfig::default());

    first.change("email", "a@b.com");
    first.submit(&scenario_children()).unwrap();

    assert_ne!(first.id(), second.id());
    assert!(second.values().is_empty());
    assert_eq!(second.phase(), FormPhase::Pristine);
}

#[test]
fn test_plain_text_rendering() {
    let (form, _) = recording_form(FormConfig::default());
    let children = scenario_children();
    form.change("firstName", "Ann");
    form.submit(&children).unwrap();

    let text = form.render(&children).unwrap().to_text();
    assert_eq!(
        text,
        "Contacts\nFirst Name: [Ann]\nEmail: <email>\n  ! Invalid data input\n[ Submit ]"
    );
}
