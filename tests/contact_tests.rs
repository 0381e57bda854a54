// Host-side tests for the contact form state machine.

use folio_core::contact::*;
use folio_core::{FORM_ENDPOINT, SUCCESS_DISPLAY_MS};
use instant::Instant;
use std::time::Duration;

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_email("visitor@example.com");
    form.set_message("Hello there");
    form
}

#[test]
fn empty_message_never_produces_a_request() {
    let mut form = ContactForm::new();
    form.set_email("visitor@example.com");
    form.set_message("");
    match form.begin_submit() {
        Err(BeginError::Invalid(ValidationError::MissingFields { email, message })) => {
            assert!(!email);
            assert!(message);
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert!(!form.submit_disabled());
}

#[test]
fn whitespace_message_is_sent_as_typed() {
    let mut form = ContactForm::new();
    form.set_email("visitor@example.com");
    form.set_message("  \n");
    let req = form.begin_submit().unwrap();
    let body: serde_json::Value = serde_json::from_str(&req.body().unwrap()).unwrap();
    assert_eq!(body["message"], "  \n");
    assert_eq!(form.status(), SubmitStatus::Submitting);
}

#[test]
fn empty_email_is_rejected_too() {
    let mut form = ContactForm::new();
    form.set_message("Hi");
    assert!(matches!(
        form.begin_submit(),
        Err(BeginError::Invalid(ValidationError::MissingFields { email: true, .. }))
    ));
}

#[test]
fn begin_builds_json_request_and_locks_the_button() {
    let mut form = filled();
    let req = form.begin_submit().unwrap();
    assert_eq!(req.endpoint, FORM_ENDPOINT);
    let body: serde_json::Value = serde_json::from_str(&req.body().unwrap()).unwrap();
    assert_eq!(body["email"], "visitor@example.com");
    assert_eq!(body["message"], "Hello there");

    assert_eq!(form.status(), SubmitStatus::Submitting);
    assert!(form.submit_disabled());
    assert_eq!(form.button_class(), "loading");
    assert_eq!(form.begin_submit(), Err(BeginError::Busy));
}

#[test]
fn success_clears_fields_and_expires_after_delay() {
    let mut form = filled();
    form.begin_submit().unwrap();
    let t0 = Instant::now();
    assert_eq!(form.complete(Ok(()), t0), Ok(()));

    assert_eq!(form.email(), "");
    assert_eq!(form.message(), "");
    assert!(form.is_success_visible());
    assert_eq!(form.button_class(), "success");
    assert!(form.submit_disabled());
    assert_eq!(
        form.success_remaining(t0),
        Some(Duration::from_millis(SUCCESS_DISPLAY_MS))
    );

    let hold = Duration::from_millis(SUCCESS_DISPLAY_MS);
    assert!(!form.poll(t0 + hold - Duration::from_millis(1)));
    assert!(form.is_success_visible());
    assert!(form.poll(t0 + hold));
    assert!(!form.is_success_visible());
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(form.button_class(), "");
    assert!(!form.poll(t0 + hold * 2));
}

#[test]
fn network_failure_keeps_fields_and_reenables() {
    let mut form = filled();
    form.begin_submit().unwrap();
    let err = form
        .complete(Err(SubmitError::Network("offline".into())), Instant::now())
        .unwrap_err();
    assert_eq!(err.to_string(), "Oops! There was a network error.");
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert!(!form.submit_disabled());
    assert_eq!(form.email(), "visitor@example.com");
    assert_eq!(form.message(), "Hello there");
    assert_eq!(form.success_remaining(Instant::now()), None);
    // a retry is allowed straight away
    assert!(form.begin_submit().is_ok());
}

#[test]
fn rejected_status_behaves_like_network_failure() {
    let mut form = filled();
    form.begin_submit().unwrap();
    let outcome = check_status(422);
    assert_eq!(outcome, Err(SubmitError::Rejected { status: 422 }));
    assert!(form.complete(outcome, Instant::now()).is_err());
    assert_eq!(form.message(), "Hello there");
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn any_2xx_is_success() {
    for status in [200, 201, 204, 299] {
        assert_eq!(check_status(status), Ok(()));
    }
    for status in [199, 301, 404, 500] {
        assert!(check_status(status).is_err());
    }
}

#[test]
fn custom_endpoint_is_used() {
    let mut form = ContactForm::with_endpoint("http://localhost/test");
    form.set_email("a@b.c");
    form.set_message("x");
    assert_eq!(form.begin_submit().unwrap().endpoint, "http://localhost/test");
}
