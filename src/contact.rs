use crate::constants::*;
use crate::dom::{self, Listener, Timeout};
use crate::html;
use folio_core::contact::{check_status, BeginError, ContactForm, SubmitError, SubmitRequest};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct ContactState {
    form: ContactForm,
    expiry: Option<Timeout>,
}

type Shared = Rc<RefCell<ContactState>>;

/// Contact form of the home view. In-flight requests finish after the view
/// is gone but no longer touch the DOM.
pub struct ContactView {
    _state: Shared,
    _listeners: Vec<Listener>,
}

fn network(e: JsValue) -> SubmitError {
    SubmitError::Network(format!("{:?}", e))
}

async fn post(request: &SubmitRequest) -> Result<(), SubmitError> {
    let body = request
        .body()
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;

    let headers = web::Headers::new().map_err(network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network)?;
    headers.set("Accept", "application/json").map_err(network)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let req = web::Request::new_with_str_and_init(request.endpoint, &init).map_err(network)?;
    let resp = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(network)?;
    let resp: web::Response = resp.dyn_into().map_err(network)?;
    check_status(resp.status())
}

fn paint(form: &ContactForm) {
    let Some(document) = dom::window_document() else {
        return;
    };
    if let Ok(button) = dom::by_id::<web::HtmlButtonElement>(&document, CONTACT_SUBMIT_ID) {
        button.set_class_name(&html::submit_class(form.button_class()));
        button.set_disabled(form.submit_disabled());
    }
}

fn clear_inputs(document: &web::Document) {
    if let Ok(input) = dom::by_id::<web::HtmlInputElement>(document, CONTACT_EMAIL_ID) {
        input.set_value("");
    }
    if let Ok(area) = dom::by_id::<web::HtmlTextAreaElement>(document, CONTACT_MESSAGE_ID) {
        area.set_value("");
    }
}

fn read_inputs(document: &web::Document, form: &mut ContactForm) {
    if let Ok(input) = dom::by_id::<web::HtmlInputElement>(document, CONTACT_EMAIL_ID) {
        form.set_email(input.value());
    }
    if let Ok(area) = dom::by_id::<web::HtmlTextAreaElement>(document, CONTACT_MESSAGE_ID) {
        form.set_message(area.value());
    }
}

/// Hide the success state once its deadline passes.
fn schedule_expiry(weak: Weak<RefCell<ContactState>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let remaining = shared.borrow().form.success_remaining(Instant::now());
    let Some(remaining) = remaining else {
        return;
    };
    let ms = remaining.as_millis().min(i32::MAX as u128) as i32 + 1;
    let cb_weak = weak.clone();
    let timeout = Timeout::new(ms, move || {
        let Some(shared) = cb_weak.upgrade() else {
            return;
        };
        let expired = shared.borrow_mut().form.poll(Instant::now());
        if expired {
            paint(&shared.borrow().form);
        } else {
            // timer fired early relative to the monotonic clock; rescheduling
            // replaces this timeout, so do it outside its callback
            spawn_local(async move { schedule_expiry(cb_weak) });
        }
    });
    match timeout {
        Ok(t) => shared.borrow_mut().expiry = Some(t),
        Err(e) => log::error!("[contact] could not schedule reset: {:?}", e),
    }
}

fn submit(shared: &Shared) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let begun = {
        let mut st = shared.borrow_mut();
        read_inputs(&document, &mut st.form);
        st.form.begin_submit()
    };
    let request = match begun {
        Ok(r) => r,
        Err(BeginError::Invalid(e)) => {
            dom::alert(&e.to_string());
            return;
        }
        Err(BeginError::Busy) => return,
    };
    paint(&shared.borrow().form);

    let weak = Rc::downgrade(shared);
    spawn_local(async move {
        let outcome = post(&request).await;
        let Some(shared) = weak.upgrade() else {
            log::info!("[contact] view closed before the response arrived");
            return;
        };
        let result = shared
            .borrow_mut()
            .form
            .complete(outcome, Instant::now());
        paint(&shared.borrow().form);
        match result {
            Ok(()) => {
                log::info!("[contact] message sent");
                if let Some(doc) = dom::window_document() {
                    clear_inputs(&doc);
                }
                schedule_expiry(weak);
            }
            Err(e) => dom::alert(&e.to_string()),
        }
    });
}

pub fn mount(document: &web::Document) -> anyhow::Result<ContactView> {
    let shared: Shared = Rc::new(RefCell::new(ContactState {
        form: ContactForm::new(),
        expiry: None,
    }));
    let st = shared.clone();
    let on_submit = Listener::on_id(document, CONTACT_FORM_ID, "submit", move |ev| {
        ev.prevent_default();
        submit(&st);
    })?;
    paint(&shared.borrow().form);
    Ok(ContactView {
        _state: shared,
        _listeners: vec![on_submit],
    })
}
