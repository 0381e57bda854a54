use super::{MountCtx, Navigate};
use crate::constants::*;
use crate::dom::{self, Interval, Listener, Timeout};
use crate::html;
use folio_core::catalog::Project;
use folio_core::typewriter::Typewriter;
use folio_core::{PROJECT_EXIT_MS, TYPEWRITER_TICK_MS};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const BACK_TARGET: &str = "/#projects";

struct ProjectState {
    typewriter: Typewriter,
    ticker: Option<Interval>,
    exit: Option<Timeout>,
}

type Shared = Rc<RefCell<ProjectState>>;

pub struct ProjectView {
    _state: Shared,
    _listeners: Vec<Listener>,
}

fn paint_output(tw: &Typewriter) {
    if let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(AI_OUTPUT_ID)) {
        el.set_inner_html(&html::ai_output(tw.visible(), tw.is_typing()));
    }
}

fn tick(weak: &Weak<RefCell<ProjectState>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let more = shared.borrow_mut().typewriter.tick();
    paint_output(&shared.borrow().typewriter);
    if !more {
        // the interval cannot drop itself from inside its own callback
        let weak = weak.clone();
        spawn_local(async move {
            if let Some(shared) = weak.upgrade() {
                shared.borrow_mut().ticker.take();
            }
        });
    }
}

fn start_typing(shared: &Shared) {
    if !shared.borrow_mut().typewriter.start() {
        return;
    }
    if let Some(button) = dom::window_document()
        .and_then(|d| d.get_element_by_id(AI_BUTTON_ID))
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = button.style().set_property("display", "none");
    }
    paint_output(&shared.borrow().typewriter);
    let weak = Rc::downgrade(shared);
    match Interval::new(TYPEWRITER_TICK_MS, move || tick(&weak)) {
        Ok(i) => shared.borrow_mut().ticker = Some(i),
        Err(e) => log::error!("[project] could not start typewriter: {:?}", e),
    }
}

fn leave(shared: &Shared, navigate: &Navigate) {
    if shared.borrow().exit.is_some() {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    dom::set_class(&document, PROJECT_PAGE_ID, SLIDE_OUT_CLASS, true);
    let nav = navigate.clone();
    match Timeout::new(PROJECT_EXIT_MS, move || nav(BACK_TARGET)) {
        Ok(t) => shared.borrow_mut().exit = Some(t),
        Err(e) => {
            log::error!("[project] exit animation skipped: {:?}", e);
            navigate(BACK_TARGET);
        }
    }
}

pub fn mount(project: &Project, ctx: &MountCtx) -> anyhow::Result<ProjectView> {
    ctx.root.set_inner_html(&html::project_page(project));
    let shared: Shared = Rc::new(RefCell::new(ProjectState {
        typewriter: Typewriter::new(project.ai_analysis),
        ticker: None,
        exit: None,
    }));

    let mut listeners = Vec::with_capacity(2);
    let st = shared.clone();
    listeners.push(Listener::on_id(ctx.document, AI_BUTTON_ID, "click", move |_| {
        start_typing(&st)
    })?);
    let st = shared.clone();
    let navigate = ctx.navigate.clone();
    listeners.push(Listener::on_id(ctx.document, BACK_LINK_ID, "click", move |ev| {
        ev.prevent_default();
        leave(&st, &navigate);
    })?);

    log::info!("[project] showing {}", project.id);
    Ok(ProjectView {
        _state: shared,
        _listeners: listeners,
    })
}
