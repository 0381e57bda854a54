use crate::constants::*;
use crate::dom::{self, Listener};
use folio_core::nav::{Indicator, LinkBounds, NavState, Section, SectionTops};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Header navigation of the home view. Dropping it removes every listener,
/// window `scroll`/`resize` included.
pub struct NavView {
    _listeners: Vec<Listener>,
}

fn section_top(document: &web::Document, section: Section) -> Option<f64> {
    let el = document.get_element_by_id(section.id())?;
    Some(el.dyn_ref::<web::HtmlElement>()?.offset_top() as f64)
}

fn measure_tops(document: &web::Document) -> SectionTops {
    SectionTops {
        about: section_top(document, Section::About),
        projects: section_top(document, Section::Projects),
        contact: section_top(document, Section::Contact),
    }
}

fn bounds_of(el: &web::Element) -> Option<LinkBounds> {
    let el = el.dyn_ref::<web::HtmlElement>()?;
    Some(LinkBounds {
        left: el.offset_left() as f64,
        width: el.offset_width() as f64,
    })
}

fn nav_link(document: &web::Document, section: Section) -> Option<web::Element> {
    let selector = format!("#{NAV_ID} a[{DATA_SECTION}=\"{}\"]", section.id());
    document.query_selector(&selector).ok().flatten()
}

fn paint_indicator(document: &web::Document, id: &str, indicator: Indicator) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", &indicator.css());
    }
}

fn paint_active(document: &web::Document, state: &NavState) {
    let active = state.active();
    for section in Section::LINKED {
        if let Some(link) = nav_link(document, section) {
            _ = link
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, section == active);
        }
    }
    dom::set_class(document, LOGO_ID, ACTIVE_CLASS, active == Section::Home);
    paint_indicator(document, ACTIVE_BUBBLE_ID, state.active_indicator());
}

fn paint_menu(document: &web::Document, open: bool) {
    dom::set_class(document, NAV_WRAP_ID, ACTIVE_CLASS, open);
    if let Some(icon) = document
        .get_element_by_id(MENU_TOGGLE_ID)
        .and_then(|el| el.first_element_child())
    {
        let cl = icon.class_list();
        _ = cl.toggle_with_force("fa-bars", !open);
        _ = cl.toggle_with_force("fa-xmark", open);
    }
}

/// Re-run the scroll-spy and move the active bubble.
fn refresh(state: &Rc<RefCell<NavState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let (_, vh) = dom::viewport_size(&window);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let tops = measure_tops(&document);
    let mut st = state.borrow_mut();
    st.on_scroll(scroll_y, vh, &tops);
    let bounds = nav_link(&document, st.active()).and_then(|el| bounds_of(&el));
    st.sync_active_indicator(bounds);
    paint_active(&document, &st);
}

fn close_menu(document: &web::Document, state: &Rc<RefCell<NavState>>) {
    state.borrow_mut().close_menu();
    paint_menu(document, false);
}

pub fn mount(window: &web::Window, document: &web::Document, root: &web::Element) -> anyhow::Result<NavView> {
    let state = Rc::new(RefCell::new(NavState::new()));
    let mut listeners = Vec::new();

    for event in ["scroll", "resize"] {
        let st = state.clone();
        listeners.push(Listener::new(window, event, move |_| refresh(&st))?);
    }

    // Hover bubble follows the link under the pointer.
    let nav = document
        .get_element_by_id(NAV_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{NAV_ID}"))?;
    {
        let st = state.clone();
        listeners.push(Listener::new(&nav, "mouseover", move |ev| {
            let Some(link) = dom::closest_with_attr(&ev, DATA_SECTION) else {
                return;
            };
            if let (Some(b), Some(doc)) = (bounds_of(&link), dom::window_document()) {
                st.borrow_mut().hover_enter(b);
                paint_indicator(&doc, HOVER_BUBBLE_ID, st.borrow().hover_indicator());
            }
        })?);
    }
    {
        let st = state.clone();
        listeners.push(Listener::new(&nav, "mouseleave", move |_| {
            st.borrow_mut().hover_leave();
            if let Some(doc) = dom::window_document() {
                paint_indicator(&doc, HOVER_BUBBLE_ID, st.borrow().hover_indicator());
            }
        })?);
    }

    {
        let st = state.clone();
        listeners.push(Listener::on_id(document, MENU_TOGGLE_ID, "click", move |_| {
            let open = st.borrow_mut().toggle_menu();
            if let Some(doc) = dom::window_document() {
                paint_menu(&doc, open);
            }
        })?);
    }

    {
        let st = state.clone();
        listeners.push(Listener::on_id(document, LOGO_ID, "click", move |ev| {
            ev.prevent_default();
            if let (Some(w), Some(doc)) = (web::window(), dom::window_document()) {
                close_menu(&doc, &st);
                dom::scroll_to_top(&w, true);
            }
        })?);
    }

    // Section links anywhere in the view (nav, hero buttons).
    {
        let st = state.clone();
        listeners.push(Listener::new(root, "click", move |ev| {
            let Some(link) = dom::closest_with_attr(&ev, DATA_SECTION) else {
                return;
            };
            ev.prevent_default();
            let Some(doc) = dom::window_document() else {
                return;
            };
            close_menu(&doc, &st);
            if let Some(id) = link.get_attribute(DATA_SECTION) {
                dom::scroll_to_section(&doc, &id);
            }
        })?);
    }

    refresh(&state);
    Ok(NavView {
        _listeners: listeners,
    })
}
