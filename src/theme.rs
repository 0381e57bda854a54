use crate::constants::*;
use crate::dom::{self, Timeout};
use folio_core::theme::{Theme, ThemeToggle};
use folio_core::{THEME_STORAGE_KEY, THEME_SWITCH_MS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ThemeController {
    toggle: ThemeToggle,
    pending: Option<Timeout>,
}

pub type SharedTheme = Rc<RefCell<ThemeController>>;

fn storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

fn load() -> Theme {
    let stored = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn persist(theme: Theme) {
    if let Some(s) = storage() {
        if let Err(e) = s.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] could not persist preference: {:?}", e);
        }
    }
}

/// Apply `theme` to the body class and the toggle icons currently in the DOM.
pub fn sync_dom(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, theme.is_dark());
    }
    for id in [THEME_TOGGLE_ID, MOBILE_THEME_TOGGLE_ID] {
        if let Some(icon) = document
            .get_element_by_id(id)
            .and_then(|el| el.first_element_child())
        {
            let cl = icon.class_list();
            _ = cl.toggle_with_force(ICON_SUN_CLASS, theme.is_dark());
            _ = cl.toggle_with_force(ICON_MOON_CLASS, !theme.is_dark());
        }
    }
}

/// Read the saved preference and apply it.
pub fn init(document: &web::Document) -> SharedTheme {
    let theme = load();
    log::info!("[theme] starting in {} mode", theme.as_str());
    sync_dom(document, theme);
    Rc::new(RefCell::new(ThemeController {
        toggle: ThemeToggle::new(theme),
        pending: None,
    }))
}

pub fn current(theme: &SharedTheme) -> Theme {
    theme.borrow().toggle.current()
}

/// Flip the theme after the switching transition. Requests made while a
/// switch is in progress are ignored.
pub fn request_toggle(theme: &SharedTheme) {
    let started = theme.borrow_mut().toggle.begin_with(dom::window_document());
    let Some(document) = started else {
        log::debug!("[theme] toggle ignored, switch in progress or no document");
        return;
    };
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(THEME_SWITCHING_CLASS);
    }
    let shared = theme.clone();
    let timeout = Timeout::new(THEME_SWITCH_MS, move || {
        let next = shared.borrow_mut().toggle.finish();
        persist(next);
        if let Some(document) = dom::window_document() {
            sync_dom(&document, next);
            if let Some(body) = document.body() {
                _ = body.class_list().remove_1(THEME_SWITCHING_CLASS);
            }
        }
        log::info!("[theme] switched to {}", next.as_str());
    });
    match timeout {
        Ok(t) => theme.borrow_mut().pending = Some(t),
        Err(e) => {
            log::error!("[theme] could not schedule switch, applying now: {:?}", e);
            let next = theme.borrow_mut().toggle.finish();
            persist(next);
            sync_dom(&document, next);
            if let Some(body) = document.body() {
                _ = body.class_list().remove_1(THEME_SWITCHING_CLASS);
            }
        }
    }
}
