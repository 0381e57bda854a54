#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::router::Router;
use folio_core::catalog::Catalog;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod html;
mod input;
mod lanyard;
mod nav;
mod router;
mod theme;
mod views;

/// Document-level handler for in-app links and theme toggles. Both live in
/// markup that is replaced on every navigation, so they are delegated.
fn wire_delegated_clicks(document: &web::Document, router: Rc<Router>, theme: theme::SharedTheme) {
    let on_click = Closure::wrap(Box::new(move |ev: web::Event| {
        if dom::closest_with_attr(&ev, DATA_THEME_TOGGLE).is_some() {
            ev.prevent_default();
            theme::request_toggle(&theme);
            return;
        }
        let Some(link) = dom::closest_with_attr(&ev, DATA_LINK) else {
            return;
        };
        // let the browser open new tabs itself
        if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
            if m.ctrl_key() || m.meta_key() || m.shift_key() || m.button() != 0 {
                return;
            }
        }
        let Some(href) = link.get_attribute(DATA_LINK) else {
            return;
        };
        ev.prevent_default();
        router.navigate(&href);
    }) as Box<dyn FnMut(web::Event)>);
    _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root: web::Element = match document.get_element_by_id(APP_ROOT_ID) {
        Some(el) => el,
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no #{APP_ROOT_ID} and no body"))?
            .into(),
    };

    let theme = theme::init(&document);
    let lanyard = lanyard::Lanyard::new(&document)?;
    let catalog = Catalog::builtin();
    log::info!("[route] {} projects in catalog", catalog.len());

    let router = Router::new(root, catalog, lanyard, theme.clone());
    router.start()?;
    wire_delegated_clicks(&document, router, theme);
    Ok(())
}
