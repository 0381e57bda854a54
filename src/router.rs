use crate::dom::{self, Listener};
use crate::lanyard::Lanyard;
use crate::theme::{self, SharedTheme};
use crate::views::{self, MountCtx, Navigate, Page};
use folio_core::catalog::Catalog;
use folio_core::route::{self, split_fragment, Route};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Path router for the single-page site. Owns the current view and decides
/// when the lanyard badge is shown.
pub struct Router {
    this: Weak<Router>,
    root: web::Element,
    catalog: Rc<Catalog>,
    lanyard: Lanyard,
    theme: SharedTheme,
    route: RefCell<Route>,
    page: RefCell<Option<Page>>,
    listeners: RefCell<Vec<Listener>>,
}

fn location_href(window: &web::Window) -> String {
    let loc = window.location();
    let path = loc.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = loc.hash().unwrap_or_default();
    format!("{path}{hash}")
}

impl Router {
    pub fn new(root: web::Element, catalog: Catalog, lanyard: Lanyard, theme: SharedTheme) -> Rc<Self> {
        Rc::new_cyclic(|this| Router {
            this: this.clone(),
            root,
            catalog: Rc::new(catalog),
            lanyard,
            theme,
            route: RefCell::new(Route::Home),
            page: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Render the current location and follow history changes.
    pub fn start(&self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let weak = self.this.clone();
        let on_pop = Listener::new(&window, "popstate", move |_| {
            if let (Some(router), Some(w)) = (weak.upgrade(), web::window()) {
                router.render(&location_href(&w));
            }
        })?;
        let weak = self.this.clone();
        let on_resize = Listener::new(&window, "resize", move |_| {
            if let Some(router) = weak.upgrade() {
                router.sync_lanyard();
            }
        })?;
        self.listeners.borrow_mut().extend([on_pop, on_resize]);
        self.render(&location_href(&window));
        Ok(())
    }

    /// Navigation callback for views and delegated link handlers.
    pub fn navigator(&self) -> Navigate {
        let weak = self.this.clone();
        Rc::new(move |href: &str| {
            if let Some(router) = weak.upgrade() {
                router.navigate(href);
            }
        })
    }

    /// Push `href` onto the history stack and render it. The work runs in a
    /// separate task so the caller's closure is never dropped mid-call.
    pub fn navigate(&self, href: &str) {
        let href = href.to_string();
        let weak = self.this.clone();
        spawn_local(async move {
            let (Some(router), Some(window)) = (weak.upgrade(), web::window()) else {
                return;
            };
            if let Ok(history) = window.history() {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&href)) {
                    log::warn!("[route] pushState failed: {:?}", e);
                }
            }
            router.render(&href);
        });
    }

    /// Show the badge only where the current route and viewport allow it.
    pub fn sync_lanyard(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let (width, _) = dom::viewport_size(&window);
        let visible = route::lanyard_visible(width, &self.route.borrow());
        self.lanyard.set_visible(visible);
        self.lanyard.on_resize();
    }

    fn render(&self, href: &str) {
        let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
            return;
        };
        let next = Route::parse(href);
        let (_, fragment) = split_fragment(href);
        log::info!("[route] {:?}", next);

        // old view first, so its listeners are gone before the markup changes
        self.page.borrow_mut().take();
        *self.route.borrow_mut() = next.clone();

        let navigate = self.navigator();
        let ctx = MountCtx {
            window: &window,
            document: &document,
            root: &self.root,
            catalog: &self.catalog,
            navigate: &navigate,
        };
        match views::mount(&next, &ctx) {
            Ok(page) => *self.page.borrow_mut() = Some(page),
            Err(e) => log::error!("[route] view setup failed: {:?}", e),
        }

        theme::sync_dom(&document, theme::current(&self.theme));
        self.sync_lanyard();
        match fragment {
            Some(id) => dom::scroll_to_section(&document, id),
            None => dom::scroll_to_top(&window, false),
        }
    }
}
