use super::MountCtx;
use crate::constants::*;
use crate::dom::{self, Listener};
use crate::html;
use folio_core::catalog::{Catalog, ALL_TECH};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ArchiveState {
    catalog: Rc<Catalog>,
    filters: SmallVec<[&'static str; 16]>,
    tech: String,
    search: String,
}

impl ArchiveState {
    fn cards(&self) -> String {
        html::project_grid(self.catalog.filter(&self.tech, &self.search))
    }
}

pub struct AllProjectsView {
    _listeners: Vec<Listener>,
}

fn paint(state: &ArchiveState, pills: bool) {
    let Some(document) = dom::window_document() else {
        return;
    };
    if pills {
        if let Some(bar) = document.get_element_by_id(FILTER_BAR_ID) {
            bar.set_inner_html(&html::filter_pills(&state.filters, &state.tech));
        }
    }
    if let Some(grid) = document.get_element_by_id(PROJECT_GRID_ID) {
        grid.set_inner_html(&state.cards());
    }
}

pub fn mount(ctx: &MountCtx) -> anyhow::Result<AllProjectsView> {
    let state = ArchiveState {
        catalog: ctx.catalog.clone(),
        filters: ctx.catalog.tech_filters(),
        tech: ALL_TECH.to_string(),
        search: String::new(),
    };
    ctx.root
        .set_inner_html(&html::all_projects_page(&state.filters, &state.tech, &state.cards()));
    let shared = Rc::new(RefCell::new(state));

    let mut listeners = Vec::with_capacity(2);
    let st = shared.clone();
    listeners.push(Listener::on_id(ctx.document, SEARCH_INPUT_ID, "input", move |ev| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let mut st = st.borrow_mut();
        st.search = input.value();
        paint(&st, false);
    })?);
    let st = shared.clone();
    listeners.push(Listener::on_id(ctx.document, FILTER_BAR_ID, "click", move |ev| {
        let Some(tech) = dom::closest_with_attr(&ev, DATA_FILTER).and_then(|el| el.get_attribute(DATA_FILTER)) else {
            return;
        };
        let mut st = st.borrow_mut();
        if st.tech != tech {
            log::debug!("[archive] filter {}", tech);
            st.tech = tech;
            paint(&st, true);
        }
    })?);

    Ok(AllProjectsView {
        _listeners: listeners,
    })
}
