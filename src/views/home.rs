use super::MountCtx;
use crate::contact::{self, ContactView};
use crate::html;
use crate::nav::{self, NavView};
use folio_core::HOME_FEATURED_PROJECTS;

pub struct HomeView {
    _nav: NavView,
    _contact: ContactView,
}

pub fn mount(ctx: &MountCtx) -> anyhow::Result<HomeView> {
    let featured = ctx.catalog.featured(HOME_FEATURED_PROJECTS);
    ctx.root.set_inner_html(&html::home_page(featured));
    Ok(HomeView {
        _nav: nav::mount(ctx.window, ctx.document, ctx.root)?,
        _contact: contact::mount(ctx.document)?,
    })
}
