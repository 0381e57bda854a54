//! Page views. Each view owns its listeners and timers, so dropping the
//! `Page` tears the view down completely.

mod all_projects;
mod home;
mod project;

pub use all_projects::AllProjectsView;
pub use home::HomeView;
pub use project::ProjectView;

use crate::html;
use folio_core::catalog::Catalog;
use folio_core::route::Route;
use std::rc::Rc;
use web_sys as web;

/// In-app navigation callback handed to views. Calls are deferred, so a view
/// may navigate from inside its own callbacks.
pub type Navigate = Rc<dyn Fn(&str)>;

pub enum Page {
    Home(HomeView),
    Project(ProjectView),
    AllProjects(AllProjectsView),
    NotFound,
}

pub struct MountCtx<'a> {
    pub window: &'a web::Window,
    pub document: &'a web::Document,
    pub root: &'a web::Element,
    pub catalog: &'a Rc<Catalog>,
    pub navigate: &'a Navigate,
}

fn not_found(root: &web::Element, message: &str) -> Page {
    root.set_inner_html(&html::not_found_page(message));
    Page::NotFound
}

/// Render the markup for `route` into the root element and wire it up.
pub fn mount(route: &Route, ctx: &MountCtx) -> anyhow::Result<Page> {
    Ok(match route {
        Route::Home => Page::Home(home::mount(ctx)?),
        Route::Project(id) => match ctx.catalog.find(id) {
            Some(project) => Page::Project(project::mount(project, ctx)?),
            None => {
                log::warn!("[route] unknown project {:?}", id);
                not_found(ctx.root, "Project not found")
            }
        },
        Route::AllProjects => Page::AllProjects(all_projects::mount(ctx)?),
        Route::NotFound(path) => {
            log::warn!("[route] no view for {:?}", path);
            not_found(ctx.root, "Page not found")
        }
    })
}
