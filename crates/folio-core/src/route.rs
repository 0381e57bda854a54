use crate::constants::LANYARD_MIN_VIEWPORT_WIDTH;

const PROJECT_PREFIX: &str = "/project/";
const ALL_PROJECTS_PATH: &str = "/all-projects";

/// Client-side views addressed by the location path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Project(String),
    AllProjects,
    NotFound(String),
}

impl Route {
    /// Parse a location path. Query string and fragment are ignored.
    pub fn parse(href: &str) -> Self {
        let (path, _) = split_fragment(href);
        let path = path.split('?').next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            ALL_PROJECTS_PATH => Route::AllProjects,
            _ => match trimmed.strip_prefix(PROJECT_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Project(id.to_string()),
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Project(id) => format!("{PROJECT_PREFIX}{id}"),
            Route::AllProjects => ALL_PROJECTS_PATH.to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

/// Split `"/path#frag"` into `("/path", Some("frag"))`. An empty fragment is `None`.
pub fn split_fragment(href: &str) -> (&str, Option<&str>) {
    match href.split_once('#') {
        Some((path, frag)) if !frag.is_empty() => (path, Some(frag)),
        Some((path, _)) => (path, None),
        None => (href, None),
    }
}

/// The badge only renders on the home view of wide viewports.
#[inline]
pub fn lanyard_visible(viewport_width: f64, route: &Route) -> bool {
    viewport_width >= LANYARD_MIN_VIEWPORT_WIDTH && route.is_home()
}
