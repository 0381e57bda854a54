//! Scroll-spy and navigation indicator state.
//!
//! The front end feeds scroll/resize measurements in and reads indicator
//! geometry back out; nothing here touches the DOM.

use crate::constants::SECTION_LOOKAHEAD;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Sections that own a navigation link, in page order.
    pub const LINKED: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    /// Element id of the section (and the `#fragment` its nav link targets).
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "home" => Some(Section::Home),
            "about" => Some(Section::About),
            "projects" => Some(Section::Projects),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Document offsets of the linked sections; `None` when a section is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionTops {
    pub about: Option<f64>,
    pub projects: Option<f64>,
    pub contact: Option<f64>,
}

/// Scroll offset at which a section starting at `section_top` becomes active.
#[inline]
pub fn trigger_offset(section_top: f64, viewport_height: f64) -> f64 {
    section_top - SECTION_LOOKAHEAD * viewport_height
}

/// Resolve the active section; later sections win.
pub fn active_section(scroll_y: f64, viewport_height: f64, tops: &SectionTops) -> Section {
    let lookahead = scroll_y + SECTION_LOOKAHEAD * viewport_height;
    let reached = |top: Option<f64>| top.is_some_and(|t| lookahead >= t);
    if reached(tops.contact) {
        Section::Contact
    } else if reached(tops.projects) {
        Section::Projects
    } else if reached(tops.about) {
        Section::About
    } else {
        Section::Home
    }
}

/// Horizontal placement of a nav link inside the nav bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkBounds {
    pub left: f64,
    pub width: f64,
}

/// Highlight bubble drawn behind a nav link.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Indicator {
    pub left: f64,
    pub width: f64,
    pub opacity: f64,
}

impl Indicator {
    pub fn at(bounds: LinkBounds) -> Self {
        Self {
            left: bounds.left,
            width: bounds.width,
            opacity: 1.0,
        }
    }

    /// Fade out in place so the next show slides from the last position.
    pub fn hidden(self) -> Self {
        Self {
            opacity: 0.0,
            ..self
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn css(&self) -> String {
        format!(
            "left: {}px; width: {}px; opacity: {}",
            self.left, self.width, self.opacity
        )
    }
}

#[derive(Debug, Default)]
pub struct NavState {
    active: Section,
    active_indicator: Indicator,
    hover_indicator: Indicator,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn active_indicator(&self) -> Indicator {
        self.active_indicator
    }

    pub fn hover_indicator(&self) -> Indicator {
        self.hover_indicator
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recompute the active section. Returns true when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64, tops: &SectionTops) -> bool {
        let next = active_section(scroll_y, viewport_height, tops);
        let changed = next != self.active;
        if changed {
            log::debug!("[nav] active section {} -> {}", self.active, next);
            self.active = next;
        }
        changed
    }

    /// Move the active bubble under the link for the active section.
    ///
    /// `bounds` is the geometry of that link, if it could be measured. The
    /// bubble is hidden on `Home` and left untouched when the link is missing.
    pub fn sync_active_indicator(&mut self, bounds: Option<LinkBounds>) {
        if self.active == Section::Home {
            self.active_indicator = self.active_indicator.hidden();
        } else if let Some(b) = bounds {
            self.active_indicator = Indicator::at(b);
        }
    }

    pub fn hover_enter(&mut self, bounds: LinkBounds) {
        self.hover_indicator = Indicator::at(bounds);
    }

    pub fn hover_leave(&mut self) {
        self.hover_indicator = self.hover_indicator.hidden();
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
