/// Colour scheme preference persisted in browser storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only an exact `"dark"` selects the dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Debounced theme toggle: a switch runs for a fixed transition and further
/// requests are dropped until it finishes.
#[derive(Debug, Default)]
pub struct ThemeToggle {
    current: Theme,
    switching: bool,
}

impl ThemeToggle {
    pub fn new(current: Theme) -> Self {
        Self {
            current,
            switching: false,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn is_switching(&self) -> bool {
        self.switching
    }

    /// Start a switch. Returns false while another one is running.
    pub fn begin(&mut self) -> bool {
        if self.switching {
            return false;
        }
        self.switching = true;
        true
    }

    /// Start a switch that needs `target` to run. With no target, or while
    /// another switch is running, nothing starts and `None` comes back.
    pub fn begin_with<T>(&mut self, target: Option<T>) -> Option<T> {
        let target = target?;
        self.begin().then_some(target)
    }

    /// Finish the running switch and return the theme to apply and persist.
    pub fn finish(&mut self) -> Theme {
        if self.switching {
            self.switching = false;
            self.current = self.current.toggled();
        }
        self.current
    }
}
