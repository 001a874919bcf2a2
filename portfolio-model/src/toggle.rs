//! Menu and theme flags.

use serde::Serialize;

/// Class applied to the document root while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Dark mode is on until the visitor says otherwise.
pub const DEFAULT_DARK_MODE: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    dark: bool,
}

impl ThemeToggle {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Rehydrate from a saved preference, falling back to `default` when none was stored.
    pub fn from_preference(saved: Option<bool>, default: bool) -> Self {
        Self::new(saved.unwrap_or(default))
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn flip(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    pub fn context(&self) -> ThemeContext {
        ThemeContext {
            dark_mode: self.dark,
        }
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new(DEFAULT_DARK_MODE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn flip(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any in-page navigation closes the menu, whatever its state.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn nav_class(&self) -> &'static str {
        if self.open {
            "nav nav-open"
        } else {
            "nav"
        }
    }
}

/// Theme as seen by the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeContext {
    pub dark_mode: bool,
}

impl ThemeContext {
    pub fn root_class(&self) -> Option<&'static str> {
        self.dark_mode.then_some(DARK_MODE_CLASS)
    }

    pub fn app_class(&self) -> &'static str {
        if self.dark_mode {
            "app dark-mode"
        } else {
            "app"
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.dark_mode {
            "☀️"
        } else {
            "🌙"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        ThemeToggle::default().context()
    }
}
