//! Page state and event dispatch.
//!
//! Browser events become [`PageAction`]s. Applying one mutates exactly one
//! state unit and returns the side effects the host still has to perform.

use serde::Serialize;

use crate::carousel::{Carousel, CarouselError, Dot, PageSize};
use crate::config::SiteConfig;
use crate::content::NavAnchor;
use crate::toggle::{MenuToggle, ThemeContext, ThemeToggle};
use crate::viewport::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    ToggleTheme,
    ToggleMenu,
    Navigate(NavAnchor),
    ViewportResized { width: u32 },
    NextProjects,
    PrevProjects,
    SelectDot(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    /// Write the flag to the preference slot.
    PersistDarkMode(bool),
    /// Add or remove the dark-mode marker on the document root.
    ApplyThemeMarker(bool),
}

/// Flat snapshot of the page, mostly for rendering and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub dark_mode: bool,
    pub menu_open: bool,
    pub is_mobile: bool,
    pub current_project_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    theme: ThemeToggle,
    menu: MenuToggle,
    viewport: ViewportState,
    carousel: Carousel,
    desktop_page: PageSize,
    mobile_page: PageSize,
}

impl PageState {
    pub fn new(
        config: &SiteConfig,
        saved_dark_mode: Option<bool>,
        viewport_width: u32,
        project_count: usize,
    ) -> Result<Self, CarouselError> {
        Ok(Self {
            theme: ThemeToggle::from_preference(saved_dark_mode, config.default_dark_mode),
            menu: MenuToggle::default(),
            viewport: ViewportState::new(config.mobile_breakpoint_px, viewport_width),
            carousel: Carousel::new(project_count)?,
            desktop_page: config.desktop_page_size,
            mobile_page: config.mobile_page_size,
        })
    }

    /// Effects to run once on mount so the document matches the loaded theme.
    pub fn initial_effects(&self) -> Vec<PageEffect> {
        vec![PageEffect::ApplyThemeMarker(self.theme.is_dark())]
    }

    pub fn apply(&mut self, action: PageAction) -> Vec<PageEffect> {
        tracing::debug!(?action, "page action");
        match action {
            PageAction::ToggleTheme => {
                let dark = self.theme.flip();
                vec![
                    PageEffect::ApplyThemeMarker(dark),
                    PageEffect::PersistDarkMode(dark),
                ]
            }
            PageAction::ToggleMenu => {
                self.menu.flip();
                Vec::new()
            }
            PageAction::Navigate(_) => {
                self.menu.close();
                Vec::new()
            }
            PageAction::ViewportResized { width } => {
                if self.viewport.observe(width) {
                    tracing::info!(
                        is_mobile = self.viewport.is_mobile(),
                        page_size = self.page_size().get(),
                        "viewport class changed"
                    );
                }
                Vec::new()
            }
            PageAction::NextProjects => {
                let page = self.page_size();
                self.carousel.next(page);
                Vec::new()
            }
            PageAction::PrevProjects => {
                let page = self.page_size();
                self.carousel.prev(page);
                Vec::new()
            }
            PageAction::SelectDot(dot) => {
                let page = self.page_size();
                if let Err(e) = self.carousel.select_dot(dot, page) {
                    tracing::warn!("Ignoring dot selection: {}", e);
                }
                Vec::new()
            }
        }
    }

    /// True when a resize to `width` would change the page size. Hosts use it
    /// to skip dispatching resizes that leave the page untouched.
    pub fn resize_matters(&self, width: u32) -> bool {
        self.viewport.changes_class(width)
    }

    /// Derived from the current viewport on every call.
    pub fn page_size(&self) -> PageSize {
        if self.viewport.is_mobile() {
            self.mobile_page
        } else {
            self.desktop_page
        }
    }

    pub fn theme(&self) -> ThemeContext {
        self.theme.context()
    }

    pub fn menu(&self) -> MenuToggle {
        self.menu
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn visible_projects<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.carousel.visible(items, self.page_size())
    }

    pub fn dots(&self) -> Vec<Dot> {
        self.carousel.dots(self.page_size()).collect()
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            dark_mode: self.theme.is_dark(),
            menu_open: self.menu.is_open(),
            is_mobile: self.viewport.is_mobile(),
            current_project_index: self.carousel.index(),
        }
    }
}
