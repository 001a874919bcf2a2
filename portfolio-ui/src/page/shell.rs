use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_model::{PageAction, PageState, ProjectRecord, ThemeContext, PROJECTS};

use crate::config::site_config;
use crate::interop::get_viewport_width;
use crate::page::components::header::Header;
use crate::page::components::projects::ProjectsSection;
use crate::page::components::sections::{
    AboutSection, CertificationsSection, ContactSection, ErrorState, ExperienceSection, Footer,
    HeroSection, SkillsSection,
};
use crate::page::effects::run_effects;
use crate::page::storage::theme_preference_store;
use crate::page::styles::STYLESHEET;
use crate::page::viewport::ResizeListener;

/// Width assumed when the window cannot be measured.
const FALLBACK_VIEWPORT_WIDTH: u32 = 1920;

#[component]
pub fn PortfolioShell() -> Element {
    let config = site_config();
    let store = use_hook(|| Rc::new(theme_preference_store()));

    let store_for_init = store.clone();
    let page = use_signal(move || {
        let width = get_viewport_width().unwrap_or(FALLBACK_VIEWPORT_WIDTH);
        PageState::new(config, store_for_init.load(), width, PROJECTS.len()).map_err(|e| {
            dioxus_logger::tracing::error!("Failed to build page state: {}", e);
            e.to_string()
        })
    });

    // Theme as context for the whole tree, not just the subtree that owns the toggle.
    let theme = use_memo(move || {
        page.read()
            .as_ref()
            .map(PageState::theme)
            .unwrap_or_default()
    });
    use_context_provider(|| theme);

    let store_for_dispatch = store.clone();
    let mut page_for_dispatch = page;
    let dispatch = use_callback(move |action: PageAction| {
        let effects = match page_for_dispatch.write().as_mut() {
            Ok(state) => state.apply(action),
            Err(_) => return,
        };
        run_effects(effects, &*store_for_dispatch);
    });

    // Sync the document root with the loaded preference once mounted.
    let store_for_mount = store.clone();
    use_effect(move || {
        if let Ok(state) = page.peek().as_ref() {
            dioxus_logger::tracing::info!(
                "Portfolio mounted: {}",
                serde_json::to_string(&state.view()).unwrap_or_default()
            );
            run_effects(state.initial_effects(), &*store_for_mount);
        }
    });

    let listener = use_hook(move || {
        let listener = ResizeListener::register(config.resize_debounce_ms, move |width| {
            // Only class changes touch the page; skip the signal write otherwise.
            let matters = page
                .peek()
                .as_ref()
                .is_ok_and(|state| state.resize_matters(width));
            if matters {
                dispatch.call(PageAction::ViewportResized { width });
            }
        });
        if listener.is_none() {
            dioxus_logger::tracing::warn!("No window; viewport changes will not be tracked");
        }
        Rc::new(RefCell::new(listener))
    });
    use_drop(move || {
        listener.borrow_mut().take();
    });

    let state_guard = page.read();
    let state = match state_guard.as_ref() {
        Ok(state) => state,
        Err(error) => {
            return rsx! {
                ErrorState { error: error.clone() }
            }
        }
    };

    let visible: Vec<ProjectRecord> = state
        .visible_projects(&PROJECTS)
        .into_iter()
        .copied()
        .collect();
    let dots = state.dots();
    let app_class = theme().app_class();

    rsx! {
        style { {STYLESHEET} }

        div {
            class: "{app_class}",

            Header {
                menu: state.menu(),
                on_toggle_menu: move |_| dispatch.call(PageAction::ToggleMenu),
                on_navigate: move |anchor| dispatch.call(PageAction::Navigate(anchor)),
                on_toggle_theme: move |_| dispatch.call(PageAction::ToggleTheme),
            }

            HeroSection {}
            AboutSection {}
            SkillsSection {}

            ProjectsSection {
                projects: visible,
                dots,
                on_prev: move |_| dispatch.call(PageAction::PrevProjects),
                on_next: move |_| dispatch.call(PageAction::NextProjects),
                on_select_dot: move |dot| dispatch.call(PageAction::SelectDot(dot)),
            }

            ExperienceSection {}
            CertificationsSection {}
            ContactSection {}
            Footer {}
        }
    }
}

/// Read the theme provided by [`PortfolioShell`].
pub fn use_theme() -> ThemeContext {
    use_context::<Memo<ThemeContext>>()()
}
