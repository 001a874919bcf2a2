//! End-to-end page flows driven through `PageState` with an in-memory
//! preference slot standing in for localStorage.

use portfolio_model::{
    MemorySlot, NavAnchor, PageAction, PageEffect, PageState, PreferenceStore, ProjectRecord,
    SiteConfig, PROJECTS,
};

/// Applies effects the way the browser host does.
fn run_effects(effects: Vec<PageEffect>, store: &PreferenceStore<&MemorySlot>, marker: &mut bool) {
    for effect in effects {
        match effect {
            PageEffect::PersistDarkMode(dark) => store.save(dark),
            PageEffect::ApplyThemeMarker(dark) => *marker = dark,
        }
    }
}

fn titles(projects: Vec<&ProjectRecord>) -> Vec<&'static str> {
    projects.into_iter().map(|p| p.title).collect()
}

#[test]
fn first_visit_is_dark_and_toggles_persist() {
    let config = SiteConfig::default();
    let slot = MemorySlot::new();
    let store = PreferenceStore::new(&slot, config.preference_key.clone());

    let mut page = PageState::new(&config, store.load(), 1280, PROJECTS.len()).unwrap();
    let mut marker = false;
    run_effects(page.initial_effects(), &store, &mut marker);

    assert!(page.view().dark_mode);
    assert!(marker);
    assert_eq!(slot.get("darkMode"), None);

    for expected in [false, true, false] {
        let effects = page.apply(PageAction::ToggleTheme);
        run_effects(effects, &store, &mut marker);
        assert_eq!(page.view().dark_mode, expected);
        assert_eq!(marker, expected);
        assert_eq!(store.load(), Some(expected));
    }

    // Reload: only the theme survives.
    let reloaded = PageState::new(&config, store.load(), 1280, PROJECTS.len()).unwrap();
    assert!(!reloaded.view().dark_mode);
    assert_eq!(reloaded.view().current_project_index, 0);
}

#[test]
fn stored_value_other_than_true_starts_light() {
    let config = SiteConfig::default();
    for (stored, dark) in [("yes", false), ("TRUE", false), ("false", false), ("true", true), ("", true)] {
        let slot = MemorySlot::with_value("darkMode", stored);
        let store = PreferenceStore::new(&slot, config.preference_key.clone());
        let page = PageState::new(&config, store.load(), 1280, PROJECTS.len()).unwrap();
        assert_eq!(page.view().dark_mode, dark, "stored {stored:?}");
        assert_eq!(page.initial_effects(), vec![PageEffect::ApplyThemeMarker(dark)]);
    }
}

#[test]
fn desktop_carousel_walks_in_pages_of_three() {
    let mut page = PageState::new(&SiteConfig::default(), None, 1024, PROJECTS.len()).unwrap();

    assert_eq!(
        titles(page.visible_projects(&PROJECTS)),
        vec![
            "iMovie Application",
            "Malaria Cell Detection Tool",
            "AI Based Resume Parser"
        ]
    );

    page.apply(PageAction::PrevProjects);
    assert_eq!(page.view().current_project_index, 3);
    page.apply(PageAction::NextProjects);
    assert_eq!(page.view().current_project_index, 0);

    page.apply(PageAction::SelectDot(1));
    assert_eq!(
        titles(page.visible_projects(&PROJECTS)),
        vec![
            "Portfolio Website",
            "Weather Dashboard",
            "Task Management System"
        ]
    );
    let active: Vec<usize> = page
        .dots()
        .iter()
        .filter(|dot| dot.active)
        .map(|dot| dot.position)
        .collect();
    assert_eq!(active, vec![1]);
}

#[test]
fn mobile_carousel_wraps_one_at_a_time() {
    let mut page = PageState::new(&SiteConfig::default(), None, 375, PROJECTS.len()).unwrap();
    assert!(page.view().is_mobile);

    page.apply(PageAction::PrevProjects);
    assert_eq!(page.view().current_project_index, 5);
    assert_eq!(
        titles(page.visible_projects(&PROJECTS)),
        vec!["Task Management System"]
    );

    page.apply(PageAction::NextProjects);
    assert_eq!(page.view().current_project_index, 0);
}

#[test]
fn resizing_keeps_an_unaligned_index() {
    let mut page = PageState::new(&SiteConfig::default(), None, 400, PROJECTS.len()).unwrap();
    page.apply(PageAction::SelectDot(4));
    page.apply(PageAction::ViewportResized { width: 1440 });

    assert_eq!(page.view().current_project_index, 4);
    assert_eq!(
        titles(page.visible_projects(&PROJECTS)),
        vec![
            "Weather Dashboard",
            "Task Management System",
            "iMovie Application"
        ]
    );
    assert!(page.dots()[1].active);
}

#[test]
fn menu_and_theme_do_not_interfere() {
    let mut page = PageState::new(&SiteConfig::default(), Some(false), 800, PROJECTS.len()).unwrap();

    page.apply(PageAction::ToggleMenu);
    page.apply(PageAction::ToggleTheme);
    assert!(page.view().menu_open);
    assert!(page.view().dark_mode);

    for anchor in NavAnchor::ALL {
        page.apply(PageAction::ToggleMenu);
        page.apply(PageAction::Navigate(anchor));
        assert!(!page.view().menu_open);
    }
    assert!(page.view().dark_mode);
}
