use portfolio_model::{PageEffect, PreferenceSlot, PreferenceStore, DARK_MODE_CLASS};

use crate::interop::set_root_class;

pub fn run_effects<S: PreferenceSlot>(effects: Vec<PageEffect>, store: &PreferenceStore<S>) {
    for effect in effects {
        match effect {
            PageEffect::PersistDarkMode(dark) => {
                store.save(dark);
            }
            PageEffect::ApplyThemeMarker(dark) => {
                set_root_class(DARK_MODE_CLASS, dark);
            }
        }
    }
}
