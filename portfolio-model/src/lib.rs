//! Portfolio model - content and view state
//!
//! Everything here is target independent so it can be used by:
//! - the Dioxus front end (WASM)
//! - native unit and integration tests
//!
//! The front end owns the browser; this crate owns the rules.

pub mod carousel;
pub mod config;
pub mod content;
pub mod preference;
pub mod state;
pub mod toggle;
pub mod viewport;

pub use carousel::{Carousel, CarouselError, Dot, PageSize};
pub use config::{ConfigError, SiteConfig};
pub use content::{
    Certification, ContactChannel, NavAnchor, Profile, ProjectLink, ProjectRecord, SkillCategory,
    TimelineEntry, CERTIFICATIONS, CONTACT_CHANNELS, PROFILE, PROJECTS, SKILL_CATEGORIES,
    TIMELINE,
};
pub use preference::{MemorySlot, PreferenceError, PreferenceSlot, PreferenceStore};
pub use state::{PageAction, PageEffect, PageState, ViewState};
pub use toggle::{MenuToggle, ThemeContext, ThemeToggle, DARK_MODE_CLASS};
pub use viewport::{classify, ViewportState, MOBILE_BREAKPOINT_PX};
