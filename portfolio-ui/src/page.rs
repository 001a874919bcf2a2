//! Portfolio page
//!
//! `PortfolioShell` owns the page state and turns DOM events into
//! `PageAction`s; the section components only render.

use dioxus::prelude::*;

mod components;
mod effects;
mod shell;
pub mod storage;
mod styles;
pub mod viewport;

pub use shell::{use_theme, PortfolioShell};

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        PortfolioShell {}
    }
}
