use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use portfolio_ui::Portfolio;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Portfolio {}
    }
}
