use dioxus::prelude::*;
use portfolio_model::{MenuToggle, NavAnchor, PROFILE};

use crate::page::shell::use_theme;

#[component]
pub fn Header(
    menu: MenuToggle,
    on_toggle_menu: Callback<()>,
    on_navigate: Callback<NavAnchor>,
    on_toggle_theme: Callback<()>,
) -> Element {
    let theme = use_theme();
    let nav_class = menu.nav_class();

    rsx! {
        header {
            class: "header",

            div {
                class: "logo",
                h2 { "{PROFILE.short_name}" }
            }

            button {
                class: "hamburger-menu",
                aria_label: "Toggle navigation menu",
                onclick: move |_| on_toggle_menu.call(()),
                span {}
                span {}
                span {}
            }

            nav {
                class: "{nav_class}",
                ul {
                    for anchor in NavAnchor::ALL {
                        li {
                            key: "{anchor.id()}",
                            a {
                                href: anchor.href(),
                                onclick: move |_| on_navigate.call(anchor),
                                {anchor.label()}
                            }
                        }
                    }
                }
            }

            button {
                class: "theme-toggle",
                aria_label: theme.toggle_label(),
                title: theme.toggle_label(),
                onclick: move |_| on_toggle_theme.call(()),
                {theme.toggle_icon()}
            }
        }
    }
}
