use dioxus::prelude::*;
use portfolio_model::{Dot, ProjectRecord};

#[component]
pub fn ProjectsSection(
    projects: Vec<ProjectRecord>,
    dots: Vec<Dot>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_select_dot: Callback<usize>,
) -> Element {
    rsx! {
        section {
            id: "projects",
            class: "projects",
            h2 { class: "section-title", "My Projects" }

            div {
                class: "projects-slider",

                button {
                    class: "slider-btn slider-btn-prev",
                    aria_label: "Previous projects",
                    onclick: move |_| on_prev.call(()),
                    "❮"
                }

                div {
                    class: "projects-grid",
                    // Position keys: the same project can appear twice when the window wraps.
                    for (slot, project) in projects.into_iter().enumerate() {
                        ProjectCard { key: "{slot}", project }
                    }
                }

                button {
                    class: "slider-btn slider-btn-next",
                    aria_label: "Next projects",
                    onclick: move |_| on_next.call(()),
                    "❯"
                }
            }

            div {
                class: "slider-dots",
                for dot in dots {
                    span {
                        key: "{dot.position}",
                        class: dot_class(&dot),
                        onclick: move |_| on_select_dot.call(dot.position),
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectRecord) -> Element {
    let links = project.links();

    rsx! {
        div {
            class: "project-card",
            div { class: "project-image" }
            h3 { "{project.title}" }
            p { "{project.description}" }
            div {
                class: "project-links",
                if links.is_empty() {
                    span { "Coming Soon" }
                }
                for link in links {
                    a {
                        key: "{link.url()}",
                        href: link.url(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {link.label()}
                    }
                }
            }
        }
    }
}

fn dot_class(dot: &Dot) -> &'static str {
    if dot.active {
        "dot active"
    } else {
        "dot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_model::{Carousel, PageSize};

    #[test]
    fn only_the_current_page_dot_is_active() {
        let mut carousel = Carousel::new(6).unwrap();
        carousel.next(PageSize::DESKTOP);
        let classes: Vec<&str> = carousel.dots(PageSize::DESKTOP).map(|d| dot_class(&d)).collect();
        assert_eq!(classes, vec!["dot", "dot active"]);
    }
}
