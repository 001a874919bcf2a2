//! Static sections. They only read compile-time content.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_model::{
    NavAnchor, CERTIFICATIONS, CONTACT_CHANNELS, PROFILE, SKILL_CATEGORIES, TIMELINE,
};

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section {
            id: NavAnchor::Home.id(),
            class: "hero",
            div {
                class: "hero-content",
                h1 { "Hi, I'm {PROFILE.short_name}" }
                h2 { "{PROFILE.headline}" }
                p { "{PROFILE.summary}" }
                div {
                    class: "cta-buttons",
                    a { href: NavAnchor::Contact.href(), class: "cta-primary", "Contact Me" }
                    a { href: NavAnchor::Projects.href(), class: "cta-secondary", "View My Work" }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section {
            id: NavAnchor::About.id(),
            class: "about",
            h2 { class: "section-title", "About Me" }
            div {
                class: "about-content",
                div {
                    class: "about-text",
                    for paragraph in PROFILE.about.iter() {
                        p { "{paragraph}" }
                    }
                }
                div {
                    class: "about-image",
                    div { class: "profile-image-placeholder" }
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        section {
            id: NavAnchor::Skills.id(),
            class: "skills",
            h2 { class: "section-title", "My Skills" }
            div {
                class: "skills-content",
                for category in SKILL_CATEGORIES.iter() {
                    div {
                        key: "{category.title}",
                        class: "skill-category",
                        h3 { "{category.title}" }
                        ul {
                            class: "skill-list",
                            for skill in category.items.iter() {
                                li { "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection() -> Element {
    rsx! {
        section {
            id: NavAnchor::Experience.id(),
            class: "experience",
            h2 { class: "section-title", "Experience & Education" }
            div {
                class: "timeline",
                for entry in TIMELINE.iter() {
                    div {
                        key: "{entry.role}",
                        class: "timeline-item",
                        div {
                            class: "timeline-content",
                            h3 { "{entry.role}" }
                            h4 { "{entry.organization}" }
                            p { class: "timeline-date", "{entry.period}" }
                            p { "{entry.details}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CertificationsSection() -> Element {
    rsx! {
        section {
            id: "certifications",
            class: "certifications",
            h2 { class: "section-title", "Certifications" }
            div {
                class: "cert-container",
                for cert in CERTIFICATIONS.iter() {
                    div {
                        key: "{cert.title}",
                        class: "cert-item",
                        h3 { "{cert.title}" }
                        p { class: "cert-issuer", "{cert.issuer}" }
                        p { class: "cert-date", "{cert.period}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section {
            id: NavAnchor::Contact.id(),
            class: "contact",
            h2 { class: "section-title", "Get In Touch" }
            div {
                class: "contact-content",
                div {
                    class: "contact-info",
                    for channel in CONTACT_CHANNELS.iter() {
                        div {
                            key: "{channel.label}",
                            class: "contact-item",
                            h3 { "{channel.label}" }
                            p {
                                if channel.external {
                                    a {
                                        href: channel.href,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{channel.display}"
                                    }
                                } else {
                                    a { href: channel.href, "{channel.display}" }
                                }
                            }
                        }
                    }
                }
                ContactForm {}
            }
        }
    }
}

/// Rendered for completeness; there is no endpoint behind it.
#[component]
fn ContactForm() -> Element {
    rsx! {
        div {
            class: "contact-form",
            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    dioxus_logger::tracing::info!("Contact form submitted; no endpoint is configured");
                },
                div {
                    class: "form-group",
                    label { r#for: "name", "Name" }
                    input { r#type: "text", id: "name", name: "name", required: true }
                }
                div {
                    class: "form-group",
                    label { r#for: "email", "Email" }
                    input { r#type: "email", id: "email", name: "email", required: true }
                }
                div {
                    class: "form-group",
                    label { r#for: "message", "Message" }
                    textarea { id: "message", name: "message", rows: 5, required: true }
                }
                button { r#type: "submit", class: "submit-button", "Send Message" }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "footer",
            p { "© {year} {PROFILE.full_name}. All Rights Reserved." }
        }
    }
}

#[component]
pub fn ErrorState(error: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; color: var(--danger-text, #ef4444); padding: 2rem; text-align: center;",
            p { style: "font-weight: 500; margin-bottom: 0.5rem;", "Error loading page" }
            p { style: "font-size: 0.875rem; color: var(--text-secondary, #9ca3af);", "{error}" }
        }
    }
}
