//! Static page content.
//!
//! All of it is compile-time data; the view layer only ever borrows it.

use serde::Serialize;

// ============================================================================
// Types
// ============================================================================

/// A project card shown in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub source_code: Option<&'static str>,
    pub live_demo: Option<&'static str>,
}

/// Outbound link rendered on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum ProjectLink {
    SourceCode(&'static str),
    LiveDemo(&'static str),
}

impl ProjectLink {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectLink::SourceCode(_) => "Source Code",
            ProjectLink::LiveDemo(_) => "View Live",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            ProjectLink::SourceCode(url) | ProjectLink::LiveDemo(url) => url,
        }
    }
}

impl ProjectRecord {
    /// Source link first, then the live demo. Empty means "Coming Soon".
    pub fn links(&self) -> Vec<ProjectLink> {
        self.source_code
            .map(ProjectLink::SourceCode)
            .into_iter()
            .chain(self.live_demo.map(ProjectLink::LiveDemo))
            .collect()
    }

    pub fn has_links(&self) -> bool {
        self.source_code.is_some() || self.live_demo.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub display: &'static str,
    pub href: &'static str,
    /// Opened in a new tab when true (profiles), in place otherwise (mailto/tel).
    pub external: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub about: &'static [&'static str],
}

/// In-page navigation targets, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAnchor {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl NavAnchor {
    pub const ALL: [NavAnchor; 6] = [
        NavAnchor::Home,
        NavAnchor::About,
        NavAnchor::Skills,
        NavAnchor::Projects,
        NavAnchor::Experience,
        NavAnchor::Contact,
    ];

    /// Element id of the section this anchor scrolls to.
    pub fn id(&self) -> &'static str {
        match self {
            NavAnchor::Home => "home",
            NavAnchor::About => "about",
            NavAnchor::Skills => "skills",
            NavAnchor::Projects => "projects",
            NavAnchor::Experience => "experience",
            NavAnchor::Contact => "contact",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            NavAnchor::Home => "#home",
            NavAnchor::About => "#about",
            NavAnchor::Skills => "#skills",
            NavAnchor::Projects => "#projects",
            NavAnchor::Experience => "#experience",
            NavAnchor::Contact => "#contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavAnchor::Home => "Home",
            NavAnchor::About => "About",
            NavAnchor::Skills => "Skills",
            NavAnchor::Projects => "Projects",
            NavAnchor::Experience => "Experience",
            NavAnchor::Contact => "Contact",
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub const PROFILE: Profile = Profile {
    short_name: "Sumanth",
    full_name: "Kotla Sayee Sumanth",
    headline: "Software Developer",
    summary: "Enthusiastic Computer Science graduate with hands-on experience in developing RESTful APIs, microservices, and ML-based applications.",
    about: &[
        "I'm a passionate software developer with a strong foundation in modern web technologies. My goal is to build efficient, scalable, and user-friendly applications that solve real-world problems.",
        "With a background in Computer Science from Amrita Vishwa Vidhyapeetham, I specialize in developing RESTful APIs, microservices, and ML-based applications. I'm currently working as a Specialist Programmer at Infosys Ltd, where I contribute to building high-quality software solutions.",
    ],
};

pub const PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        title: "iMovie Application",
        description: "A movie booking application built using microservices architecture with Java, Spring Boot, and Angular. Implemented service discovery and load balancing for optimized communication.",
        source_code: Some("https://github.com/imovie-app"),
        live_demo: None,
    },
    ProjectRecord {
        title: "Malaria Cell Detection Tool",
        description: "A tool that detects malaria by classifying blood cells using Deep Learning (CNN). Created an interactive Streamlit interface for users to upload images and receive diagnostic results.",
        source_code: None,
        live_demo: Some(
            "https://sumanth1602-malaria-cell-detection-nndl-deploy-psbkrc.streamlit.app/",
        ),
    },
    ProjectRecord {
        title: "AI Based Resume Parser",
        description: "A user-friendly resume parser utilizing large language models (GPT, Llama) with automatic text extraction and multi-faceted analysis of uploaded resumes.",
        source_code: Some("https://github.com/Sumanth1602/ai-resume-parser"),
        live_demo: None,
    },
    ProjectRecord {
        title: "Portfolio Website",
        description: "A responsive personal portfolio website built with Rust and Dioxus, featuring dark mode toggle and mobile-friendly design.",
        source_code: Some("https://github.com/Sumanth1602/portfolio-website"),
        live_demo: None,
    },
    ProjectRecord {
        title: "Weather Dashboard",
        description: "Real-time weather forecast application using OpenWeather API with location tracking and interactive data visualization.",
        source_code: Some("https://github.com/Sumanth1602/weather-app"),
        live_demo: Some("https://sumanth-weather-dashboard.netlify.app"),
    },
    ProjectRecord {
        title: "Task Management System",
        description: "A full-stack task management application with user authentication, task categorization, and deadline reminders built with Spring Boot and React.",
        source_code: Some("https://github.com/Sumanth1602/task-manager"),
        live_demo: None,
    },
];

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Languages",
        items: &["Java", "Python", "TypeScript", "SQL", "C++", "HTML/CSS"],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        items: &[
            "Spring Boot",
            "Angular",
            "React",
            "Bootstrap",
            "Streamlit",
            "Pandas/NumPy",
        ],
    },
    SkillCategory {
        title: "Tools & Concepts",
        items: &[
            "Git",
            "Docker",
            "Kubernetes",
            "REST APIs",
            "Microservices",
            "Deep Learning (CNN, LLM)",
        ],
    },
];

pub const TIMELINE: [TimelineEntry; 2] = [
    TimelineEntry {
        role: "Specialist Programmer",
        organization: "Infosys Ltd. - Hyderabad",
        period: "July 2024 - Present",
        details: "Developed RESTful APIs for a logistics and shipping client (CMA CGM) using Java and Spring Boot. Collaborated with cross-functional teams to integrate front-end and back-end features with Angular and TypeScript. Optimized API performance and followed agile methodologies.",
    },
    TimelineEntry {
        role: "B.Tech in Computer Science and Engineering",
        organization: "Amrita Vishwa Vidhyapeetham",
        period: "Sept 2020 - May 2024",
        details: "GPA: 7.78/10.0. Coursework included Operating Systems, Database Management Systems, Computer Networks, Machine Learning, Neural Networks and Deep Learning, Big Data Analytics.",
    },
];

pub const CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "Developing REST APIs using Springboot",
        issuer: "Offered by Lex - Infosys",
        period: "Jul 2024 - Aug 2024",
    },
    Certification {
        title: "Developing Single Page Applications using Angular",
        issuer: "Offered by Lex - Infosys",
        period: "Aug 2024 - Sept 2024",
    },
    Certification {
        title: "IBM Data Science Professional Certificate",
        issuer: "Offered by IBM & Coursera",
        period: "May 2022 - Aug 2022",
    },
    Certification {
        title: "Natural Language Processing Specialization",
        issuer: "Offered by Deeplearning.AI and Coursera",
        period: "Oct 2023 - Dec 2023",
    },
];

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        label: "Email",
        display: "kotlaks@gmail.com",
        href: "mailto:kotlaks@gmail.com",
        external: false,
    },
    ContactChannel {
        label: "Phone",
        display: "+91 7981531158",
        href: "tel:+917981531158",
        external: false,
    },
    ContactChannel {
        label: "LinkedIn",
        display: "linkedin.com/sayee-sumanth-kotla",
        href: "https://www.linkedin.com/in/sayee-sumanth-kotla/",
        external: true,
    },
    ContactChannel {
        label: "GitHub",
        display: "github.com/Sumanth1602",
        href: "https://github.com/Sumanth1602",
        external: true,
    },
];

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_links_keep_source_before_demo() {
        let weather = &PROJECTS[4];
        assert_eq!(
            weather.links(),
            vec![
                ProjectLink::SourceCode("https://github.com/Sumanth1602/weather-app"),
                ProjectLink::LiveDemo("https://sumanth-weather-dashboard.netlify.app"),
            ]
        );
        assert_eq!(weather.links()[1].label(), "View Live");
    }

    #[test]
    fn project_without_links_reports_none() {
        let draft = ProjectRecord {
            title: "Draft",
            description: "",
            source_code: None,
            live_demo: None,
        };
        assert!(!draft.has_links());
        assert!(draft.links().is_empty());
        assert!(PROJECTS.iter().all(ProjectRecord::has_links));
    }

    #[test]
    fn nav_anchor_hrefs_point_at_ids() {
        for anchor in NavAnchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
        assert_eq!(NavAnchor::ALL.len(), 6);
    }

    #[test]
    fn project_link_serializes_with_kind_tag() {
        let json = serde_json::to_string(&ProjectLink::LiveDemo("https://x.test")).unwrap();
        assert_eq!(json, r#"{"kind":"live_demo","url":"https://x.test"}"#);
    }
}
