// ============================================================================
// Stylesheet (light tokens by default, `.dark-mode` on <html> switches them)
// ============================================================================

pub const STYLESHEET: &str = r#"
:root {
    /* Colors */
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #64748b;
    --accent-bg: #2563eb;
    --accent-bg-hover: #1d4ed8;
    --accent-text: #ffffff;
    --border-color: #cbd5e1;

    /* Semantic colors */
    --header-bg: rgba(248, 250, 252, 0.9);
    --card-bg: var(--bg-secondary);
    --input-bg: #ffffff;
    --hover-bg: rgba(15, 23, 42, 0.08);
    --danger-text: #b91c1c;

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow-sm: 0 1px 2px rgba(15, 23, 42, 0.08);
    --shadow-md: 0 4px 12px rgba(15, 23, 42, 0.12);
}

:root.dark-mode {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --accent-text: #ffffff;
    --border-color: #334155;
    --header-bg: rgba(15, 23, 42, 0.9);
    --card-bg: var(--bg-secondary);
    --input-bg: var(--bg-secondary);
    --hover-bg: rgba(255, 255, 255, 0.1);
    --danger-text: #ef4444;
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.3);
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
}

* {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
    transition: background 0.2s ease, color 0.2s ease;
}

a {
    color: var(--accent-bg);
}

section {
    padding: 5rem 2rem;
    max-width: 1200px;
    margin: 0 auto;
}

.section-title {
    text-align: center;
    margin-bottom: 2.5rem;
}

/* Header */
.header {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 0.75rem 2rem;
    background: var(--header-bg);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border-color);
}

.logo h2 {
    margin: 0;
}

.nav ul {
    display: flex;
    gap: 1.5rem;
    list-style: none;
    margin: 0;
    padding: 0;
}

.nav a {
    color: var(--text-primary);
    text-decoration: none;
}

.nav a:hover {
    color: var(--accent-bg);
}

.hamburger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: transparent;
    border: none;
    cursor: pointer;
}

.hamburger-menu span {
    width: 24px;
    height: 2px;
    background: var(--text-primary);
}

.theme-toggle {
    width: 36px;
    height: 36px;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    cursor: pointer;
}

/* Hero */
.hero {
    min-height: 80vh;
    display: flex;
    align-items: center;
}

.cta-buttons {
    display: flex;
    gap: 1rem;
    margin-top: 1.5rem;
}

.cta-primary,
.cta-secondary,
.submit-button {
    padding: 0.75rem 1.5rem;
    border-radius: var(--radius-md);
    text-decoration: none;
    font-weight: 600;
}

.cta-primary,
.submit-button {
    background: var(--accent-bg);
    color: var(--accent-text);
    border: none;
    cursor: pointer;
}

.cta-secondary {
    border: 1px solid var(--accent-bg);
}

/* About */
.about-content {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 2rem;
    align-items: center;
}

.profile-image-placeholder {
    width: 100%;
    aspect-ratio: 1;
    border-radius: 50%;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
}

/* Skills */
.skills-content {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.skill-category,
.cert-item,
.project-card,
.timeline-content {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-lg);
    padding: 1.5rem;
    box-shadow: var(--shadow-sm);
}

.skill-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    list-style: none;
    padding: 0;
}

.skill-list li {
    padding: 0.25rem 0.75rem;
    border-radius: var(--radius-sm);
    background: var(--hover-bg);
}

/* Projects carousel */
.projects-slider {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.projects-grid {
    flex: 1;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.project-image {
    height: 140px;
    border-radius: var(--radius-md);
    background: var(--hover-bg);
    margin-bottom: 1rem;
}

.project-links {
    display: flex;
    gap: 1rem;
}

.project-links span {
    color: var(--text-muted);
}

.slider-btn {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    border: 1px solid var(--border-color);
    background: var(--bg-secondary);
    color: var(--text-primary);
    cursor: pointer;
    flex-shrink: 0;
}

.slider-btn:hover {
    background: var(--hover-bg);
}

.slider-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 1.5rem;
}

.dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    background: var(--border-color);
    cursor: pointer;
}

.dot.active {
    background: var(--accent-bg);
}

/* Experience */
.timeline {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    border-left: 2px solid var(--accent-bg);
    padding-left: 1.5rem;
}

.timeline-date,
.cert-date,
.cert-issuer {
    color: var(--text-secondary);
}

/* Certifications */
.cert-container {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
}

/* Contact */
.contact-content {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.form-group {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    margin-bottom: 1rem;
}

.form-group input,
.form-group textarea {
    padding: 0.5rem 0.75rem;
    background: var(--input-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    font: inherit;
}

.footer {
    text-align: center;
    padding: 2rem;
    border-top: 1px solid var(--border-color);
    color: var(--text-secondary);
}

/* Tablet */
@media (max-width: 1024px) {
    .skills-content {
        grid-template-columns: 1fr;
    }

    .about-content,
    .contact-content {
        grid-template-columns: 1fr;
    }
}

/* Mobile: matches the 480px breakpoint the carousel uses */
@media (max-width: 480px) {
    section {
        padding: 3rem 1rem;
    }

    .hamburger-menu {
        display: flex;
    }

    .nav {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: var(--header-bg);
        border-bottom: 1px solid var(--border-color);
    }

    .nav.nav-open {
        display: block;
    }

    .nav ul {
        flex-direction: column;
        padding: 1rem 2rem;
    }

    .projects-grid {
        grid-template-columns: 1fr;
    }

    .cert-container {
        grid-template-columns: 1fr;
    }
}
"#;
