//! Markup for the page views.
//!
//! Pure string builders so the templates can be checked on the host. Every
//! value that comes from the catalog or the user goes through [`escape`].

use crate::constants::*;
use folio_core::catalog::Project;
use folio_core::nav::Section;
use std::fmt::Write;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// In-app link; the click is intercepted and routed without a reload.
pub fn app_link(href: &str, class: &str, label: &str) -> String {
    let href = escape(href);
    format!(r#"<a href="{href}" {DATA_LINK}="{href}" class="{class}">{label}</a>"#)
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::Home => "Home",
        Section::About => "About",
        Section::Projects => "Projects",
        Section::Contact => "Contact",
    }
}

fn theme_toggle(id: &str) -> String {
    format!(
        r#"<button id="{id}" class="theme-toggle" {DATA_THEME_TOGGLE} aria-label="Toggle theme"><i class="fa-solid {ICON_MOON_CLASS}"></i></button>"#
    )
}

pub fn header() -> String {
    let mut links = String::new();
    for section in Section::LINKED {
        let id = section.id();
        _ = write!(
            links,
            r##"<a href="#{id}" {DATA_SECTION}="{id}">{}</a>"##,
            section_label(section)
        );
    }
    format!(
        r##"<header class="header">
<a href="#" id="{LOGO_ID}" class="logo {ACTIVE_CLASS}">Lwazi Mhlongo</a>
<div id="{MENU_TOGGLE_ID}" class="mobile-menu-icon"><i class="fa-solid fa-bars"></i></div>
<div id="{NAV_WRAP_ID}" class="nav-wrap">
<nav id="{NAV_ID}" class="nav">
<div id="{ACTIVE_BUBBLE_ID}" class="bubble active" style="left: 0px; width: 0px; opacity: 0"></div>
<div id="{HOVER_BUBBLE_ID}" class="bubble hover" style="left: 0px; width: 0px; opacity: 0"></div>
{links}
</nav>
{mobile_toggle}
</div>
<div class="header-actions">
{desktop_toggle}
<a class="visit-btn" href="{GITHUB_URL}" target="_blank" rel="noopener noreferrer">Visit Github</a>
</div>
</header>"##,
        mobile_toggle = theme_toggle(MOBILE_THEME_TOGGLE_ID),
        desktop_toggle = theme_toggle(THEME_TOGGLE_ID),
    )
}

fn hero() -> String {
    format!(
        r##"<section id="{home}" class="hero-section">
<img src="{PROFILE_IMAGE}" alt="Profile" class="mobile-profile-img">
<div class="hero-content">
<h3>Hello, I'm</h3>
<h1>Nhlanzeko Lwazi Mhlongo</h1>
<p class="subtitle">Welcome to my portfolio! I am a Junior Software Engineer creating innovative solutions.<br><span class="instruction">(Try dragging the lanyard!)</span></p>
<div class="btn-group">
<a class="btn" href="{RESUME_URL}" target="_blank" rel="noopener noreferrer">Resume / CV</a>
<a class="btn" href="#{contact}" {DATA_SECTION}="{contact}">Contact</a>
</div>
</div>
</section>"##,
        home = Section::Home.id(),
        contact = Section::Contact.id(),
    )
}

const ABOUT_STACK: [(&str, &str); 9] = [
    ("HTML", "/assets/icons/html.svg"),
    ("CSS", "/assets/icons/css.svg"),
    ("JavaScript", "/assets/icons/javascript.svg"),
    ("Git", "/assets/icons/git.svg"),
    ("Python", "/assets/icons/python.svg"),
    ("React", "/assets/icons/react-native.svg"),
    ("TypeScript", "/assets/icons/typescript.svg"),
    ("Tailwind", "/assets/icons/tailwindcss.svg"),
    ("Next JS", "/assets/icons/nextjs.svg"),
];

fn about() -> String {
    let mut badges = String::new();
    for (name, icon) in ABOUT_STACK {
        _ = write!(
            badges,
            r#"<div class="tech-badge"><img src="{icon}" alt="{name}" loading="lazy"><span>{name}</span></div>"#
        );
    }
    format!(
        r#"<section id="{about}" class="about-section">
<h2 class="section-title">About Me</h2>
<div class="about-grid">
<div class="card">
<img src="/assets/icons/education.png" alt="Education" loading="lazy" class="card-icon">
<h3>Education</h3>
<p><strong>Eduvos</strong></p>
<p>B.Sc. Information Technology<br>(Software Engineering)</p>
<a href="{QUALIFICATION_URL}" target="_blank" rel="noopener noreferrer" class="link-text">View Qualification</a>
</div>
<div class="card">
<h3>My Tech Stack</h3>
<div class="tech-container">{badges}</div>
</div>
</div>
</section>"#,
        about = Section::About.id(),
    )
}

/// Project summary card used on the home page and the archive.
pub fn project_card(project: &Project) -> String {
    let title = escape(project.title);
    let image = if project.image.is_empty() {
        r#"<div class="card-placeholder"></div>"#.to_string()
    } else {
        format!(
            r#"<img src="{}" alt="{title}" class="card-image" loading="lazy">"#,
            escape(project.image)
        )
    };
    let action = if project.is_coming_soon() {
        r#"<button class="btn sm-btn coming-soon" disabled>Coming Soon</button>"#.to_string()
    } else {
        app_link(&format!("/project/{}", project.id), "btn sm-btn", "View More")
    };
    format!(
        r#"<div class="project-card"><div class="card-image-container">{image}</div><div class="card-content"><h3>{title}</h3><p>{}</p><div class="card-buttons">{action}</div></div></div>"#,
        escape(project.short_description)
    )
}

pub fn project_grid<'a>(projects: impl IntoIterator<Item = &'a Project>) -> String {
    let cards: String = projects.into_iter().map(project_card).collect();
    if cards.is_empty() {
        r#"<div class="no-results"><h3>No projects found matching that filter.</h3></div>"#
            .to_string()
    } else {
        cards
    }
}

fn projects_section(featured: &[Project]) -> String {
    format!(
        r#"<section id="{id}" class="projects-section">
<h2 class="section-title">Recent Projects</h2>
<div class="projects-grid">{cards}</div>
<div class="view-all">{link}</div>
</section>"#,
        id = Section::Projects.id(),
        cards = project_grid(featured),
        link = app_link("/all-projects", "btn", "View All Projects &rarr;"),
    )
}

fn contact_section() -> String {
    format!(
        r#"<section id="{id}" class="contact-section">
<h2 class="section-title">Get in Touch</h2>
<form id="{CONTACT_FORM_ID}" class="input-box" novalidate>
<input id="{CONTACT_EMAIL_ID}" type="email" placeholder="Your Email" required>
<textarea id="{CONTACT_MESSAGE_ID}" class="message-box" placeholder="Your Message..." required></textarea>
<button id="{CONTACT_SUBMIT_ID}" type="submit" class="{SUBMIT_BASE_CLASS}">
<svg width="196" height="70" viewBox="0 0 196 70">
<rect class="btn-shape btn-bg" x="3" y="3" width="190" height="64" rx="32" ry="32"></rect>
<rect class="btn-shape btn-color" x="3" y="3" width="190" height="64" rx="32" ry="32"></rect>
<text class="kk-check" x="96" y="42" text-anchor="middle">&#10004;</text>
<text class="kk-text" x="96" y="42" text-anchor="middle">Send Message</text>
</svg>
</button>
</form>
<div class="socials">
<a href="mailto:{CONTACT_MAIL}" title="Email Me" class="social-icon"><i class="fa-solid fa-envelope"></i></a>
<a href="{LINKEDIN_URL}" target="_blank" rel="noopener" class="social-icon"><i class="fa-brands fa-linkedin"></i></a>
<a href="{GITHUB_URL}" target="_blank" rel="noopener" class="social-icon"><i class="fa-brands fa-github"></i></a>
</div>
</section>"#,
        id = Section::Contact.id(),
    )
}

pub fn home_page(featured: &[Project]) -> String {
    format!(
        r#"<div class="overlay">{}{}{}{}{}</div>"#,
        header(),
        hero(),
        about(),
        projects_section(featured),
        contact_section()
    )
}

/// Submit button class list for a given state modifier (`""`, `loading`, `success`).
pub fn submit_class(modifier: &str) -> String {
    if modifier.is_empty() {
        SUBMIT_BASE_CLASS.to_string()
    } else {
        format!("{SUBMIT_BASE_CLASS} {modifier}")
    }
}

pub fn project_page(project: &Project) -> String {
    let title = escape(project.title);
    let mut links = String::new();
    if let Some(link) = project.link {
        _ = write!(
            links,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="btn">View Live <i class="fa-solid fa-arrow-up-right-from-square"></i></a>"#,
            escape(link)
        );
    }
    if let Some(repo) = project.repo_link {
        _ = write!(
            links,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="btn outline-btn">GitHub Repo <i class="fa-brands fa-github"></i></a>"#,
            escape(repo)
        );
    }
    let tech = if project.tech_stack.is_empty() {
        String::new()
    } else {
        let badges: String = project
            .tech_stack
            .iter()
            .map(|t| {
                format!(
                    r#"<div class="tech-badge-small"><img src="{}" alt="{name}" loading="lazy"><span>{name}</span></div>"#,
                    escape(t.icon),
                    name = escape(t.name)
                )
            })
            .collect();
        format!(
            r#"<div class="details-tech"><h3>Technologies Used</h3><div class="tech-stack-grid">{badges}</div></div>"#
        )
    };
    format!(
        r##"<div id="{PROJECT_PAGE_ID}" class="project-page-container">
<nav class="project-nav"><a id="{BACK_LINK_ID}" href="/#projects" class="back-link"><i class="fa-solid fa-arrow-left"></i> Back to Portfolio</a></nav>
<div class="project-content">
<div class="project-hero">
<h1 class="project-title">{title}</h1>
<img src="{hero}" alt="{title}" class="project-hero-image">
<div class="project-links">{links}</div>
</div>
<hr class="divider">
<div class="project-details ai-panel">
<div class="ai-box">
<div class="ai-header"><h3>AI Summary (Simple English)</h3><button id="{AI_BUTTON_ID}" class="btn sm-btn"><i class="fa-solid fa-wand-magic-sparkles"></i> Generate Analysis</button></div>
<div id="{AI_OUTPUT_ID}" class="ai-output"></div>
</div>
</div>
<div class="project-details">
<div class="details-text"><h3>Overview</h3><p class="pre-line">{overview}</p></div>
{tech}
</div>
</div>
</div>"##,
        hero = escape(project.hero_image()),
        overview = escape(project.full_description),
    )
}

/// Typewriter output: the revealed text plus a blinking cursor while typing.
pub fn ai_output(visible: &str, typing: bool) -> String {
    let mut out = escape(visible);
    if typing {
        out.push_str(r#"<span class="cursor-blink">|</span>"#);
    }
    out
}

pub fn not_found_page(message: &str) -> String {
    format!(
        r#"<div class="project-page-container"><h1>{}</h1>{}</div>"#,
        escape(message),
        app_link("/", "back-link", "Back Home")
    )
}

pub fn filter_pills(filters: &[&str], active: &str) -> String {
    filters
        .iter()
        .map(|tech| {
            let class = if *tech == active {
                "btn sm-btn active-filter"
            } else {
                "btn sm-btn outline-btn"
            };
            let tech = escape(tech);
            format!(r#"<button class="{class}" {DATA_FILTER}="{tech}">{tech}</button>"#)
        })
        .collect()
}

pub fn all_projects_page(filters: &[&str], active: &str, cards: &str) -> String {
    format!(
        r#"<div class="project-page-container">
<nav class="project-nav">{back}</nav>
<div class="project-content archive">
<div class="archive-title"><h1 class="project-title">All Projects</h1><p>A complete archive of my development work.</p></div>
<div class="archive-controls">
<div class="input-box search-box"><input id="{SEARCH_INPUT_ID}" type="text" placeholder="Search projects..."></div>
<div id="{FILTER_BAR_ID}" class="tech-container">{pills}</div>
</div>
<div id="{PROJECT_GRID_ID}" class="projects-grid">{cards}</div>
</div>
</div>"#,
        back = app_link("/#projects", "back-link", r#"<i class="fa-solid fa-arrow-left"></i> Back Home"#),
        pills = filter_pills(filters, active),
    )
}
