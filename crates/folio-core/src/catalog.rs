//! Static portfolio catalog.
//!
//! Projects are compiled in and never mutated. Asset fields hold URLs relative
//! to the site root; the front end renders them as-is.

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Filter value that matches every project.
pub const ALL_TECH: &str = "All";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechTag {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub ai_analysis: &'static str,
    pub image: &'static str,
    pub modal_image: Option<&'static str>,
    pub link: Option<&'static str>,
    pub repo_link: Option<&'static str>,
    pub tech_stack: &'static [TechTag],
}

impl Project {
    /// Projects with nowhere to send the visitor are shown as "Coming Soon".
    pub fn is_coming_soon(&self) -> bool {
        self.link.is_none() && self.repo_link.is_none()
    }

    pub fn hero_image(&self) -> &'static str {
        self.modal_image.unwrap_or(self.image)
    }

    pub fn uses_tech(&self, name: &str) -> bool {
        self.tech_stack.iter().any(|t| t.name == name)
    }

    /// Case-insensitive match against title and short description.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.title.to_lowercase().contains(&q)
            || self.short_description.to_lowercase().contains(&q)
    }
}

/// Read-only view over a project list with an id index.
pub struct Catalog {
    projects: &'static [Project],
    by_id: FnvHashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(projects: &'static [Project]) -> Self {
        let mut by_id = FnvHashMap::default();
        for (i, p) in projects.iter().enumerate() {
            // first entry wins if an id is ever duplicated
            by_id.entry(p.id).or_insert(i);
        }
        Self { projects, by_id }
    }

    pub fn builtin() -> Self {
        Self::new(PROJECTS)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn all(&self) -> &'static [Project] {
        self.projects
    }

    pub fn find(&self, id: &str) -> Option<&'static Project> {
        self.by_id.get(id).map(|&i| &self.projects[i])
    }

    /// Leading projects shown on the home page.
    pub fn featured(&self, count: usize) -> &'static [Project] {
        &self.projects[..count.min(self.projects.len())]
    }

    /// `"All"` followed by every tech name in first-seen order.
    pub fn tech_filters(&self) -> SmallVec<[&'static str; 16]> {
        let mut out: SmallVec<[&'static str; 16]> = SmallVec::new();
        out.push(ALL_TECH);
        for tag in self.projects.iter().flat_map(|p| p.tech_stack.iter()) {
            if !out.contains(&tag.name) {
                out.push(tag.name);
            }
        }
        out
    }

    pub fn filter(&self, tech: &str, search: &str) -> Vec<&'static Project> {
        self.projects
            .iter()
            .filter(|p| tech == ALL_TECH || p.uses_tech(tech))
            .filter(|p| p.matches_search(search))
            .collect()
    }
}

mod icons {
    pub const CSS: &str = "/assets/icons/css.svg";
    pub const DOCKER: &str = "/assets/icons/docker.svg";
    pub const GIT: &str = "/assets/icons/git.svg";
    pub const JAVA: &str = "/assets/icons/java.svg";
    pub const JAVASCRIPT: &str = "/assets/icons/javascript.svg";
    pub const NEXTJS: &str = "/assets/icons/nextjs.svg";
    pub const POSTGRES: &str = "/assets/icons/postgresql.svg";
    pub const SPRING_BOOT: &str = "/assets/icons/spring-boot.svg";
    pub const TAILWIND: &str = "/assets/icons/tailwindcss.svg";
    pub const TYPESCRIPT: &str = "/assets/icons/typescript.svg";
}

const fn tag(name: &'static str, icon: &'static str) -> TechTag {
    TechTag { name, icon }
}

const PLACEHOLDER_IMAGE: &str = "/assets/projects/placeholder.webp";
const IN_DEVELOPMENT_ANALYSIS: &str = "Analysis: This project is currently being built. \
Check back soon to see how it solves real-world problems!";
const IN_DEVELOPMENT_DESCRIPTION: &str =
    "This project is currently under development. Detailed specifications will be updated upon completion.";

pub static PROJECTS: &[Project] = &[
    Project {
        id: "asset-compass",
        title: "Asset Compass",
        category: "Full-Stack FinTech",
        short_description: "A professional financial tracking dashboard featuring real-time market data and secure stateless authentication.",
        full_description: "Asset Compass is a comprehensive financial tracking platform designed to help users monitor their net worth across various asset classes in real-time.

The architecture is built on a modern, decoupled stack:
• Frontend: A responsive, dark-themed dashboard built with Next.js 15, Tailwind CSS, and Recharts for interactive data visualization.
• Backend: A robust Java Spring Boot API utilizing Spring Security for stateless JWT authentication and Spring Data JPA for data persistence.
• Database: Hosted on Neon (Serverless PostgreSQL) with customized HikariCP connection pooling to handle idle timeouts gracefully.

Key Engineering Highlights:
• Real-Time Market Data: Integrated with the AlphaVantage API to fetch live stock prices and foreign exchange rates (USD/ZAR).
• Resilient Design (Circuit Breaker): If the third-party financial API hits its rate limit, the backend catches the exception and serves deterministic mock data, so the dashboard keeps working.
• Automated Audit Trail: Every asset purchase and price refresh generates an immutable transaction log, powering the historical performance charts.",
        ai_analysis: "Analysis: Think of this as a digital control center for personal wealth. Instead of checking ten different apps to see how your stocks or savings are doing, this app brings it all together in one clear dashboard. The standout feature is its 'safety net': if the live stock market data provider crashes or limits access, the app automatically switches to backup data, ensuring the user is never left staring at a broken screen.",
        image: "/assets/projects/asset-compass-logo.webp",
        modal_image: Some("/assets/projects/asset-compass-screen.webp"),
        link: Some("https://asset-compass-beta.vercel.app"),
        repo_link: Some("https://github.com/Lwazi-M/asset-compass"),
        tech_stack: &[
            tag("Next.js", icons::NEXTJS),
            tag("TypeScript", icons::TYPESCRIPT),
            tag("Tailwind CSS", icons::TAILWIND),
            tag("Java", icons::JAVA),
            tag("Spring Boot", icons::SPRING_BOOT),
            tag("PostgreSQL", icons::POSTGRES),
        ],
    },
    Project {
        id: "atomic-ledger",
        title: "Atomic Ledger",
        category: "Backend API",
        short_description: "A secure financial transaction dashboard built with a Java Spring Boot N-Tier architecture.",
        full_description: "Atomic Ledger is a financial application that simulates real-world banking infrastructure through a strict N-Tier Layered Design.

The architecture includes:
• A RESTful API Presentation Layer that intercepts HTTP requests and deserializes JSON payloads.
• A core Business Logic Layer that executes pre-condition fraud checks and account-based routing.
• An Integration Layer that calls the Google Gemini API for transaction categorization, backed by an in-memory cache for instant retrieval.
• A Data Access Layer using Spring Data JPA and Hibernate over PostgreSQL, ensuring ACID compliance.

Built with Java 21 and Spring Boot 3, constructor-based dependency injection and the 12-Factor App methodology for credentials. Everything is containerized with Docker.",
        ai_analysis: "Analysis: This project focuses on the invisible engine that powers modern banking. It's essentially the 'traffic controller' for money, ensuring every transaction goes exactly where it needs to safely and instantly. It follows strict, enterprise-level rules so that even if thousands of transactions happen at once, the system remains secure, organized, and fast, partly by 'remembering' common requests to save time.",
        image: "/assets/projects/atomic-ledger.jpg",
        modal_image: Some("/assets/projects/atomic-ledger-screen.png"),
        link: Some("https://your-render-url-here.onrender.com"),
        repo_link: Some("https://github.com/Lwazi-M/atomic-ledger"),
        tech_stack: &[
            tag("Java", icons::JAVA),
            tag("Spring Boot", icons::SPRING_BOOT),
            tag("PostgreSQL", icons::POSTGRES),
            tag("Docker", icons::DOCKER),
        ],
    },
    Project {
        id: "studyconnect",
        title: "StudyConnect",
        category: "Web App",
        short_description: "A comprehensive student connection platform built for educational resource management.",
        full_description: "StudyConnect was born from a simple realization: students often feel isolated and frustrated when wrestling with tough academic concepts late at night.

The Mission:
Bridge the gap between students and academic success by letting them:
• Connect: Instantly chat with peers tackling the same modules.
• Share: Access a Resource Hub of notes and past papers.
• Collaborate: Join study groups to organize sessions.

The Evolution (v1.0 to v2.0):
The original StudyConnect was a native Android application built with Java and Firebase. StudyConnect 2.0 is a Progressive Web App built with Next.js, TypeScript and Tailwind CSS, removing the barrier of APK downloads.",
        ai_analysis: "Analysis: This is essentially a specialized social network built just for studying. It solves the isolation students often feel by instantly connecting them with classmates taking the same courses. Users can share notes, chat, and form study groups online, ensuring no one has to struggle through difficult modules alone.",
        image: "/assets/projects/studyconnect.webp",
        modal_image: Some("/assets/projects/studyconnect-app.webp"),
        link: Some("https://studyconnect-lovat.vercel.app/"),
        repo_link: Some("https://github.com/Lwazi-M/studyconnect-2.0"),
        tech_stack: &[
            tag("TypeScript", icons::TYPESCRIPT),
            tag("CSS", icons::CSS),
            tag("Javascript", icons::JAVASCRIPT),
            tag("Git", icons::GIT),
        ],
    },
    Project {
        id: "humble-coffee",
        title: "Humble Coffee",
        category: "E-Commerce",
        short_description: "A high-performance e-commerce application featuring dynamic pricing logic and real-time inventory.",
        full_description: "The Challenge:
Design and build a digital storefront for an artisanal coffee brand that reflects its in-store atmosphere while handling non-linear product pricing (1kg vs 250g bags) and mobile performance constraints.

The Solution:
A full-stack application using Next.js 14 and Supabase with a custom pricing algorithm for product variants, and a hero section that swaps heavy video backgrounds for optimized WebP images on mobile.

Key Features:
• Advanced Cart Logic: global state management with LocalStorage persistence.
• Dynamic Pricing Engine: backend logic that parses non-standard product variants.
• Adaptive Media: responsive media loading for mobile data usage.
• Real-Time Database: Supabase (PostgreSQL) for live inventory.",
        ai_analysis: "Analysis: This is a digital storefront designed to make buying premium coffee online feel as seamless as ordering in a cafe. The main challenge was handling complex pricing, like changing the cost automatically if a customer chooses a 1kg bag instead of a 250g bag. It's also optimized to load fast on mobile devices, preventing users from wasting mobile data while browsing.",
        image: "/assets/projects/humblecoffee.png",
        modal_image: Some("/assets/projects/humblecoffee-screen.webp"),
        link: Some("https://humblecoffee-shop.vercel.app/"),
        repo_link: Some("https://github.com/Lwazi-M/humble-coffee-redesign"),
        tech_stack: &[
            tag("Next.js", icons::NEXTJS),
            tag("TypeScript", icons::TYPESCRIPT),
            tag("Tailwind CSS", icons::TAILWIND),
            tag("Git", icons::GIT),
        ],
    },
    Project {
        id: "project-5",
        title: "Project",
        category: "In Development",
        short_description: "Coming Soon",
        full_description: IN_DEVELOPMENT_DESCRIPTION,
        ai_analysis: IN_DEVELOPMENT_ANALYSIS,
        image: PLACEHOLDER_IMAGE,
        modal_image: None,
        link: None,
        repo_link: None,
        tech_stack: &[],
    },
    Project {
        id: "project-6",
        title: "Project",
        category: "In Development",
        short_description: "Coming Soon",
        full_description: IN_DEVELOPMENT_DESCRIPTION,
        ai_analysis: IN_DEVELOPMENT_ANALYSIS,
        image: PLACEHOLDER_IMAGE,
        modal_image: None,
        link: None,
        repo_link: None,
        tech_stack: &[],
    },
];
