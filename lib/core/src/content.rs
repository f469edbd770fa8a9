//! Static site content. The landing page is compiled in: articles, portfolio
//! pieces and project highlights are read-only data injected into the
//! reactive context at startup, not fetched from a backend. Only the article
//! ids matter to the comments feature.

/// A static content item; `article_id` is its key for the comments endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub article_id: i64,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub tags: &'static [&'static str],
    pub comment_count: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub item_id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub emblem: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectHighlight {
    pub name: &'static str,
    pub summary: &'static str,
    pub stack: &'static str,
}

const ARTICLES: [Article; 3] = [
    Article {
        article_id: 1,
        title: "Minimalism in design: less is more",
        excerpt: "A look at the principles behind a minimalist approach to interfaces and web design.",
        date: "October 15, 2024",
        tags: &["design", "UX/UI", "minimalism"],
        comment_count: 12,
    },
    Article {
        article_id: 2,
        title: "Typography and readability",
        excerpt: "How the choice of typefaces shapes the perception of content and keeps readers engaged.",
        date: "October 8, 2024",
        tags: &["typography", "web design"],
        comment_count: 8,
    },
    Article {
        article_id: 3,
        title: "Space as a design tool",
        excerpt: "Why negative space is not emptiness but a load-bearing element of composition.",
        date: "October 1, 2024",
        tags: &["design", "composition"],
        comment_count: 15,
    },
];

const PORTFOLIO: [PortfolioItem; 3] = [
    PortfolioItem {
        item_id: 1,
        title: "Corporate site redesign",
        description: "A modern take on B2B communication",
        emblem: "🎨",
    },
    PortfolioItem {
        item_id: 2,
        title: "Mobile fitness app",
        description: "UX research and prototyping",
        emblem: "📱",
    },
    PortfolioItem {
        item_id: 3,
        title: "Design system for a startup",
        description: "Building a shared product language",
        emblem: "🎯",
    },
];

const PROJECTS: [ProjectHighlight; 3] = [
    ProjectHighlight {
        name: "Design System Kit",
        summary: "A component library for rapid prototyping",
        stack: "Rust, Leptos",
    },
    ProjectHighlight {
        name: "Minimal Portfolio",
        summary: "An open-source template for a personal site",
        stack: "Leptos, Tailwind",
    },
    ProjectHighlight {
        name: "Typography Tools",
        summary: "A toolbox for working with typefaces",
        stack: "Rust, WASM",
    },
];

/// Read-only content bundle provided through context at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub articles: &'static [Article],
    pub portfolio: &'static [PortfolioItem],
    pub projects: &'static [ProjectHighlight],
}

impl SiteContent {
    pub fn builtin() -> SiteContent {
        SiteContent {
            articles: &ARTICLES,
            portfolio: &PORTFOLIO,
            projects: &PROJECTS,
        }
    }
}
