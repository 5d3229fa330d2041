// Static site content
// The data behind the pages. Everything here is plain configuration;
// editing it never touches component behavior.

/// External profile link
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink { label: "GitHub", href: "https://github.com/kirahou" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com/in/kirahou" },
    SocialLink { label: "Bilibili", href: "https://space.bilibili.com/kirahou" },
    SocialLink { label: "RED(小红书)", href: "https://xiaohongshu.com/user/kirahou" },
    SocialLink { label: "Résumé", href: "/resume.pdf" },
];

/// Artifact links attached to a project
#[derive(Debug, Clone, Copy)]
pub struct ProjectLinks {
    pub code: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub poster: Option<&'static str>,
}

/// A project card on the Build page
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub teaser: &'static str,
    pub result: &'static str,
    pub stack: &'static [&'static str],
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub links: ProjectLinks,
}

/// Category filter values, in trigger order ("All" passes everything)
pub const PROJECT_CATEGORIES: [&str; 4] = ["All", "Web", "Data/ML", "Systems"];

pub const PROJECTS: [Project; 3] = [
    Project {
        id: "proj-ml-1",
        title: "Term Deposit Prediction",
        teaser: "Compared LR/Tree/RF on UCI bank data; outcome-first ML demo.",
        result: "RF F1 0.63 (up 16% vs baseline)",
        stack: &["Python", "scikit-learn", "pandas"],
        category: "Data/ML",
        tags: &["ml", "python", "classification"],
        links: ProjectLinks {
            code: Some("#"),
            demo: Some("#"),
            poster: Some("#"),
        },
    },
    Project {
        id: "proj-web-1",
        title: "Heeseung Meme Generator",
        teaser: "Lightweight web tool for captioned memes.",
        result: "2k+ sessions, ~3:12 avg dwell",
        stack: &["HTML", "CSS", "JavaScript"],
        category: "Web",
        tags: &["web", "javascript"],
        links: ProjectLinks {
            code: Some("#"),
            demo: Some("#"),
            poster: None,
        },
    },
    Project {
        id: "proj-sys-1",
        title: "C/Java Coursework Highlights",
        teaser: "Systems fundamentals and data structures.",
        result: "Passed rigorous perf + correctness tests",
        stack: &["C", "Java"],
        category: "Systems",
        tags: &["c", "java", "systems"],
        links: ProjectLinks {
            code: Some("#"),
            demo: None,
            poster: None,
        },
    },
];

/// A research entry on the Research page
#[derive(Debug, Clone, Copy)]
pub struct ResearchEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub advisor: &'static str,
    pub question: &'static str,
    pub method: &'static str,
    pub contribution: &'static str,
    pub finding: &'static str,
    pub artifact_label: &'static str,
    pub artifact_href: &'static str,
}

pub const RESEARCH_DATA: [ResearchEntry; 1] = [ResearchEntry {
    id: "rs-1",
    title: "Funding Networks in Chiapas/Oaxaca",
    advisor: "Advisor Name",
    question: "How did NGO networks evolve across regions?",
    method: "OCR, tidyverse tagging, geospatial viz",
    contribution: "Built pipeline, maps, and codebook",
    finding: "Revealed collaboration clusters and flows",
    artifact_label: "Poster",
    artifact_href: "#",
}];

pub const RESEARCH_FILM: [ResearchEntry; 1] = [ResearchEntry {
    id: "rs-2",
    title: "Microfilm Festival Audience Reception",
    advisor: "Advisor Name",
    question: "What themes drive audience ratings?",
    method: "Qual content analysis + basic stats",
    contribution: "Survey design, coding, analysis",
    finding: "Narrative clarity & pacing correlate with scores",
    artifact_label: "PDF",
    artifact_href: "#",
}];

/// A performance credit on the Perform page
#[derive(Debug, Clone, Copy)]
pub struct Credit {
    pub id: &'static str,
    pub role: &'static str,
    pub production: &'static str,
    pub dates: &'static str,
    pub note: &'static str,
}

pub const CREDITS: [Credit; 2] = [
    Credit {
        id: "cr-1",
        role: "Lead",
        production: "Spring Musical",
        dates: "Mar-Apr 2025",
        note: "Focus: acting beats & vocal dynamics",
    },
    Credit {
        id: "cr-2",
        role: "Ensemble",
        production: "Fall Production",
        dates: "Oct 2024",
        note: "Dance-heavy, ensemble harmonies",
    },
];

/// Festival organizing summary
#[derive(Debug, Clone, Copy)]
pub struct Festival {
    pub submissions: u32,
    pub attendees: u32,
    pub sponsors: u32,
    pub highlights: &'static str,
    pub video: &'static str,
}

pub const FESTIVAL: Festival = Festival {
    submissions: 45,
    attendees: 300,
    sponsors: 6,
    highlights: "Built judging rubric, marketing plan, run-of-show",
    video: "#",
};

/// Performance reel
#[derive(Debug, Clone, Copy)]
pub struct Reel {
    pub href: &'static str,
    pub length: &'static str,
}

pub const REEL: Reel = Reel {
    href: "#",
    length: "90s",
};

/// A gallery card
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub href: &'static str,
}

/// The curated set: nine portfolio shots
pub fn gallery_portfolio() -> Vec<GalleryItem> {
    (1..=9)
        .map(|i| GalleryItem {
            id: format!("p-{i}"),
            title: format!("Portfolio {i}"),
            caption: "Cusco, Peru · Backlight silhouettes".to_string(),
            href: "#",
        })
        .collect()
}

/// The outtakes: six b-sides with the lesson attached
pub fn gallery_bsides() -> Vec<GalleryItem> {
    (1..=6)
        .map(|i| GalleryItem {
            id: format!("b-{i}"),
            title: format!("B-Side {i}"),
            caption: "Lesson learned: Missed focus; learn to pre-focus.".to_string(),
            href: "#",
        })
        .collect()
}
