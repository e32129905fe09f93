use super::ScoreCategory;
use serde::Serialize;

/// One curated learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub title: &'static str,
    pub url: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Curated resources for one category, attached to a report only when that
/// category lands in its low tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceGroup {
    pub category: ScoreCategory,
    pub items: Vec<ResourceLink>,
}

pub(crate) fn curated(category: ScoreCategory) -> ResourceGroup {
    let items = match category {
        ScoreCategory::Grammar => vec![
            ResourceLink {
                title: "English Grammar Basics",
                url: "https://www.youtube.com/results?search_query=english+grammar+for+presentations",
                kind: "YouTube",
            },
            ResourceLink {
                title: "Common Grammar Mistakes",
                url: "https://www.grammarly.com/blog/common-grammar-mistakes/",
                kind: "Blog",
            },
            ResourceLink {
                title: "Business English Grammar",
                url: "https://www.coursera.org/courses?query=business%20english",
                kind: "Course",
            },
        ],
        ScoreCategory::Fluency => vec![
            ResourceLink {
                title: "How to Stop Saying Um and Uh",
                url: "https://www.youtube.com/results?search_query=how+to+stop+saying+um+and+uh",
                kind: "YouTube",
            },
            ResourceLink {
                title: "Public Speaking Fluency Tips",
                url: "https://www.toastmasters.org/resources/public-speaking-tips",
                kind: "Blog",
            },
            ResourceLink {
                title: "Presentation Skills Course",
                url: "https://www.coursera.org/courses?query=presentation%20skills",
                kind: "Course",
            },
        ],
        ScoreCategory::Politeness => vec![
            ResourceLink {
                title: "Professional Communication Skills",
                url: "https://www.youtube.com/results?search_query=professional+communication+skills",
                kind: "YouTube",
            },
            ResourceLink {
                title: "Business Etiquette Guide",
                url: "https://www.indeed.com/career-advice/career-development/business-etiquette",
                kind: "Blog",
            },
            ResourceLink {
                title: "Effective Communication Course",
                url: "https://www.linkedin.com/learning/topics/communication",
                kind: "Course",
            },
        ],
        ScoreCategory::BodyLanguage => vec![
            ResourceLink {
                title: "Body Language for Presentations",
                url: "https://www.youtube.com/results?search_query=body+language+for+presentations",
                kind: "YouTube",
            },
            ResourceLink {
                title: "Eye Contact Tips",
                url: "https://www.youtube.com/results?search_query=eye+contact+presentation+tips",
                kind: "YouTube",
            },
            ResourceLink {
                title: "Hand Gestures Guide",
                url: "https://www.scienceofpeople.com/hand-gestures/",
                kind: "Blog",
            },
        ],
    };

    ResourceGroup { category, items }
}
