use super::resources::{self, ResourceGroup};
use super::{round_score, scaled_hand_usage, ScoreCard, ScoreCategory};
use crate::analysis::signals::{DominantExpression, TranscriptSignals, VisualSignals};
use serde::Serialize;

/// Tier assigned to each component score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

impl FeedbackStatus {
    pub const fn label(self) -> &'static str {
        match self {
            FeedbackStatus::Excellent => "excellent",
            FeedbackStatus::Good => "good",
            FeedbackStatus::NeedsImprovement => "needs_improvement",
        }
    }
}

/// Categorical feedback for one component score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackItem {
    pub category: ScoreCategory,
    pub score: i64,
    pub status: FeedbackStatus,
    pub summary: String,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

// Text categories classify on one ladder, body language on another; the
// offset between the two is intentional and must not be unified.
const TEXT_EXCELLENT_AT: f64 = 90.0;
const TEXT_GOOD_AT: f64 = 80.0;
const BODY_EXCELLENT_AT: f64 = 85.0;
const BODY_GOOD_AT: f64 = 70.0;

// Body-language sub-metric cutoffs. Issues and suggestions trigger at
// different points so a borderline metric still earns advice.
const EYE_CONTACT_ISSUE_BELOW: f64 = 60.0;
const EYE_CONTACT_SUGGESTION_BELOW: f64 = 70.0;
const HAND_USAGE_ISSUE_BELOW: f64 = 40.0;
const HAND_USAGE_SUGGESTION_BELOW: f64 = 50.0;
const SMILE_ISSUE_BELOW: f64 = 10.0;

// Resources and the critical summary attach below this body-language score.
const BODY_RESOURCE_BELOW: f64 = 80.0;

const OVERALL_OUTSTANDING_AT: f64 = 85.0;
const OVERALL_GOOD_AT: f64 = 70.0;

fn text_tier(score: f64) -> FeedbackStatus {
    if score >= TEXT_EXCELLENT_AT {
        FeedbackStatus::Excellent
    } else if score >= TEXT_GOOD_AT {
        FeedbackStatus::Good
    } else {
        FeedbackStatus::NeedsImprovement
    }
}

fn body_tier(score: f64) -> FeedbackStatus {
    if score >= BODY_EXCELLENT_AT {
        FeedbackStatus::Excellent
    } else if score >= BODY_GOOD_AT {
        FeedbackStatus::Good
    } else {
        FeedbackStatus::NeedsImprovement
    }
}

/// Build the feedback items and their resource groups in the fixed category
/// order: Grammar, Fluency, Politeness, then Body Language when present.
pub(crate) fn compose_feedback(
    card: &ScoreCard,
    text: &TranscriptSignals,
    visual: Option<&VisualSignals>,
) -> (Vec<FeedbackItem>, Vec<ResourceGroup>) {
    let mut feedback = Vec::new();
    let mut resource_groups = Vec::new();

    let (item, resources) = grammar_feedback(card.grammar, text);
    feedback.push(item);
    resource_groups.extend(resources);

    let (item, resources) = fluency_feedback(card.fluency, text);
    feedback.push(item);
    resource_groups.extend(resources);

    let (item, resources) = politeness_feedback(card.politeness, text);
    feedback.push(item);
    resource_groups.extend(resources);

    if let (Some(body_score), Some(signals)) = (card.body_language, visual) {
        let (item, resources) = body_language_feedback(body_score, signals);
        feedback.push(item);
        resource_groups.extend(resources);
    }

    (feedback, resource_groups)
}

/// Message for the report header, classified on the PRE-rounded average.
pub(crate) fn overall_message(average: f64) -> &'static str {
    if average >= OVERALL_OUTSTANDING_AT {
        "Outstanding presentation! You demonstrate strong communication skills."
    } else if average >= OVERALL_GOOD_AT {
        "Good presentation with some areas for improvement."
    } else {
        "Your presentation needs work. Focus on the suggestions below."
    }
}

fn grammar_feedback(
    score: f64,
    text: &TranscriptSignals,
) -> (FeedbackItem, Option<ResourceGroup>) {
    let status = text_tier(score);
    let (summary, issues, suggestions, resources) = match status {
        FeedbackStatus::Excellent => (
            "Your grammar is excellent! Very few errors detected.".to_string(),
            Vec::new(),
            vec!["Maintain this level of grammatical accuracy".to_string()],
            None,
        ),
        FeedbackStatus::Good => (
            "Good grammar overall with minor improvements needed.".to_string(),
            text.grammar_issue_details
                .first()
                .map(|issue| vec![format!("\u{2022} {}", issue.message)])
                .unwrap_or_default(),
            vec!["Review and polish your sentence structure".to_string()],
            None,
        ),
        FeedbackStatus::NeedsImprovement => {
            let mut issues: Vec<String> = text
                .grammar_issue_details
                .iter()
                .take(3)
                .map(|issue| format!("\u{2022} {}", issue.message))
                .collect();
            if issues.is_empty() {
                issues.push("\u{2022} Review sentence structure and verb tenses".to_string());
            }
            (
                format!(
                    "Found {} grammatical errors in your presentation.",
                    text.grammar_error_count
                ),
                issues,
                vec![
                    "Proofread your script before presenting".to_string(),
                    "Use grammar checking tools like Grammarly".to_string(),
                    "Practice speaking in complete sentences".to_string(),
                    "Record yourself and review for errors".to_string(),
                ],
                Some(resources::curated(ScoreCategory::Grammar)),
            )
        }
    };

    (
        FeedbackItem {
            category: ScoreCategory::Grammar,
            score: round_score(score),
            status,
            summary,
            issues,
            suggestions,
        },
        resources,
    )
}

fn fluency_feedback(
    score: f64,
    text: &TranscriptSignals,
) -> (FeedbackItem, Option<ResourceGroup>) {
    let status = text_tier(score);
    let (summary, issues, suggestions, resources) = match status {
        FeedbackStatus::Excellent => (
            "Excellent fluency! Your speech flows naturally and confidently.".to_string(),
            Vec::new(),
            vec!["Keep up the great work!".to_string()],
            None,
        ),
        FeedbackStatus::Good => (
            "Good fluency with room for minor improvements.".to_string(),
            if text.filler_word_count > 0 {
                vec![format!(
                    "\u{2022} Minimize filler words ({} detected)",
                    text.filler_word_count
                )]
            } else {
                Vec::new()
            },
            vec!["Practice to reduce hesitations".to_string()],
            None,
        ),
        FeedbackStatus::NeedsImprovement => {
            let mut issues = Vec::new();
            if text.filler_word_count > 0 {
                issues.push(format!(
                    "\u{2022} Used {} filler words (um, uh, like, etc.)",
                    text.filler_word_count
                ));
            }
            if !text.repeated_words.is_empty() {
                let named: Vec<&str> = text
                    .repeated_words
                    .iter()
                    .take(3)
                    .map(String::as_str)
                    .collect();
                issues.push(format!("\u{2022} Repeated words: {}", named.join(", ")));
            }
            (
                "Your speech flow needs improvement to sound more natural and confident."
                    .to_string(),
                issues,
                vec![
                    "Practice pausing instead of using filler words".to_string(),
                    "Slow down your speaking pace".to_string(),
                    "Prepare and rehearse key points".to_string(),
                    "Use breathing techniques to maintain flow".to_string(),
                    "Expand your vocabulary to avoid repetition".to_string(),
                ],
                Some(resources::curated(ScoreCategory::Fluency)),
            )
        }
    };

    (
        FeedbackItem {
            category: ScoreCategory::Fluency,
            score: round_score(score),
            status,
            summary,
            issues,
            suggestions,
        },
        resources,
    )
}

fn politeness_feedback(
    score: f64,
    text: &TranscriptSignals,
) -> (FeedbackItem, Option<ResourceGroup>) {
    let status = text_tier(score);
    let (summary, issues, suggestions, resources) = match status {
        FeedbackStatus::Excellent => (
            "Excellent professional tone and courteous language!".to_string(),
            Vec::new(),
            vec!["Your communication style is very professional".to_string()],
            None,
        ),
        FeedbackStatus::Good => (
            "Good professional tone with minor enhancements possible.".to_string(),
            Vec::new(),
            vec!["Consider adding more courteous expressions".to_string()],
            None,
        ),
        FeedbackStatus::NeedsImprovement => (
            "Your tone could be more courteous and professional.".to_string(),
            vec![
                format!(
                    "\u{2022} Limited use of polite expressions ({} detected)",
                    text.polite_hit_count
                ),
                format!(
                    "\u{2022} Used {} direct/commanding phrases",
                    text.impolite_hit_count
                ),
            ],
            vec![
                "Use 'please', 'thank you', 'I appreciate' more often".to_string(),
                "Replace 'must' with 'could you please'".to_string(),
                "Use 'would you' instead of 'you should'".to_string(),
                "Frame requests as questions, not commands".to_string(),
                "Show gratitude to your audience".to_string(),
            ],
            Some(resources::curated(ScoreCategory::Politeness)),
        ),
    };

    (
        FeedbackItem {
            category: ScoreCategory::Politeness,
            score: round_score(score),
            status,
            summary,
            issues,
            suggestions,
        },
        resources,
    )
}

fn body_language_feedback(
    score: f64,
    signals: &VisualSignals,
) -> (FeedbackItem, Option<ResourceGroup>) {
    let eye_contact = signals.eye_contact_pct;
    let hand_usage = scaled_hand_usage(signals);

    let mut issues = Vec::new();
    if eye_contact < EYE_CONTACT_ISSUE_BELOW {
        issues.push(format!(
            "\u{2022} Eye contact: {eye_contact:.0}% - Look at the camera more often"
        ));
    }
    if hand_usage < HAND_USAGE_ISSUE_BELOW {
        issues.push(
            "\u{2022} Hand gestures: Limited usage - Use hands to emphasize points".to_string(),
        );
    }
    if signals.smile_pct < SMILE_ISSUE_BELOW {
        issues.push(
            "\u{2022} Facial expression: Too serious - Smile more to appear approachable"
                .to_string(),
        );
    }

    // Suggestions accumulate per failing sub-metric.
    let mut suggestions = Vec::new();
    if eye_contact < EYE_CONTACT_SUGGESTION_BELOW {
        suggestions.extend([
            "Practice looking directly at the camera lens".to_string(),
            "Imagine you're talking to a friend through the camera".to_string(),
            "Avoid reading from notes constantly".to_string(),
        ]);
    }
    if hand_usage < HAND_USAGE_SUGGESTION_BELOW {
        suggestions.extend([
            "Use hand gestures to emphasize key points".to_string(),
            "Keep hands visible and avoid crossing arms".to_string(),
            "Practice natural gestures that match your words".to_string(),
        ]);
    }
    if signals.dominant_expression != DominantExpression::Engaging {
        suggestions.extend([
            "Smile naturally when appropriate".to_string(),
            "Show enthusiasm through facial expressions".to_string(),
            "Relax your face to appear more approachable".to_string(),
        ]);
    }

    let status = body_tier(score);
    let item = if score < BODY_RESOURCE_BELOW {
        FeedbackItem {
            category: ScoreCategory::BodyLanguage,
            score: round_score(score),
            status,
            summary: "Your non-verbal communication impacts how your message is received."
                .to_string(),
            issues,
            suggestions: if suggestions.is_empty() {
                vec!["Maintain good body language".to_string()]
            } else {
                suggestions
            },
        }
    } else {
        FeedbackItem {
            category: ScoreCategory::BodyLanguage,
            score: round_score(score),
            status,
            summary: "Great non-verbal communication! Your body language supports your message."
                .to_string(),
            issues: Vec::new(),
            suggestions: vec!["Keep up the excellent body language".to_string()],
        }
    };

    let resources = (score < BODY_RESOURCE_BELOW)
        .then(|| resources::curated(ScoreCategory::BodyLanguage));

    (item, resources)
}
