mod feedback;
mod resources;

pub use feedback::{FeedbackItem, FeedbackStatus};
pub use resources::{ResourceGroup, ResourceLink};

pub(crate) use feedback::{compose_feedback, overall_message};

use super::signals::{DominantExpression, TranscriptSignals, VisualSignals};
use serde::{Deserialize, Serialize};

/// Categories published in every report, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Grammar,
    Fluency,
    Politeness,
    #[serde(rename = "Body Language")]
    BodyLanguage,
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Grammar => "Grammar",
            ScoreCategory::Fluency => "Fluency",
            ScoreCategory::Politeness => "Politeness",
            ScoreCategory::BodyLanguage => "Body Language",
        }
    }
}

const GRAMMAR_ERROR_PENALTY: f64 = 5.0;
const FILLER_PENALTY_WEIGHT: f64 = 2.0;
const REPETITION_PENALTY: f64 = 3.0;
const POLITENESS_BASELINE: f64 = 70.0;
const POLITE_BOOST_STEP: f64 = 4.0;
const POLITE_BOOST_CAP: f64 = 20.0;
const IMPOLITE_PENALTY: f64 = 5.0;
const HAND_USAGE_SCALE: f64 = 1.5;

/// Component scores prior to integer rounding. `overall` keeps full
/// precision: the overall message classifies the unrounded average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub grammar: f64,
    pub fluency: f64,
    pub politeness: f64,
    pub body_language: Option<f64>,
    pub overall: f64,
}

/// Pure mapping from extracted signals to component scores. Each component
/// is clamped to [0, 100] before the average is taken.
pub fn compute_scores(text: &TranscriptSignals, visual: Option<&VisualSignals>) -> ScoreCard {
    let grammar = clamp_score(100.0 - GRAMMAR_ERROR_PENALTY * text.grammar_error_count as f64);

    // Guard the zero-word transcript: no words means no filler penalty.
    let filler_penalty = if text.total_words > 0 {
        (text.filler_word_count as f64 / text.total_words as f64 * 100.0) * FILLER_PENALTY_WEIGHT
    } else {
        0.0
    };
    let fluency = clamp_score(
        100.0 - filler_penalty - REPETITION_PENALTY * text.repeated_words.len() as f64,
    );

    let polite_boost = (POLITE_BOOST_STEP * text.polite_hit_count as f64).min(POLITE_BOOST_CAP);
    let politeness = clamp_score(
        POLITENESS_BASELINE + polite_boost - IMPOLITE_PENALTY * text.impolite_hit_count as f64,
    );

    let body_language = visual.map(|signals| {
        (signals.eye_contact_pct
            + scaled_hand_usage(signals)
            + expression_score(signals.dominant_expression))
            / 3.0
    });

    let overall = match body_language {
        Some(body) => (grammar + fluency + politeness + body) / 4.0,
        None => (grammar + fluency + politeness) / 3.0,
    };

    ScoreCard {
        grammar,
        fluency,
        politeness,
        body_language,
        overall,
    }
}

pub(crate) fn scaled_hand_usage(signals: &VisualSignals) -> f64 {
    (signals.hand_usage_pct * HAND_USAGE_SCALE).min(100.0)
}

pub(crate) const fn expression_score(expression: DominantExpression) -> f64 {
    match expression {
        DominantExpression::Engaging => 90.0,
        DominantExpression::Neutral => 70.0,
        DominantExpression::Serious | DominantExpression::Unknown => 50.0,
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub(crate) fn round_score(value: f64) -> i64 {
    value.round() as i64
}
