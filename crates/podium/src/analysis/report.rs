use super::scoring::{
    self, compose_feedback, overall_message, FeedbackItem, ResourceGroup, ScoreCard,
};
use super::signals::{extract_transcript_signals, GrammarIssue, TranscriptSignals, VisualSignals};
use serde::Serialize;

/// Transcript-level counters surfaced alongside the scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptStats {
    pub total_words: usize,
    pub total_sentences: usize,
    pub grammar_errors: usize,
    pub filler_words: usize,
    pub polite_expressions: usize,
}

/// The complete scored report for one rehearsal. `body_language_score` and
/// `video_stats` serialize as null when no visual analysis ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub grammar_score: i64,
    pub fluency_score: i64,
    pub politeness_score: i64,
    pub body_language_score: Option<i64>,
    pub overall_score: i64,
    pub overall_message: &'static str,
    pub detailed_feedback: Vec<FeedbackItem>,
    pub resources: Vec<ResourceGroup>,
    pub stats: TranscriptStats,
    pub video_stats: Option<VisualSignals>,
}

/// Score a transcript plus optional visual signals end to end. Pure: the
/// same inputs always produce the same report.
pub fn compose_report(
    transcript: &str,
    grammar_issues: &[GrammarIssue],
    visual: Option<VisualSignals>,
) -> AnalysisReport {
    let text = extract_transcript_signals(transcript, grammar_issues);
    assemble_report(&text, visual)
}

/// Assemble the final payload from pre-extracted signals. A structural merge:
/// every scoring decision happens in the scoring module.
pub fn assemble_report(text: &TranscriptSignals, visual: Option<VisualSignals>) -> AnalysisReport {
    let card: ScoreCard = scoring::compute_scores(text, visual.as_ref());
    let (detailed_feedback, resources) = compose_feedback(&card, text, visual.as_ref());

    AnalysisReport {
        grammar_score: scoring::round_score(card.grammar),
        fluency_score: scoring::round_score(card.fluency),
        politeness_score: scoring::round_score(card.politeness),
        body_language_score: card.body_language.map(scoring::round_score),
        overall_score: scoring::round_score(card.overall),
        overall_message: overall_message(card.overall),
        detailed_feedback,
        resources,
        stats: TranscriptStats {
            total_words: text.total_words,
            total_sentences: text.total_sentences,
            grammar_errors: text.grammar_error_count,
            filler_words: text.filler_word_count,
            polite_expressions: text.polite_hit_count,
        },
        video_stats: visual,
    }
}
