use super::common::*;
use crate::analysis::progress::ProgressSummary;
use crate::analysis::signals::{DominantExpression, VisualSignals};
use crate::analysis::{assemble_report, TranscriptSignals};

fn report_with(grammar_errors: usize, visual: Option<VisualSignals>) -> crate::analysis::AnalysisReport {
    let text = TranscriptSignals {
        grammar_error_count: grammar_errors,
        ..signals()
    };
    assemble_report(&text, visual)
}

#[test]
fn fewer_than_two_analyses_reports_no_progress() {
    let summary = ProgressSummary::from_completed(&[]);
    assert!(!summary.has_progress);
    assert_eq!(
        summary.message,
        Some("Need at least 2 analyses to show progress")
    );
    assert!(summary.series.is_none());

    let one = completed_record("one", 5, report_with(0, None));
    let summary = ProgressSummary::from_completed(&[one]);
    assert!(!summary.has_progress);
}

#[test]
fn series_track_scores_oldest_first() {
    let older = completed_record("one", 5, report_with(4, None));
    let newer = completed_record("two", 12, report_with(0, None));

    let summary = ProgressSummary::from_completed(&[older, newer]);

    assert!(summary.has_progress);
    let series = summary.series.expect("series present");
    assert_eq!(series.total_analyses, 2);
    assert_eq!(series.grammar, vec![80, 100]);
    assert_eq!(series.improvement.grammar, 20.0);
    assert_eq!(series.improvement.fluency, 0.0);
    assert_eq!(series.dates, vec!["Jan 05", "Jan 12"]);
}

#[test]
fn body_language_series_skips_text_only_analyses() {
    let visual = VisualSignals {
        eye_contact_pct: 80.0,
        hand_usage_pct: 40.0,
        smile_pct: 45.0,
        dominant_expression: DominantExpression::Engaging,
    };

    let text_only = completed_record("one", 3, report_with(0, None));
    let with_video = completed_record("two", 9, report_with(0, Some(visual)));

    let summary = ProgressSummary::from_completed(&[text_only, with_video]);

    let series = summary.series.expect("series present");
    assert_eq!(series.grammar.len(), 2);
    // eye 80, hand 40 * 1.5 = 60, engaging 90 -> 76.67 rounds to 77
    assert_eq!(series.body_language, vec![77]);
}

#[test]
fn records_without_reports_are_ignored() {
    let mut unfinished = completed_record("one", 5, report_with(0, None));
    unfinished.report = None;
    let finished = completed_record("two", 8, report_with(0, None));

    let summary = ProgressSummary::from_completed(&[unfinished, finished]);

    assert!(!summary.has_progress);
}
