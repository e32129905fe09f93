use super::repository::AnalysisRecord;
use serde::Serialize;

const MIN_COMPLETED_FOR_PROGRESS: usize = 2;

/// Score history across a user's completed analyses.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub has_progress: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<ProgressSeries>,
}

/// Per-category score series, oldest analysis first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSeries {
    pub total_analyses: usize,
    pub grammar: Vec<i64>,
    pub fluency: Vec<i64>,
    pub politeness: Vec<i64>,
    /// Only analyses that produced a body-language score contribute here, so
    /// this series may be shorter than the others.
    pub body_language: Vec<i64>,
    pub overall: Vec<i64>,
    /// Submission dates formatted `%b %d`, aligned with the score series.
    pub dates: Vec<String>,
    pub improvement: ImprovementDeltas,
}

/// Deltas between the first and latest completed analysis, rounded to one
/// decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementDeltas {
    pub grammar: f64,
    pub fluency: f64,
    pub politeness: f64,
    pub overall: f64,
}

impl ProgressSummary {
    /// Build from completed records ordered oldest first. Records without a
    /// stored report are skipped.
    pub fn from_completed(records: &[AnalysisRecord]) -> Self {
        let scored: Vec<_> = records
            .iter()
            .filter_map(|record| record.report.as_ref().map(|report| (record, report)))
            .collect();

        if scored.len() < MIN_COMPLETED_FOR_PROGRESS {
            return Self {
                has_progress: false,
                message: Some("Need at least 2 analyses to show progress"),
                series: None,
            };
        }

        let grammar: Vec<i64> = scored.iter().map(|(_, r)| r.grammar_score).collect();
        let fluency: Vec<i64> = scored.iter().map(|(_, r)| r.fluency_score).collect();
        let politeness: Vec<i64> = scored.iter().map(|(_, r)| r.politeness_score).collect();
        let body_language: Vec<i64> = scored
            .iter()
            .filter_map(|(_, r)| r.body_language_score)
            .collect();
        let overall: Vec<i64> = scored.iter().map(|(_, r)| r.overall_score).collect();
        let dates: Vec<String> = scored
            .iter()
            .map(|(record, _)| record.submitted_at.format("%b %d").to_string())
            .collect();

        let improvement = ImprovementDeltas {
            grammar: delta(&grammar),
            fluency: delta(&fluency),
            politeness: delta(&politeness),
            overall: delta(&overall),
        };

        Self {
            has_progress: true,
            message: None,
            series: Some(ProgressSeries {
                total_analyses: scored.len(),
                grammar,
                fluency,
                politeness,
                body_language,
                overall,
                dates,
                improvement,
            }),
        }
    }
}

fn delta(series: &[i64]) -> f64 {
    let first = series.first().copied().unwrap_or(0);
    let last = series.last().copied().unwrap_or(0);
    ((last - first) as f64 * 10.0).round() / 10.0
}
