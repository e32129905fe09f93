use super::report::AnalysisReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifier wrapper for submitted analyses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

/// Lifecycle of one submitted rehearsal video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "pending",
            AnalysisStatus::Processing => "processing",
            AnalysisStatus::Completed => "completed",
            AnalysisStatus::Failed => "failed",
        }
    }
}

/// Repository record for one analysis job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    pub filename: String,
    pub video_path: PathBuf,
    pub status: AnalysisStatus,
    pub transcript: Option<String>,
    pub report: Option<AnalysisReport>,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl AnalysisRecord {
    pub fn status_view(&self) -> AnalysisStatusView {
        AnalysisStatusView {
            analysis_id: self.analysis_id.clone(),
            filename: self.filename.clone(),
            status: self.status.label(),
            overall_score: self.report.as_ref().map(|report| report.overall_score),
        }
    }

    /// Row for the history listing, scores present once the job completed.
    pub fn summary_view(&self) -> AnalysisSummaryView {
        let report = self.report.as_ref();
        AnalysisSummaryView {
            analysis_id: self.analysis_id.clone(),
            filename: self.filename.clone(),
            status: self.status.label(),
            grammar_score: report.map(|r| r.grammar_score),
            fluency_score: report.map(|r| r.fluency_score),
            politeness_score: report.map(|r| r.politeness_score),
            body_language_score: report.and_then(|r| r.body_language_score),
            overall_score: report.map(|r| r.overall_score),
            submitted_at: self.submitted_at,
        }
    }

    /// Full detail for API responses; omits the server-side video path.
    pub fn detail_view(&self) -> AnalysisDetailView {
        AnalysisDetailView {
            analysis_id: self.analysis_id.clone(),
            filename: self.filename.clone(),
            status: self.status.label(),
            transcript: self.transcript.clone(),
            report: self.report.clone(),
            submitted_at: self.submitted_at,
            completed_at: self.completed_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AnalysisRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError>;
    /// Newest submissions first, for dashboard listings.
    fn list(&self) -> Result<Vec<AnalysisRecord>, RepositoryError>;
    /// Completed analyses oldest first, for progress tracking.
    fn completed_ordered(&self) -> Result<Vec<AnalysisRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a job's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisStatusView {
    pub analysis_id: AnalysisId,
    pub filename: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<i64>,
}

/// One row of the analysis history.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummaryView {
    pub analysis_id: AnalysisId,
    pub filename: String,
    pub status: &'static str,
    pub grammar_score: Option<i64>,
    pub fluency_score: Option<i64>,
    pub politeness_score: Option<i64>,
    pub body_language_score: Option<i64>,
    pub overall_score: Option<i64>,
    pub submitted_at: DateTime<Utc>,
}

/// Full record view returned by the detail and process endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDetailView {
    pub analysis_id: AnalysisId,
    pub filename: String,
    pub status: &'static str,
    pub transcript: Option<String>,
    pub report: Option<AnalysisReport>,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
