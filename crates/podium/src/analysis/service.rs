use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::collaborators::{
    GrammarChecker, GrammarError, MediaError, MediaExtractor, Transcriber, TranscriptionError,
    VisualAnalyzer,
};
use super::progress::ProgressSummary;
use super::report::{compose_report, AnalysisReport};
use super::repository::{
    AnalysisId, AnalysisRecord, AnalysisRepository, AnalysisStatus, RepositoryError,
};
use super::signals::{SignalError, VisualSignals};

/// Container formats accepted at the ingest boundary.
const SUPPORTED_VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];

/// A stored rehearsal video awaiting analysis. Upload and storage happen
/// upstream; the service only receives the resulting path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSubmission {
    pub filename: String,
    pub video_path: PathBuf,
}

/// Service composing the upstream collaborators, the scoring core, and the
/// repository. Every collaborator is an injected instance; nothing is read
/// from process-global state.
pub struct AnalysisService<M, T, G, V, R> {
    media: Arc<M>,
    transcriber: Arc<T>,
    grammar: Arc<G>,
    visual: Option<Arc<V>>,
    repository: Arc<R>,
}

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("analysis-{id:06}"))
}

impl<M, T, G, V, R> AnalysisService<M, T, G, V, R>
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    pub fn new(
        media: Arc<M>,
        transcriber: Arc<T>,
        grammar: Arc<G>,
        visual: Option<Arc<V>>,
        repository: Arc<R>,
    ) -> Self {
        Self {
            media,
            transcriber,
            grammar,
            visual,
            repository,
        }
    }

    /// Register a stored video for analysis, returning the pending record.
    pub fn submit(
        &self,
        submission: VideoSubmission,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        if !has_supported_extension(&submission.filename) {
            return Err(AnalysisServiceError::UnsupportedFormat {
                filename: submission.filename,
            });
        }

        let record = AnalysisRecord {
            analysis_id: next_analysis_id(),
            filename: submission.filename,
            video_path: submission.video_path,
            status: AnalysisStatus::Pending,
            transcript: None,
            report: None,
            submitted_at: Utc::now(),
            completed_at: None,
        };

        let stored = self.repository.insert(record)?;
        info!(analysis_id = %stored.analysis_id.0, filename = %stored.filename, "analysis submitted");
        Ok(stored)
    }

    /// Run the full pipeline for a pending or previously failed job. A
    /// completed job returns its stored report unchanged, so retries are
    /// idempotent; a job mid-flight refuses a second run.
    pub fn process(&self, analysis_id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let mut record = self
            .repository
            .fetch(analysis_id)?
            .ok_or(RepositoryError::NotFound)?;

        match record.status {
            AnalysisStatus::Completed => return Ok(record),
            AnalysisStatus::Processing => {
                return Err(AnalysisServiceError::AlreadyProcessing {
                    analysis_id: analysis_id.clone(),
                })
            }
            AnalysisStatus::Pending | AnalysisStatus::Failed => {}
        }

        record.status = AnalysisStatus::Processing;
        self.repository.update(record.clone())?;

        match self.run_pipeline(&record.video_path) {
            Ok((transcript, report)) => {
                record.transcript = Some(transcript);
                record.report = Some(report);
                record.status = AnalysisStatus::Completed;
                record.completed_at = Some(Utc::now());
                self.repository.update(record.clone())?;
                info!(analysis_id = %record.analysis_id.0, "analysis completed");
                Ok(record)
            }
            Err(err) => {
                record.status = AnalysisStatus::Failed;
                self.repository.update(record)?;
                Err(err)
            }
        }
    }

    /// Fetch a record for API responses.
    pub fn get(&self, analysis_id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(analysis_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// History listing, newest first.
    pub fn list(&self) -> Result<Vec<AnalysisRecord>, AnalysisServiceError> {
        Ok(self.repository.list()?)
    }

    /// Score trajectory across completed analyses.
    pub fn progress(&self) -> Result<ProgressSummary, AnalysisServiceError> {
        let completed = self.repository.completed_ordered()?;
        Ok(ProgressSummary::from_completed(&completed))
    }

    fn run_pipeline(
        &self,
        video: &Path,
    ) -> Result<(String, AnalysisReport), AnalysisServiceError> {
        let audio = self.media.extract_audio(video)?;
        let transcript = self.transcriber.transcribe(&audio)?;
        let issues = self.grammar.check(&transcript)?;
        let visual = self.visual_signals(video)?;
        let report = compose_report(&transcript, &issues, visual);
        Ok((transcript, report))
    }

    /// An unavailable or failing analyzer downgrades the run to a text-only
    /// report; an analyzer that ran but returned out-of-range metrics is a
    /// contract violation and fails the job.
    fn visual_signals(&self, video: &Path) -> Result<Option<VisualSignals>, AnalysisServiceError> {
        let Some(analyzer) = self.visual.as_ref() else {
            return Ok(None);
        };

        match analyzer.analyze(video) {
            Ok(raw) => Ok(Some(VisualSignals::from_raw(&raw)?)),
            Err(err) => {
                warn!(error = %err, "visual analysis unavailable for this run");
                Ok(None)
            }
        }
    }
}

fn has_supported_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_VIDEO_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error("unsupported video format: {filename} (expected mp4, avi, mov, or mkv)")]
    UnsupportedFormat { filename: String },
    #[error("analysis {} is already processing", .analysis_id.0)]
    AlreadyProcessing { analysis_id: AnalysisId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Signal(#[from] SignalError),
}
