use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::analysis::collaborators::{
    GrammarChecker, GrammarError, MediaError, MediaExtractor, Transcriber, TranscriptionError,
    VisualAnalysisError, VisualAnalyzer,
};
use crate::analysis::repository::{
    AnalysisId, AnalysisRecord, AnalysisRepository, AnalysisStatus, RepositoryError,
};
use crate::analysis::signals::{GrammarIssue, RawVisualAnalysis, TranscriptSignals};
use crate::analysis::{analysis_router, AnalysisReport, AnalysisService, VideoSubmission};

/// Ten words, exactly one filler occurrence, no lexicon hits otherwise.
pub(super) const BOUNDARY_TRANSCRIPT: &str =
    "Um today we finish the build and review it together.";

/// Clean transcript: no fillers, no repetitions, no politeness lexicon hits.
pub(super) const CLEAN_TRANSCRIPT: &str = "We built the demo today. It works well.";

pub(super) fn grammar_issues(count: usize) -> Vec<GrammarIssue> {
    (1..=count)
        .map(|index| GrammarIssue {
            message: format!("Grammar finding {index}"),
            context: format!("...context {index}..."),
        })
        .collect()
}

pub(super) fn visual_raw(
    eye_contact_pct: f64,
    hand_usage_pct: f64,
    smile_pct: f64,
    dominant_expression: &str,
) -> RawVisualAnalysis {
    RawVisualAnalysis {
        face_presence_pct: 92.5,
        eye_contact_pct,
        hand_usage_pct,
        hand_movement_count: 14,
        smile_pct,
        dominant_expression: dominant_expression.to_string(),
        frames_sampled: 30,
    }
}

/// Baseline signals for hand-built scoring scenarios.
pub(super) fn signals() -> TranscriptSignals {
    TranscriptSignals {
        total_words: 120,
        total_sentences: 8,
        grammar_error_count: 0,
        grammar_issue_details: Vec::new(),
        filler_word_count: 0,
        repeated_words: Vec::new(),
        polite_hit_count: 0,
        impolite_hit_count: 0,
    }
}

pub(super) fn submission(filename: &str) -> VideoSubmission {
    VideoSubmission {
        filename: filename.to_string(),
        video_path: PathBuf::from(format!("/var/podium/uploads/{filename}")),
    }
}

pub(super) fn submitted_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn completed_record(
    id: &str,
    day: u32,
    report: AnalysisReport,
) -> AnalysisRecord {
    AnalysisRecord {
        analysis_id: AnalysisId(format!("analysis-{id}")),
        filename: format!("rehearsal-{id}.mp4"),
        video_path: PathBuf::from(format!("/var/podium/uploads/rehearsal-{id}.mp4")),
        status: AnalysisStatus::Completed,
        transcript: Some(CLEAN_TRANSCRIPT.to_string()),
        report: Some(report),
        submitted_at: submitted_at(day),
        completed_at: Some(submitted_at(day)),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<AnalysisRecord>>>,
}

impl AnalysisRepository for MemoryRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.analysis_id == record.analysis_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard
            .iter_mut()
            .find(|existing| existing.analysis_id == record.analysis_id)
        {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| record.analysis_id == *id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }

    fn completed_ordered(&self) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.status == AnalysisStatus::Completed)
            .cloned()
            .collect())
    }
}

pub(super) struct StubMediaExtractor;

impl MediaExtractor for StubMediaExtractor {
    fn extract_audio(&self, video: &Path) -> Result<PathBuf, MediaError> {
        Ok(video.with_extension("wav"))
    }
}

pub(super) struct FailingMediaExtractor;

impl MediaExtractor for FailingMediaExtractor {
    fn extract_audio(&self, video: &Path) -> Result<PathBuf, MediaError> {
        Err(MediaError::NotFound(video.to_path_buf()))
    }
}

pub(super) struct StubTranscriber {
    pub(super) transcript: String,
}

impl StubTranscriber {
    pub(super) fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
        }
    }
}

impl Transcriber for StubTranscriber {
    fn transcribe(&self, _audio: &Path) -> Result<String, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}

pub(super) struct FailingTranscriber;

impl Transcriber for FailingTranscriber {
    fn transcribe(&self, _audio: &Path) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::Unavailable(
            "speech backend offline".to_string(),
        ))
    }
}

#[derive(Default)]
pub(super) struct StubGrammarChecker {
    pub(super) issues: Vec<GrammarIssue>,
}

impl GrammarChecker for StubGrammarChecker {
    fn check(&self, _transcript: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        Ok(self.issues.clone())
    }
}

pub(super) struct StubVisualAnalyzer {
    pub(super) analysis: RawVisualAnalysis,
}

impl VisualAnalyzer for StubVisualAnalyzer {
    fn analyze(&self, _video: &Path) -> Result<RawVisualAnalysis, VisualAnalysisError> {
        Ok(self.analysis.clone())
    }
}

pub(super) struct FailingVisualAnalyzer;

impl VisualAnalyzer for FailingVisualAnalyzer {
    fn analyze(&self, _video: &Path) -> Result<RawVisualAnalysis, VisualAnalysisError> {
        Err(VisualAnalysisError::Failed(
            "camera stream unreadable".to_string(),
        ))
    }
}

pub(super) type StubService = AnalysisService<
    StubMediaExtractor,
    StubTranscriber,
    StubGrammarChecker,
    StubVisualAnalyzer,
    MemoryRepository,
>;

/// Service over stub collaborators: clean transcript, no grammar findings,
/// engaging visual metrics.
pub(super) fn build_service() -> (Arc<StubService>, Arc<MemoryRepository>) {
    build_service_with(CLEAN_TRANSCRIPT, Vec::new(), Some(visual_raw(80.0, 40.0, 45.0, "engaging")))
}

pub(super) fn build_service_with(
    transcript: &str,
    issues: Vec<GrammarIssue>,
    visual: Option<RawVisualAnalysis>,
) -> (Arc<StubService>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(AnalysisService::new(
        Arc::new(StubMediaExtractor),
        Arc::new(StubTranscriber::new(transcript)),
        Arc::new(StubGrammarChecker { issues }),
        visual.map(|analysis| Arc::new(StubVisualAnalyzer { analysis })),
        repository.clone(),
    ));
    (service, repository)
}

pub(super) fn router_with(service: Arc<StubService>) -> axum::Router {
    analysis_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
