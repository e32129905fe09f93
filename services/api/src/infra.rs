use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use podium::analysis::{
    AnalysisId, AnalysisRecord, AnalysisRepository, AnalysisStatus, DominantExpression,
    GrammarChecker, GrammarError, GrammarIssue, MediaError, MediaExtractor, RawVisualAnalysis,
    RepositoryError, Transcriber, TranscriptionError, VisualAnalysisError, VisualAnalyzer,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAnalysisRepository {
    records: Arc<Mutex<Vec<AnalysisRecord>>>,
}

impl AnalysisRepository for InMemoryAnalysisRepository {
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

/// Stand-in for the ffmpeg-backed extractor: resolves the audio artifact
/// stored next to the video instead of decoding anything.
pub(crate) struct SidecarMediaExtractor;

impl MediaExtractor for SidecarMediaExtractor {
    fn extract_audio(&self, video: &Path) -> Result<PathBuf, MediaError> {
        if video.as_os_str().is_empty() {
            return Err(MediaError::Extraction("empty video path".to_string()));
        }
        Ok(video.with_extension("wav"))
    }
}

/// Reads a prepared transcript stored next to the audio artifact. Stands in
/// for a speech-to-text backend; deployments inject their own.
pub(crate) struct PlainTextTranscriber;

impl Transcriber for PlainTextTranscriber {
    fn transcribe(&self, audio: &Path) -> Result<String, TranscriptionError> {
        let transcript_path = audio.with_extension("txt");
        std::fs::read_to_string(&transcript_path).map_err(|err| {
            TranscriptionError::Failed(format!(
                "no transcript at {}: {err}",
                transcript_path.display()
            ))
        })
    }
}

/// Transcriber returning a fixed transcript, for demos and tests.
pub(crate) struct CannedTranscriber {
    transcript: String,
}

impl CannedTranscriber {
    pub(crate) fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
        }
    }
}

impl Transcriber for CannedTranscriber {
    fn transcribe(&self, _audio: &Path) -> Result<String, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}

/// Two-rule checker covering the mistakes rehearsal transcripts actually
/// contain: doubled words and a lowercase standalone pronoun. A hosted
/// grammar service replaces this in real deployments.
pub(crate) struct HeuristicGrammarChecker;

impl GrammarChecker for HeuristicGrammarChecker {
    fn check(&self, transcript: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let words: Vec<&str> = transcript.split_whitespace().collect();
        let mut issues = Vec::new();

        for (index, pair) in words.windows(2).enumerate() {
            let left = strip_punctuation(pair[0]);
            let right = strip_punctuation(pair[1]);
            if !left.is_empty() && left.eq_ignore_ascii_case(right) {
                issues.push(GrammarIssue {
                    message: format!(
                        "Possible typo: you repeated the word '{}'",
                        right.to_lowercase()
                    ),
                    context: context_window(&words, index),
                });
            }
        }

        for (index, word) in words.iter().enumerate() {
            if strip_punctuation(word) == "i" {
                issues.push(GrammarIssue {
                    message: "The personal pronoun 'I' should be uppercase".to_string(),
                    context: context_window(&words, index),
                });
            }
        }

        Ok(issues)
    }
}

fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

fn context_window(words: &[&str], index: usize) -> String {
    let start = index.saturating_sub(2);
    let end = (index + 3).min(words.len());
    words[start..end].join(" ")
}

/// Analyzer returning fixed aggregate metrics, for demos and tests.
pub(crate) struct CannedVisualAnalyzer {
    pub(crate) analysis: RawVisualAnalysis,
}

impl CannedVisualAnalyzer {
    pub(crate) fn sample() -> Self {
        let smile_pct = 34.0;
        Self {
            analysis: RawVisualAnalysis {
                face_presence_pct: 96.0,
                eye_contact_pct: 72.0,
                hand_usage_pct: 38.0,
                hand_movement_count: 19,
                smile_pct,
                dominant_expression: DominantExpression::from_smile_pct(smile_pct)
                    .label()
                    .to_string(),
                frames_sampled: 30,
            },
        }
    }
}

impl VisualAnalyzer for CannedVisualAnalyzer {
    fn analyze(&self, _video: &Path) -> Result<RawVisualAnalysis, VisualAnalysisError> {
        Ok(self.analysis.clone())
    }
}
