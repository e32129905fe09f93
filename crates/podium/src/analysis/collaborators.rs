//! Trait seams for the upstream analysis collaborators. Concrete
//! implementations (media tooling, speech-to-text backends, grammar
//! services, vision pipelines) live outside this crate and are injected
//! into the service explicitly, never held as process globals.

use super::signals::{GrammarIssue, RawVisualAnalysis};
use std::path::{Path, PathBuf};

/// Extracts the audio track from a stored rehearsal video.
pub trait MediaExtractor: Send + Sync {
    fn extract_audio(&self, video: &Path) -> Result<PathBuf, MediaError>;
}

/// Converts extracted audio into a plain-text transcript.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &Path) -> Result<String, TranscriptionError>;
}

/// Reports grammar findings for a transcript. The returned sequence keeps
/// the checker's own ordering.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, transcript: &str) -> Result<Vec<GrammarIssue>, GrammarError>;
}

/// Produces aggregate non-verbal metrics for a rehearsal video.
pub trait VisualAnalyzer: Send + Sync {
    fn analyze(&self, video: &Path) -> Result<RawVisualAnalysis, VisualAnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("video file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("audio extraction failed: {0}")]
    Extraction(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription backend unavailable: {0}")]
    Unavailable(String),
    #[error("transcription failed: {0}")]
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("grammar service unreachable: {0}")]
    Unreachable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VisualAnalysisError {
    #[error("visual analysis failed: {0}")]
    Failed(String),
}
