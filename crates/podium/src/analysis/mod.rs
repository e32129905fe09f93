//! Rehearsal analysis: signal extraction, scoring, feedback composition,
//! and the pipeline service orchestrating the upstream collaborators.

pub mod collaborators;
pub mod progress;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod signals;

#[cfg(test)]
mod tests;

pub use collaborators::{
    GrammarChecker, GrammarError, MediaError, MediaExtractor, Transcriber, TranscriptionError,
    VisualAnalysisError, VisualAnalyzer,
};
pub use progress::{ImprovementDeltas, ProgressSeries, ProgressSummary};
pub use report::{assemble_report, compose_report, AnalysisReport, TranscriptStats};
pub use repository::{
    AnalysisDetailView, AnalysisId, AnalysisRecord, AnalysisRepository, AnalysisStatus,
    AnalysisStatusView, AnalysisSummaryView, RepositoryError,
};
pub use router::analysis_router;
pub use scoring::{
    compute_scores, FeedbackItem, FeedbackStatus, ResourceGroup, ResourceLink, ScoreCard,
    ScoreCategory,
};
pub use service::{AnalysisService, AnalysisServiceError, VideoSubmission};
pub use signals::{
    extract_transcript_signals, DominantExpression, GrammarIssue, RawVisualAnalysis, SignalError,
    TranscriptSignals, VisualSignals,
};
