pub mod text;
pub mod visual;

pub use text::{extract_transcript_signals, GrammarIssue, TranscriptSignals};
pub use visual::{DominantExpression, RawVisualAnalysis, SignalError, VisualSignals};
