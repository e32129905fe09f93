use serde::{Deserialize, Serialize};

/// Aggregate non-verbal metrics reported by the visual analyzer for one
/// video, carried as measured so callers can inspect the full set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVisualAnalysis {
    pub face_presence_pct: f64,
    pub eye_contact_pct: f64,
    pub hand_usage_pct: f64,
    pub hand_movement_count: u32,
    pub smile_pct: f64,
    pub dominant_expression: String,
    pub frames_sampled: u32,
}

/// Expression the analyzer saw most often across sampled frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantExpression {
    Engaging,
    Neutral,
    Serious,
    Unknown,
}

impl DominantExpression {
    pub const fn label(self) -> &'static str {
        match self {
            DominantExpression::Engaging => "engaging",
            DominantExpression::Neutral => "neutral",
            DominantExpression::Serious => "serious",
            DominantExpression::Unknown => "unknown",
        }
    }

    /// Parse an analyzer-provided label; anything unrecognized maps to
    /// `Unknown` rather than failing the run.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "engaging" => Self::Engaging,
            "neutral" => Self::Neutral,
            "serious" => Self::Serious,
            _ => Self::Unknown,
        }
    }

    /// Classification analyzers apply to their smile measurement.
    pub fn from_smile_pct(smile_pct: f64) -> Self {
        if smile_pct > 30.0 {
            Self::Engaging
        } else if smile_pct > 10.0 {
            Self::Neutral
        } else {
            Self::Serious
        }
    }
}

/// Score-ready subset of the visual analysis. Absent entirely when no
/// analyzer ran; never substituted with placeholder values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualSignals {
    pub eye_contact_pct: f64,
    /// Raw, pre-scaling; the score computer applies the 1.5x boost.
    pub hand_usage_pct: f64,
    pub smile_pct: f64,
    pub dominant_expression: DominantExpression,
}

impl VisualSignals {
    /// Normalize the analyzer's aggregate output into the score-ready metric
    /// set, validating every consumed percentage.
    pub fn from_raw(raw: &RawVisualAnalysis) -> Result<Self, SignalError> {
        Ok(Self {
            eye_contact_pct: checked_pct("eye_contact_pct", raw.eye_contact_pct)?,
            hand_usage_pct: checked_pct("hand_usage_pct", raw.hand_usage_pct)?,
            smile_pct: checked_pct("smile_pct", raw.smile_pct)?,
            dominant_expression: DominantExpression::from_label(&raw.dominant_expression),
        })
    }
}

fn checked_pct(metric: &'static str, value: f64) -> Result<f64, SignalError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(SignalError::PercentageOutOfRange { metric, value });
    }
    Ok(value)
}

/// Contract violation in signals handed to the core.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("{metric} must be a finite percentage in [0, 100], got {value}")]
    PercentageOutOfRange { metric: &'static str, value: f64 },
}
