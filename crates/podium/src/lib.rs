//! Podium scores presentation rehearsals: a recorded video is transcribed
//! and analyzed by upstream collaborators, and this crate's analysis core
//! turns their raw signals into normalized scores, tiered feedback, and
//! curated learning resources.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
