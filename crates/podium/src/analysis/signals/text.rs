use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Hesitation markers counted as substring occurrences over the lowercased
/// transcript, multi-word entries included.
const FILLER_TERMS: [&str; 8] = [
    "um",
    "uh",
    "like",
    "you know",
    "so",
    "actually",
    "basically",
    "literally",
];

/// Courtesy terms; each contributes at most one hit regardless of how often
/// it appears.
const POLITE_TERMS: [&str; 7] = [
    "please",
    "thank",
    "appreciate",
    "kindly",
    "would",
    "could",
    "may",
];

/// Commanding phrasings; same one-hit-per-term rule as the polite lexicon.
const IMPOLITE_TERMS: [&str; 4] = ["must", "have to", "need to", "should"];

const GRAMMAR_DETAIL_CAP: usize = 5;
const REPEATED_WORD_CAP: usize = 5;

/// A single grammar-checker finding as it crosses the collaborator boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub context: String,
}

/// Lexical statistics derived from one transcript plus its grammar findings.
/// Deterministic given identical input; an empty transcript yields all-zero
/// counts rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSignals {
    pub total_words: usize,
    pub total_sentences: usize,
    pub grammar_error_count: usize,
    /// First five findings, checker order preserved.
    pub grammar_issue_details: Vec<GrammarIssue>,
    pub filler_word_count: usize,
    /// Words used more than 3 times and longer than 3 characters, discovery
    /// order, capped at five.
    pub repeated_words: Vec<String>,
    pub polite_hit_count: usize,
    pub impolite_hit_count: usize,
}

pub fn extract_transcript_signals(
    transcript: &str,
    grammar_issues: &[GrammarIssue],
) -> TranscriptSignals {
    let lowered = transcript.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let filler_word_count = FILLER_TERMS
        .iter()
        .map(|term| lowered.matches(term).count())
        .sum();

    let polite_hit_count = POLITE_TERMS
        .iter()
        .filter(|term| lowered.contains(**term))
        .count();
    let impolite_hit_count = IMPOLITE_TERMS
        .iter()
        .filter(|term| lowered.contains(**term))
        .count();

    TranscriptSignals {
        total_words: words.len(),
        total_sentences: count_sentences(&lowered),
        grammar_error_count: grammar_issues.len(),
        grammar_issue_details: grammar_issues
            .iter()
            .take(GRAMMAR_DETAIL_CAP)
            .cloned()
            .collect(),
        filler_word_count,
        repeated_words: repeated_words(&words),
        polite_hit_count,
        impolite_hit_count,
    }
}

/// Segments ending in `.`, `!`, or `?` count as sentences when they carry at
/// least one alphanumeric character; a trailing unterminated segment counts
/// too.
fn count_sentences(text: &str) -> usize {
    text.split(|c| matches!(c, '.' | '!' | '?'))
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

fn repeated_words(words: &[&str]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut repeated = Vec::new();
    let mut seen = HashSet::new();
    for word in words {
        if repeated.len() == REPEATED_WORD_CAP {
            break;
        }
        if word.chars().count() > 3 && counts[word] > 3 && seen.insert(*word) {
            repeated.push((*word).to_string());
        }
    }
    repeated
}
