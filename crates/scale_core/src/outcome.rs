use std::ops::RangeInclusive;

/// Shown when a commit is attempted without a matched product or weight.
pub const NOT_READY_MESSAGE: &str = "No item detected or weight not yet valid";
/// Shown when the commit request never produced a response.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach server";
/// Shown when the backend rejects a commit without a usable reason.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to save transaction";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Warning,
    Error,
}

/// Result of one commit action, presented to the operator once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Success(String),
    Warning(String),
    Error(String),
}

impl CommitOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            CommitOutcome::Success(_) => OutcomeKind::Success,
            CommitOutcome::Warning(_) => OutcomeKind::Warning,
            CommitOutcome::Error(_) => OutcomeKind::Error,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CommitOutcome::Success(message)
            | CommitOutcome::Warning(message)
            | CommitOutcome::Error(message) => message,
        }
    }
}

// Pictographs, transport symbols, supplemental symbols, regional indicators,
// misc symbols, dingbats and the emoji variation selector.
const DECORATIVE_RANGES: [RangeInclusive<u32>; 6] = [
    0x1F300..=0x1F6FF,
    0x1F900..=0x1F9FF,
    0x1F1E6..=0x1F1FF,
    0x2600..=0x26FF,
    0x2700..=0x27BF,
    0xFE0F..=0xFE0F,
];

fn is_decorative(ch: char) -> bool {
    let code = u32::from(ch);
    DECORATIVE_RANGES.iter().any(|range| range.contains(&code))
}

/// Removes decorative symbols from a server message and trims the result.
pub fn sanitize_status(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !is_decorative(*ch))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Maps free-text commit replies onto outcomes.
///
/// A reply counts as success when its sanitized text contains one of the
/// vocabulary terms, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClassifier {
    success_terms: Vec<String>,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self {
            success_terms: vec!["success".to_string(), "berhasil".to_string()],
        }
    }
}

impl StatusClassifier {
    /// Adds another success term, e.g. for a new backend locale.
    pub fn with_success_term(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_lowercase();
        if !term.is_empty() && !self.success_terms.contains(&term) {
            self.success_terms.push(term);
        }
        self
    }

    pub fn success_terms(&self) -> &[String] {
        &self.success_terms
    }

    pub fn classify(&self, raw_status: &str) -> CommitOutcome {
        let text = sanitize_status(raw_status);
        let lowered = text.to_lowercase();
        if self
            .success_terms
            .iter()
            .any(|term| lowered.contains(term.as_str()))
        {
            CommitOutcome::Success(text)
        } else if text.is_empty() {
            CommitOutcome::Error(FALLBACK_FAILURE_MESSAGE.to_string())
        } else {
            CommitOutcome::Error(text)
        }
    }
}
