//! Trial Extractor - turns tabular participant rows into trial records
//!
//! A participant resource is a CSV with a header row and at least the columns
//! `TrialType`, `context`, `choice`, `reward`. Extraction is a single pass:
//! rows are filtered down to valid bandit trials, raw choice codes are mapped
//! to canonical actions, and the survivors are renumbered `1..=N`.
//!
//! Row-level defects (non-trial rows, missing required fields) are absorbed
//! by filtering and never surface as errors. Resource-level defects
//! (unreadable stream, malformed CSV) propagate to the caller.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Row of named string fields, as deserialized from one CSV record.
pub type Row = HashMap<String, String>;

/// Canonical action labels of the three-armed bandit task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The `red` arm.
    Red,
    /// The `white` arm.
    White,
    /// The `black` arm.
    Black,
    /// Raw choice code matched no known arm.
    Unknown,
}

impl Action {
    /// Map a raw choice code (e.g. `white_pirate`) to a canonical action.
    ///
    /// Searches the code case-insensitively for `red`, `white`, `black`, in
    /// that priority order; the first substring hit wins. Codes matching none
    /// of the three map to [`Action::Unknown`].
    #[must_use]
    pub fn from_choice(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("red") {
            Self::Red
        } else if lower.contains("white") {
            Self::White
        } else if lower.contains("black") {
            Self::Black
        } else {
            Self::Unknown
        }
    }

    /// Canonical label as it appears in rendered transcripts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::White => "White",
            Self::Black => "Black",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One decision event retained from a participant's data.
///
/// Immutable once constructed. `trial_number` is assigned over retained
/// trials only, so a participant's sequence is always contiguous from 1
/// regardless of how many raw rows were skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    trial_number: usize,
    context: String,
    action: Action,
    reward: String,
}

impl TrialRecord {
    /// Create a trial record.
    ///
    /// # Arguments
    ///
    /// * `trial_number` - 1-based position within the retained sequence
    /// * `context` - situational information shown before the choice
    /// * `action` - canonical action derived from the raw choice code
    /// * `reward` - observed reward, passed through verbatim
    #[must_use]
    pub fn new(
        trial_number: usize,
        context: impl Into<String>,
        action: Action,
        reward: impl Into<String>,
    ) -> Self {
        Self {
            trial_number,
            context: context.into(),
            action,
            reward: reward.into(),
        }
    }

    /// Get the 1-based trial number.
    #[must_use]
    pub const fn trial_number(&self) -> usize {
        self.trial_number
    }

    /// Get the context string.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Get the chosen action.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Get the raw reward string.
    #[must_use]
    pub fn reward(&self) -> &str {
        &self.reward
    }
}

/// Look up a field, treating an absent key as the empty string.
fn field<'a>(row: &'a Row, name: &str) -> &'a str {
    row.get(name).map_or("", String::as_str)
}

/// Whether a row's `TrialType` marks it as a candidate bandit trial.
///
/// The `practice_` exclusion is kept as written even though the `pirate_`
/// prefix already rules it out; the `TrialType` vocabulary is owned by the
/// upstream data producer, not by this crate.
#[must_use]
pub fn is_candidate_trial(trial_type: &str) -> bool {
    trial_type.starts_with("pirate_") && !trial_type.starts_with("practice_")
}

/// Extract retained trials from an ordered sequence of rows.
///
/// A row survives iff it is a candidate trial (see [`is_candidate_trial`])
/// and `context`, `choice`, and `reward` are all present and non-empty.
/// Survivors are numbered `1..=N` in encounter order; everything else is
/// skipped silently.
pub fn extract_trials<I>(rows: I) -> Vec<TrialRecord>
where
    I: IntoIterator<Item = Row>,
{
    let mut trials = Vec::new();

    for row in rows {
        if !is_candidate_trial(field(&row, "TrialType")) {
            continue;
        }

        let context = field(&row, "context");
        let choice = field(&row, "choice");
        let reward = field(&row, "reward");
        if context.is_empty() || choice.is_empty() || reward.is_empty() {
            continue;
        }

        trials.push(TrialRecord::new(
            trials.len() + 1,
            context,
            Action::from_choice(choice),
            reward,
        ));
    }

    trials
}

/// Parse a CSV byte stream (header row required) and extract retained trials.
///
/// # Errors
///
/// Returns [`crate::Error::Csv`] if the stream is not well-formed CSV.
pub fn read_trials<R: Read>(reader: R) -> Result<Vec<TrialRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize::<Row>() {
        rows.push(result?);
    }

    Ok(extract_trials(rows))
}
