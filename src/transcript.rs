//! Transcript Renderer - formats a trial sequence as a text document
//!
//! Rendering is a pure function of the participant id and the trial sequence.
//! The document grammar is line-oriented and fixed; existing transcripts
//! depend on it byte-for-byte, so the header and per-trial lines here must
//! not drift.

use std::fs;
use std::path::{Path, PathBuf};

use crate::trial::TrialRecord;
use crate::Result;

/// Separator line used in the document header (60 `=` characters).
pub const SEPARATOR: &str =
    "============================================================";

/// The three canonical action labels, as listed in rendered documents.
pub const ACTION_LABELS: &str = "Red, White, Black";

/// A rendered transcript document for one participant.
///
/// Created once per participant and written once; no further mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantTranscript {
    participant_id: String,
    text: String,
}

impl ParticipantTranscript {
    /// Render a participant's trial sequence into a transcript document.
    ///
    /// An empty sequence yields a valid header-only document; callers are
    /// expected to skip persisting those.
    #[must_use]
    pub fn render(participant_id: impl Into<String>, trials: &[TrialRecord]) -> Self {
        let participant_id = participant_id.into();

        let mut lines = Vec::with_capacity(7 + trials.len() * 6);
        lines.push(format!("PARTICIPANT: {participant_id}"));
        lines.push(SEPARATOR.to_string());
        lines.push("TASK: Contextual bandit experiment.".to_string());
        lines.push(format!("ACTIONS: {ACTION_LABELS}."));
        lines.push("GOAL: Earn as many rewards as possible.".to_string());
        lines.push(SEPARATOR.to_string());
        lines.push(String::new());

        for trial in trials {
            lines.push(format!("TRIAL {}", trial.trial_number()));
            lines.push(format!("CONTEXT: {}", trial.context()));
            lines.push(format!("AVAILABLE_ACTIONS: {ACTION_LABELS}"));
            lines.push(format!("CHOOSE_ACTION: {}", trial.action()));
            lines.push(format!("REWARD: {}", trial.reward()));
            lines.push(String::new());
        }

        Self {
            participant_id,
            text: lines.join("\n"),
        }
    }

    /// Get the participant id this document was rendered for.
    #[must_use]
    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    /// Get the rendered document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Artifact file name derived from the participant id.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("transcript_{}.txt", self.participant_id)
    }

    /// Write the document into `output_dir` under [`Self::file_name`].
    ///
    /// The full document string already exists before the write starts, so
    /// no partial artifact can reach disk short of an OS-level failure.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the write fails.
    pub fn write_to_dir(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(self.file_name());
        fs::write(&path, &self.text)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial::Action;

    #[test]
    fn test_separator_is_sixty_equals() {
        assert_eq!(SEPARATOR.len(), 60);
        assert!(SEPARATOR.chars().all(|c| c == '='));
    }

    #[test]
    fn test_header_only_document_for_empty_sequence() {
        let transcript = ParticipantTranscript::render("1132", &[]);

        let expected = format!(
            "PARTICIPANT: 1132\n{SEPARATOR}\n\
             TASK: Contextual bandit experiment.\n\
             ACTIONS: Red, White, Black.\n\
             GOAL: Earn as many rewards as possible.\n\
             {SEPARATOR}\n"
        );
        assert_eq!(transcript.text(), expected);
    }

    #[test]
    fn test_trial_block_layout() {
        let trials = vec![TrialRecord::new(1, "ctx_A", Action::White, "1")];
        let transcript = ParticipantTranscript::render("7", &trials);

        let text = transcript.text();
        assert!(text.contains("TRIAL 1\n"));
        assert!(text.contains("CONTEXT: ctx_A\n"));
        assert!(text.contains("AVAILABLE_ACTIONS: Red, White, Black\n"));
        assert!(text.contains("CHOOSE_ACTION: White\n"));
        assert!(text.ends_with("REWARD: 1\n"));
    }

    #[test]
    fn test_blocks_follow_sequence_order() {
        let trials = vec![
            TrialRecord::new(1, "ctx_A", Action::Red, "1"),
            TrialRecord::new(2, "ctx_B", Action::Black, "0"),
        ];
        let transcript = ParticipantTranscript::render("7", &trials);

        let first = transcript.text().find("TRIAL 1").unwrap();
        let second = transcript.text().find("TRIAL 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let trials = vec![TrialRecord::new(1, "ctx_A", Action::Unknown, "0")];

        let first = ParticipantTranscript::render("42", &trials);
        let second = ParticipantTranscript::render("42", &trials);
        assert_eq!(first.text(), second.text());
    }

    #[test]
    fn test_file_name_derivation() {
        let transcript = ParticipantTranscript::render("1132", &[]);
        assert_eq!(transcript.file_name(), "transcript_1132.txt");
    }
}
