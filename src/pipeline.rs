//! Batch orchestration - discovery, per-participant processing, isolation
//!
//! Each participant resource is processed to completion (extract → render →
//! write) before the next begins. A failure on one resource is logged and the
//! batch continues; one bad file cannot abort the run.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::transcript::ParticipantTranscript;
use crate::trial::read_trials;
use crate::{Error, Result};

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Transcripts written.
    pub generated: usize,
    /// Participants with zero retained trials (no artifact).
    pub skipped: usize,
    /// Participants that failed with a resource-level error.
    pub failed: usize,
}

/// Discover participant resources in `data_dir`, in sorted order.
///
/// Matches `participant_*.csv`; names containing `transformed` or `copy`
/// are working copies left behind by other tooling and are excluded.
///
/// # Errors
///
/// Returns [`Error::MissingDataDirectory`] if `data_dir` does not exist, or
/// [`Error::Io`] if it cannot be read.
pub fn discover_participant_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.is_dir() {
        return Err(Error::MissingDataDirectory(data_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with("participant_")
            && name.ends_with(".csv")
            && !name.contains("transformed")
            && !name.contains("copy")
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Participant id from a resource path: the file stem minus `participant_`.
#[must_use]
pub fn participant_id_from_path(path: &Path) -> Option<String> {
    path.file_stem()?
        .to_str()?
        .strip_prefix("participant_")
        .map(str::to_string)
}

/// Process one participant resource end to end.
///
/// Returns the number of trials written, or `None` when the resource yields
/// zero retained trials (no artifact is produced).
///
/// # Errors
///
/// Returns an error if the resource cannot be parsed or the artifact cannot
/// be written.
pub fn process_participant(
    csv_path: &Path,
    participant_id: &str,
    output_dir: &Path,
) -> Result<Option<usize>> {
    let trials = read_trials(File::open(csv_path)?)?;
    if trials.is_empty() {
        return Ok(None);
    }

    let transcript = ParticipantTranscript::render(participant_id, &trials);
    transcript.write_to_dir(output_dir)?;
    Ok(Some(trials.len()))
}

/// Process every discovered participant resource in `data_dir`.
///
/// The output directory is created if absent. Failures are isolated at the
/// participant boundary: they are logged with the underlying message and
/// counted, and processing continues with the next resource.
///
/// # Errors
///
/// Returns [`Error::MissingDataDirectory`] if `data_dir` does not exist, or
/// [`Error::Io`] if the output directory cannot be created.
pub fn process_all(data_dir: &Path, output_dir: &Path) -> Result<RunSummary> {
    let files = discover_participant_files(data_dir)?;
    fs::create_dir_all(output_dir)?;

    info!(count = files.len(), "found participant files to process");

    let mut summary = RunSummary::default();
    for csv_path in &files {
        let participant_id = participant_id_from_path(csv_path)
            .unwrap_or_else(|| csv_path.display().to_string());

        match process_participant(csv_path, &participant_id, output_dir) {
            Ok(Some(trials)) => {
                info!(participant = %participant_id, trials, "generated transcript");
                summary.generated += 1;
            }
            Ok(None) => {
                info!(participant = %participant_id, "no trials found, skipping");
                summary.skipped += 1;
            }
            Err(e) => {
                warn!(participant = %participant_id, error = %e, "failed to process participant");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
