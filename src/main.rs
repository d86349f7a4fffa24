//! Contextual bandit transcript generator.
//!
//! Reads `data/participant_<id>.csv` files relative to the working directory
//! and writes `transcripts/transcript_<id>.txt` artifacts. No flags.

use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bandit_transcripts::{pipeline, Error};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let project_root = env::current_dir()?;
    let data_dir = project_root.join("data");
    let output_dir = project_root.join("transcripts");

    info!("Contextual Bandit Transcript Generator");
    info!(data_dir = %data_dir.display(), output_dir = %output_dir.display(), "resolved directories");

    match pipeline::process_all(&data_dir, &output_dir) {
        Ok(summary) => {
            info!(
                generated = summary.generated,
                skipped = summary.skipped,
                failed = summary.failed,
                "processing complete"
            );
            info!(output_dir = %output_dir.display(), "transcripts saved");
        }
        // A missing data directory aborts the run but not the process.
        Err(Error::MissingDataDirectory(path)) => {
            error!(path = %path.display(), "data directory not found");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
