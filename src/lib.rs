//! # Bandit-Transcripts: Contextual Bandit Trial Transcript Generator
//!
//! Batch converter from participant trial records (CSV) to human-readable
//! transcripts of a three-armed contextual bandit task (Red, White, Black).
//!
//! The conversion is one linear, single-pass pipeline per participant:
//! parse rows → filter to valid trials → map raw choice codes to canonical
//! actions → render a fixed-format text block → write one artifact.
//!
//! ## Example Usage
//!
//! ```rust
//! use bandit_transcripts::transcript::ParticipantTranscript;
//! use bandit_transcripts::trial::read_trials;
//!
//! let csv = "TrialType,context,choice,reward\n\
//!            pirate_1,ctx_A,white_pirate,1\n";
//! let trials = read_trials(csv.as_bytes())?;
//! let transcript = ParticipantTranscript::render("1132", &trials);
//! assert!(transcript.text().contains("CHOOSE_ACTION: White"));
//! # Ok::<(), bandit_transcripts::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod pipeline;
pub mod transcript;
pub mod trial;

pub use error::{Error, Result};
