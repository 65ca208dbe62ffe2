//! Result-capture session for a single match.
//!
//! A [`MatchEditor`] owns the statistics, own-goal counters and image
//! evidence of one match from the moment its detail is loaded until the
//! result is stored. Every mutation goes through the editor so the scoreline
//! and the card invariants always hold.

pub mod editor;
pub mod scoreline;
pub mod state;
pub mod submission;

pub use editor::MatchEditor;
pub use scoreline::derive_scoreline;
pub use state::{EditorPhase, MatchState, Side, StatUpdate, Tab};
pub use submission::{SubmitOutcome, non_blank_urls};
