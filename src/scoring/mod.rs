//! Submission scoring
//!
//! The pure scoring rule and a session that applies it with a floored score.

mod rule;
mod session;

pub use rule::{PENALTY, SubmissionStatus, max_score, score_delta, word_points};
pub use session::{Session, Submission};
