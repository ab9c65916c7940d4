//! Keyword-scored diagnosis of free-text car complaints.
//!
//! A complaint is normalized, filed under the category whose trigger keywords it
//! mentions most, and answered with the best-matching issue from that category's
//! slice of the knowledge base. Internal failures turn into a fixed apology so
//! callers always receive text they can show.

pub mod advisory;
pub mod classifier;
pub mod knowledge;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, error};

pub use knowledge::{Category, Issue};

pub const CLARIFYING_QUESTION: &str = "I'm not sure about this specific issue. Could you provide more details about the symptoms you're experiencing with your vehicle?";
pub const APOLOGY: &str = "I'm sorry, I encountered an error while diagnosing your issue. Please try describing your problem again.";

/// How the advisory was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// An issue scored above zero against the complaint.
    Scored,
    /// Nothing scored, so an issue was drawn at random from the category.
    Random,
    /// The category had no issues to offer.
    Unmatched,
    /// Rendering failed and the apology was returned.
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<&'static str>,
    pub match_kind: MatchKind,
    pub response: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DiagnosisError {
    #[error("failed to render advisory for '{problem}'")]
    Render {
        problem: &'static str,
        #[source]
        source: std::fmt::Error,
    },
}

/// Advisory text for a complaint; see [`diagnose_detailed`] for the matched category.
pub fn diagnose<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    diagnose_detailed(text, rng).response
}

pub fn diagnose_detailed<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Diagnosis {
    let normalized = classifier::normalize_text(text);
    let category = classifier::classify(&normalized);
    debug!(category = category.label(), "diagnosed category");

    match try_diagnose(category, category.issues(), &normalized, rng) {
        Ok(diagnosis) => diagnosis,
        Err(err) => {
            error!(error = %err, category = category.label(), "diagnosis failed; apologizing");
            Diagnosis {
                category,
                problem: None,
                match_kind: MatchKind::Failed,
                response: APOLOGY.to_string(),
            }
        }
    }
}

fn try_diagnose<R: Rng + ?Sized>(
    category: Category,
    issues: &'static [Issue],
    normalized: &str,
    rng: &mut R,
) -> Result<Diagnosis, DiagnosisError> {
    let (issue, match_kind) = match classifier::best_match(issues, normalized) {
        Some(issue) => (issue, MatchKind::Scored),
        None => match issues.choose(rng) {
            Some(issue) => (issue, MatchKind::Random),
            None => {
                return Ok(Diagnosis {
                    category,
                    problem: None,
                    match_kind: MatchKind::Unmatched,
                    response: CLARIFYING_QUESTION.to_string(),
                })
            }
        },
    };

    let response = advisory::render(issue).map_err(|source| DiagnosisError::Render {
        problem: issue.problem,
        source,
    })?;

    Ok(Diagnosis {
        category,
        problem: Some(issue.problem),
        match_kind,
        response,
    })
}
