//! Answer matching for short-answer exercises.
//!
//! Decides whether a learner-submitted string satisfies a short-answer
//! exercise: the candidate is accepted if it matches ANY accepted literal
//! under normalization (trim, subscript/superscript digit folding,
//! case-insensitive comparison). Pure functions, no state.
//!
//! There is no match error type. Malformed data — an empty candidate, an
//! empty accepted set, a blank persisted answer field — fails closed: the
//! answer is simply not accepted.

mod normalize;

pub use normalize::normalize;

use crate::content::AcceptedAnswers;

/// Returns true if the candidate matches any accepted literal.
///
/// An empty (or whitespace-only) candidate always fails; an empty accepted
/// set rejects every candidate.
pub fn matches(answers: &AcceptedAnswers, candidate: &str) -> bool {
    let candidate = normalize(candidate);
    if candidate.is_empty() {
        return false;
    }
    answers.normalized().iter().any(|accepted| *accepted == candidate)
}

/// Matches a candidate against a raw `|`-delimited answer field.
///
/// Covers persisted records that never passed schema validation: a field
/// with no non-empty accepted literals rejects every candidate instead of
/// failing.
pub fn matches_raw(answer_field: &str, candidate: &str) -> bool {
    match AcceptedAnswers::parse(answer_field) {
        Ok(answers) => matches(&answers, candidate),
        Err(_) => false,
    }
}
