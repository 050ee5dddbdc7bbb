//! Error types for course-forge operations.
//!
//! Defines error types for all major subsystems:
//! - Content schema validation
//! - Topic routing
//! - Course registry loading
//! - Batch instruction generation
//!
//! Schema and routing failures are recoverable at the batch boundary (the
//! offending record or course is skipped); registry and batch failures are
//! fatal to the run.

use thiserror::Error;

/// Errors raised when a content record violates a structural invariant.
///
/// Construction of a `MicroLesson` or `Exercise` is the single enforcement
/// point for these invariants; serde deserialization funnels through the
/// same constructors.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("sequence_order must be a positive integer")]
    ZeroSequenceOrder,

    #[error("duplicate sequence_order {sequence} within {scope}")]
    DuplicateSequenceOrder { scope: String, sequence: u32 },

    #[error("estimated_minutes must be a positive integer")]
    ZeroEstimatedMinutes,

    #[error("mcq options must have at least 2 entries, got {got}")]
    TooFewOptions { got: usize },

    #[error("correct_answer index {index} is out of bounds for {options} options")]
    AnswerIndexOutOfBounds { index: usize, options: usize },

    #[error("answer field yields no non-empty accepted literals")]
    EmptyAcceptedAnswers,

    #[error("timeout_sec must be a positive integer")]
    ZeroTimeout,

    #[error("microlesson '{lesson}' lists itself as a prerequisite")]
    SelfPrerequisite { lesson: String },

    #[error("invalid validation pattern '{pattern}': {message}")]
    InvalidValidationPattern { pattern: String, message: String },
}

/// Errors raised when an identifier cannot be routed to a topic directory.
///
/// An identifier outside the declared ranges signals a configuration gap and
/// is never silently defaulted.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("identifier '{0}' has no zero-padded two-digit numeric prefix")]
    MissingNumericPrefix(String),

    #[error("identifier '{id}' (unit {number}) falls outside all declared topic ranges")]
    UnmappedIdentifier { id: String, number: u8 },

    #[error("topic range {start:02}-{end:02} is inverted")]
    InvertedRange { start: u8, end: u8 },

    #[error("topic ranges for '{first}' and '{second}' overlap")]
    OverlappingRanges { first: String, second: String },

    #[error("topic table has no ranges")]
    EmptyTable,
}

/// Errors that can occur while loading or building the course registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("course '{0}' is already registered")]
    DuplicateCourse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can occur while running a generation batch.
///
/// Routing failures are handled inside the batch loop (log and skip); only
/// failures that make the run itself meaningless surface here.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
