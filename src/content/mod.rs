//! Content schema for adaptive-learning material.
//!
//! This module defines the entities a course decomposes into and enforces
//! their structural invariants:
//!
//! - [`course`] - Course descriptors and expected production counts
//! - [`difficulty`] - The closed difficulty scale
//! - [`lesson`] - Modules and the microlessons they own
//! - [`exercise`] - Typed, validated exercise records
//!
//! Ownership is strict tree-shaped: Course → Module → MicroLesson →
//! Exercise. Construction is the single invariant-enforcement point: records
//! are built through constructors that return [`SchemaError`] on violation,
//! and deserialization funnels through the same validation.
//!
//! [`SchemaError`]: crate::error::SchemaError

pub mod course;
pub mod difficulty;
pub mod exercise;
pub mod lesson;

pub use course::{Course, ExerciseCounts, SourceFileSpec};
pub use difficulty::Difficulty;
pub use exercise::{AcceptedAnswers, Exercise, ExerciseKind, ValidationRule};
pub use lesson::{MicroLesson, Module};
