//! Batch orchestration of instruction generation.
//!
//! The orchestrator walks a course registry and, for each course: resolves
//! the topic directory via the routing table, renders the instruction
//! document via the prompt builder, and writes one file per course. A
//! routing failure skips only the offending course; the rest of the batch
//! proceeds. After the loop, the run writes an aggregate summary document
//! and a machine-readable tally.
//!
//! Everything is synchronous and single-threaded: each course is processed
//! independently, and the only shared state is the append-only tally.

pub mod orchestrator;

pub use orchestrator::{BatchOrchestrator, BatchReport, BatchStats, CourseExecution, CourseStatus};
