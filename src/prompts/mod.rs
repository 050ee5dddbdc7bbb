//! Prompt construction for the external content-generation process.
//!
//! The prompts module is organized into two submodules:
//!
//! - [`generation`] - Renders the instruction document handed to the
//!   generator, one per course descriptor
//! - [`summary`] - Builds and renders the aggregate generation summaries
//!   collected by the batch orchestrator
//!
//! Both are pure templating: string interpolation into fixed skeletons,
//! byte-identical output for identical input.

pub mod generation;
pub mod summary;

pub use generation::build_generation_prompt;
pub use summary::{FileReport, GenerationSummary};
