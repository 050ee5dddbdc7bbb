//! Topic routing for course identifiers.
//!
//! This module maps a content-unit identifier (zero-padded two-digit numeric
//! prefix plus slug) to the topic directory it belongs to, via a fixed table
//! of inclusive, pairwise-disjoint numeric ranges.

mod table;

pub use table::{TopicRange, TopicTable};
