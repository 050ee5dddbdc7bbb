//! Generation run summaries.
//!
//! A [`GenerationSummary`] is the per-course section of the aggregate run
//! summary: per-file line items plus grand totals with the
//! terminal/mcq/code type breakdown. The external generator's real output is
//! out of scope, so the counts derive from the course descriptor's declared
//! expectations.

use serde::Serialize;

use crate::content::{Course, ExerciseCounts};

/// Per-file line item of a course summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Source file name.
    pub file: String,
    /// Original unit count in the source file.
    pub source_units: u32,
    /// Microlessons created from this file.
    pub microlessons: u32,
    /// Exercises created from this file.
    pub exercises: u32,
    /// Prerequisite links created from this file.
    pub prerequisites: u32,
}

/// Aggregate summary of one course's generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Course display name.
    pub course_name: String,
    /// Per-file line items.
    pub files: Vec<FileReport>,
    /// Grand total microlessons.
    pub microlessons: u32,
    /// Grand total exercises.
    pub exercises: u32,
    /// Exercise breakdown by summary type.
    pub exercise_types: ExerciseCounts,
}

impl GenerationSummary {
    /// Builds the expected summary from a course descriptor.
    pub fn from_course(course: &Course) -> Self {
        let files = course
            .sources
            .iter()
            .map(|source| FileReport {
                file: source.file.clone(),
                source_units: source.units,
                microlessons: source.units,
                exercises: source.exercises.total(),
                prerequisites: source.prerequisites,
            })
            .collect();

        Self {
            course_name: course.name.clone(),
            files,
            microlessons: course.expected_microlessons(),
            exercises: course.expected_exercises().total(),
            exercise_types: course.expected_exercises(),
        }
    }

    /// Renders this course's section of the run-summary document.
    pub fn render(&self) -> String {
        let mut out = format!("## {}\n\n", self.course_name);
        for file in &self.files {
            out.push_str(&format!(
                "- {}: units={} microlessons={} exercises={} prerequisites={}\n",
                file.file, file.source_units, file.microlessons, file.exercises, file.prerequisites,
            ));
        }
        out.push_str(&format!(
            "\nTotals: microlessons={} exercises={}\n",
            self.microlessons, self.exercises,
        ));
        out.push_str(&format!(
            "Exercise types: terminal={} mcq={} code={}\n",
            self.exercise_types.terminal, self.exercise_types.mcq, self.exercise_types.code,
        ));
        out
    }
}
