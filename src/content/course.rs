//! Course descriptors and the production counts expected from them.
//!
//! A course descriptor names the source files content is generated from and
//! declares, per file, how many units, exercises and prerequisite links the
//! external generator is expected to produce. The prompt builder annotates
//! its instruction blocks with these counts and the run summary aggregates
//! them.

use serde::{Deserialize, Serialize};

/// Expected exercise counts by summary type.
///
/// The aggregate summary breaks exercises down by the `terminal`, `mcq` and
/// `code` labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCounts {
    #[serde(default)]
    pub mcq: u32,
    #[serde(default)]
    pub terminal: u32,
    #[serde(default)]
    pub code: u32,
}

impl ExerciseCounts {
    /// Creates a new set of exercise counts.
    pub fn new(mcq: u32, terminal: u32, code: u32) -> Self {
        Self {
            mcq,
            terminal,
            code,
        }
    }

    /// Total exercises across all types.
    pub fn total(&self) -> u32 {
        self.mcq + self.terminal + self.code
    }

    /// Adds another set of counts to this one.
    pub fn accumulate(&mut self, other: &ExerciseCounts) {
        self.mcq += other.mcq;
        self.terminal += other.terminal;
        self.code += other.code;
    }
}

/// One source file a course is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileSpec {
    /// Source file name, e.g. `01_intro.md`.
    pub file: String,
    /// Number of source units in the file; one microlesson is expected per
    /// unit.
    pub units: u32,
    /// Expected exercise counts by type.
    #[serde(default)]
    pub exercises: ExerciseCounts,
    /// Expected prerequisite links.
    #[serde(default)]
    pub prerequisites: u32,
}

impl SourceFileSpec {
    /// Creates a new source file descriptor.
    pub fn new(file: impl Into<String>, units: u32) -> Self {
        Self {
            file: file.into(),
            units,
            exercises: ExerciseCounts::default(),
            prerequisites: 0,
        }
    }

    /// Sets the expected exercise counts.
    pub fn with_exercises(mut self, exercises: ExerciseCounts) -> Self {
        self.exercises = exercises;
        self
    }

    /// Sets the expected prerequisite link count.
    pub fn with_prerequisites(mut self, prerequisites: u32) -> Self {
        self.prerequisites = prerequisites;
        self
    }
}

/// A course descriptor.
///
/// Created once per content initiative and immutable afterwards; consumed by
/// the prompt builder and the batch orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier key: zero-padded number plus slug, e.g.
    /// `03-chemical-bonding`. The numeric prefix drives topic routing.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Target implementation language tag.
    pub language: String,
    /// Ordered source files content is generated from.
    #[serde(default)]
    pub sources: Vec<SourceFileSpec>,
}

impl Course {
    /// Creates a course descriptor with no source files.
    pub fn new(key: impl Into<String>, name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            language: language.into(),
            sources: Vec::new(),
        }
    }

    /// Appends a source file descriptor.
    pub fn with_source(mut self, source: SourceFileSpec) -> Self {
        self.sources.push(source);
        self
    }

    /// Total microlessons expected across all source files.
    pub fn expected_microlessons(&self) -> u32 {
        self.sources.iter().map(|s| s.units).sum()
    }

    /// Total expected exercise counts across all source files.
    pub fn expected_exercises(&self) -> ExerciseCounts {
        let mut counts = ExerciseCounts::default();
        for source in &self.sources {
            counts.accumulate(&source.exercises);
        }
        counts
    }

    /// Total expected prerequisite links across all source files.
    pub fn expected_prerequisites(&self) -> u32 {
        self.sources.iter().map(|s| s.prerequisites).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course::new("01-atomic-structure", "Atomic Structure", "python")
            .with_source(
                SourceFileSpec::new("01_intro.md", 5)
                    .with_exercises(ExerciseCounts::new(6, 2, 1))
                    .with_prerequisites(3),
            )
            .with_source(
                SourceFileSpec::new("02_orbitals.md", 5)
                    .with_exercises(ExerciseCounts::new(4, 1, 0))
                    .with_prerequisites(2),
            )
    }

    #[test]
    fn test_expected_microlessons_sums_units() {
        assert_eq!(sample_course().expected_microlessons(), 10);
    }

    #[test]
    fn test_expected_exercises_accumulates_by_type() {
        let counts = sample_course().expected_exercises();
        assert_eq!(counts.mcq, 10);
        assert_eq!(counts.terminal, 3);
        assert_eq!(counts.code, 1);
        assert_eq!(counts.total(), 14);
    }

    #[test]
    fn test_expected_prerequisites_sums() {
        assert_eq!(sample_course().expected_prerequisites(), 5);
    }

    #[test]
    fn test_empty_course_has_zero_expectations() {
        let course = Course::new("05-stoichiometry", "Stoichiometry", "python");
        assert_eq!(course.expected_microlessons(), 0);
        assert_eq!(course.expected_exercises().total(), 0);
    }

    #[test]
    fn test_course_yaml_round_trip() {
        let yaml = r#"
key: 03-chemical-bonding
name: Chemical Bonding
language: python
sources:
  - file: 01_ionic.md
    units: 4
    exercises: { mcq: 5, terminal: 1, code: 0 }
    prerequisites: 2
"#;
        let course: Course = serde_yaml::from_str(yaml).expect("course should deserialize");
        assert_eq!(course.key, "03-chemical-bonding");
        assert_eq!(course.sources.len(), 1);
        assert_eq!(course.sources[0].exercises.mcq, 5);

        let serialized = serde_yaml::to_string(&course).expect("course should serialize");
        let parsed: Course = serde_yaml::from_str(&serialized).expect("round trip");
        assert_eq!(course, parsed);
    }
}
