//! The batch orchestrator and its run accounting.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::BatchError;
use crate::prompts::{build_generation_prompt, GenerationSummary};
use crate::registry::CourseRegistry;
use crate::routing::TopicTable;

/// File name of the human-readable run summary.
const SUMMARY_FILENAME: &str = "run-summary.md";

/// File name of the machine-readable run tally.
const TALLY_FILENAME: &str = "run-summary.json";

/// Status of one course within a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    /// Instruction document written.
    Written,
    /// Course skipped; see the execution's error.
    Skipped,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Written => write!(f, "written"),
            CourseStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// Outcome of processing a single course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseExecution {
    /// Course key.
    pub key: String,
    /// Final status.
    pub status: CourseStatus,
    /// Path of the written instruction document, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Error message if the course was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Running tally of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Courses whose instruction document was written.
    pub courses_processed: u64,
    /// Courses skipped on routing failure.
    pub courses_skipped: u64,
    /// Instruction files written.
    pub files_written: u64,
}

impl BatchStats {
    /// Creates empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a written instruction document.
    fn record_written(&mut self) {
        self.courses_processed += 1;
        self.files_written += 1;
    }

    /// Records a skipped course.
    fn record_skipped(&mut self) {
        self.courses_skipped += 1;
    }
}

/// Report for a finished batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// When the run finished.
    pub generated_at: DateTime<Utc>,
    /// Final tally.
    pub stats: BatchStats,
    /// Per-course outcomes, in processing order.
    pub courses: Vec<CourseExecution>,
}

/// Drives instruction generation for every course in a registry.
pub struct BatchOrchestrator {
    table: TopicTable,
    output_dir: PathBuf,
}

impl BatchOrchestrator {
    /// Creates an orchestrator writing under the given output directory.
    pub fn new(table: TopicTable, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            table,
            output_dir: output_dir.into(),
        }
    }

    /// The output directory instruction documents are written under.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Runs the batch: one instruction document per routable course, then
    /// the aggregate run summary and tally.
    ///
    /// Routing failures are logged with the offending identifier and skip
    /// only that course. I/O failures abort the run.
    pub fn run(&self, registry: &CourseRegistry) -> Result<BatchReport, BatchError> {
        let mut stats = BatchStats::new();
        let mut courses = Vec::new();
        let mut summaries = Vec::new();

        for (key, course) in registry.iter() {
            let topic = match self.table.route(key) {
                Ok(topic) => topic,
                Err(e) => {
                    warn!(course = %key, error = %e, "skipping course with unroutable identifier");
                    stats.record_skipped();
                    courses.push(CourseExecution {
                        key: key.to_string(),
                        status: CourseStatus::Skipped,
                        path: None,
                        error: Some(e.to_string()),
                    });
                    continue;
                }
            };

            let instruction = build_generation_prompt(course);
            let topic_dir = self.output_dir.join(topic);
            fs::create_dir_all(&topic_dir)?;
            let path = topic_dir.join(format!("{key}.md"));
            fs::write(&path, instruction)?;
            info!(course = %key, topic = %topic, "instruction document written");

            stats.record_written();
            summaries.push(GenerationSummary::from_course(course));
            courses.push(CourseExecution {
                key: key.to_string(),
                status: CourseStatus::Written,
                path: Some(path),
                error: None,
            });
        }

        let report = BatchReport {
            generated_at: Utc::now(),
            stats,
            courses,
        };
        self.write_run_summary(&report, &summaries)?;

        info!(
            processed = stats.courses_processed,
            skipped = stats.courses_skipped,
            "batch run finished"
        );
        Ok(report)
    }

    /// Writes the aggregate run summary and the machine-readable tally.
    fn write_run_summary(
        &self,
        report: &BatchReport,
        summaries: &[GenerationSummary],
    ) -> Result<(), BatchError> {
        fs::create_dir_all(&self.output_dir)?;

        let mut document = String::from("# Generation run summary\n\n");
        document.push_str(&format!(
            "Courses processed: {}\nCourses skipped: {}\nFiles written: {}\n\n",
            report.stats.courses_processed,
            report.stats.courses_skipped,
            report.stats.files_written,
        ));
        for summary in summaries {
            document.push_str(&summary.render());
            document.push('\n');
        }
        fs::write(self.output_dir.join(SUMMARY_FILENAME), document)?;

        let tally = serde_json::to_string_pretty(report)?;
        fs::write(self.output_dir.join(TALLY_FILENAME), tally)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Course, ExerciseCounts, SourceFileSpec};

    fn registry() -> CourseRegistry {
        let mut registry = CourseRegistry::new();
        registry
            .insert(
                Course::new("01-atomic-structure", "Atomic Structure", "python")
                    .with_source(
                        SourceFileSpec::new("01_intro.md", 5)
                            .with_exercises(ExerciseCounts::new(6, 2, 1)),
                    )
                    .with_source(SourceFileSpec::new("02_orbitals.md", 5)),
            )
            .unwrap();
        registry
            .insert(Course::new("11-hydrocarbons", "Hydrocarbons", "python"))
            .unwrap();
        registry
            .insert(Course::new("99-unmapped", "Unmapped", "python"))
            .unwrap();
        registry
    }

    #[test]
    fn test_batch_writes_routable_courses_and_skips_unmapped() {
        let dir = tempfile::tempdir().expect("temp dir");
        let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), dir.path());

        let report = orchestrator.run(&registry()).expect("batch should run");

        assert_eq!(report.stats.courses_processed, 2);
        assert_eq!(report.stats.courses_skipped, 1);
        assert_eq!(report.stats.files_written, 2);

        assert!(dir
            .path()
            .join("general-chemistry/01-atomic-structure.md")
            .exists());
        assert!(dir
            .path()
            .join("organic-chemistry/11-hydrocarbons.md")
            .exists());

        // The unmapped course must not appear anywhere in the output set.
        let skipped = report
            .courses
            .iter()
            .find(|c| c.key == "99-unmapped")
            .expect("outcome recorded");
        assert_eq!(skipped.status, CourseStatus::Skipped);
        assert!(skipped.path.is_none());
    }

    #[test]
    fn test_run_summary_totals_declared_units() {
        let dir = tempfile::tempdir().expect("temp dir");
        let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), dir.path());
        orchestrator.run(&registry()).expect("batch should run");

        let summary =
            fs::read_to_string(dir.path().join("run-summary.md")).expect("summary written");
        assert!(summary.contains("Courses processed: 2"));
        assert!(summary.contains("Courses skipped: 1"));
        assert!(summary.contains("Totals: microlessons=10 exercises=9"));
        assert!(summary.contains("Exercise types: terminal=2 mcq=6 code=1"));
    }

    #[test]
    fn test_tally_json_is_machine_readable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), dir.path());
        orchestrator.run(&registry()).expect("batch should run");

        let tally =
            fs::read_to_string(dir.path().join("run-summary.json")).expect("tally written");
        let parsed: serde_json::Value = serde_json::from_str(&tally).expect("valid json");
        assert_eq!(parsed["stats"]["files_written"], 2);
        assert_eq!(parsed["courses"].as_array().map(|c| c.len()), Some(3));
    }

    #[test]
    fn test_empty_registry_still_writes_summary() {
        let dir = tempfile::tempdir().expect("temp dir");
        let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), dir.path());

        let report = orchestrator
            .run(&CourseRegistry::new())
            .expect("empty batch should run");

        assert_eq!(report.stats.courses_processed, 0);
        assert!(dir.path().join("run-summary.md").exists());
    }
}
