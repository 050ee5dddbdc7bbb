//! End-to-end tests for the generation batch.
//!
//! Drives the orchestrator against a real registry and asserts on the files
//! it writes, covering the full flow: registry → routing → prompt building →
//! instruction files → run summary.

use std::fs;

use course_forge::content::{Course, ExerciseCounts, SourceFileSpec};
use course_forge::matcher;
use course_forge::pipeline::{BatchOrchestrator, CourseStatus};
use course_forge::prompts::build_generation_prompt;
use course_forge::registry::CourseRegistry;
use course_forge::routing::TopicTable;

fn two_file_course() -> Course {
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

fn test_registry() -> CourseRegistry {
    let mut registry = CourseRegistry::new();
    registry.insert(two_file_course()).unwrap();
    registry
        .insert(
            Course::new("11-hydrocarbons", "Hydrocarbons", "python")
                .with_source(SourceFileSpec::new("01_alkanes.md", 3)),
        )
        .unwrap();
    registry
        .insert(Course::new("99-unmapped", "Unmapped Course", "python"))
        .unwrap();
    registry
}

#[test]
fn batch_run_writes_instructions_and_summary() {
    let dir = tempfile::tempdir().expect("temp dir");
    let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), dir.path());

    let report = orchestrator.run(&test_registry()).expect("batch should run");

    assert_eq!(report.stats.courses_processed, 2);
    assert_eq!(report.stats.courses_skipped, 1);
    assert_eq!(report.stats.files_written, 2);

    let atomic = dir.path().join("general-chemistry/01-atomic-structure.md");
    let hydro = dir.path().join("organic-chemistry/11-hydrocarbons.md");
    assert!(atomic.exists());
    assert!(hydro.exists());

    let instruction = fs::read_to_string(&atomic).expect("instruction readable");
    assert!(instruction.contains("course \"Atomic Structure\""));
    assert!(instruction.contains("### 1. 01_intro.md"));
    assert!(instruction.contains("### 2. 02_orbitals.md"));
}

#[test]
fn unmapped_course_is_skipped_without_output_while_others_proceed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), dir.path());

    let report = orchestrator.run(&test_registry()).expect("batch should run");

    let skipped = report
        .courses
        .iter()
        .find(|c| c.key == "99-unmapped")
        .expect("skip recorded");
    assert_eq!(skipped.status, CourseStatus::Skipped);
    assert!(skipped.error.as_deref().unwrap_or("").contains("99"));

    // No file anywhere in the output tree mentions the unmapped course.
    let mut stack = vec![dir.path().to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current).expect("readable dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                stack.push(path);
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("99-unmapped"))
            {
                panic!("unmapped course produced output at {}", path.display());
            }
        }
    }

    // The rest of the batch still produced output.
    assert_eq!(report.stats.files_written, 2);
}

#[test]
fn summary_grand_total_counts_declared_units() {
    let dir = tempfile::tempdir().expect("temp dir");
    let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), dir.path());
    orchestrator.run(&test_registry()).expect("batch should run");

    let summary = fs::read_to_string(dir.path().join("run-summary.md")).expect("summary written");

    // Two source files, each declaring 5 expected units.
    assert!(summary.contains("## Atomic Structure"));
    assert!(summary.contains("Totals: microlessons=10 exercises=14"));
    assert!(summary.contains("Exercise types: terminal=3 mcq=10 code=1"));
}

#[test]
fn instruction_rendering_is_idempotent() {
    let course = two_file_course();
    assert_eq!(
        build_generation_prompt(&course),
        build_generation_prompt(&course)
    );
}

#[test]
fn short_answer_matching_end_to_end() {
    assert!(matcher::matches_raw("true", "true"));
    assert!(matcher::matches_raw("true", "True"));
    assert!(!matcher::matches_raw("true", "false"));

    // Subscript variants are interchangeable.
    assert!(matcher::matches_raw("CH2O|CH₂O", "CH₂O"));
    assert!(matcher::matches_raw("CH2O|CH₂O", "ch2o"));
}
