//! Instruction document builder.
//!
//! Renders the natural-language instruction handed to the external
//! content-generation process. Pure templating: the only control flow is the
//! per-source-file loop, so re-running on an unchanged course descriptor is
//! byte-identical. An empty source-file list still yields a valid
//! (degenerate) document.

use crate::content::Course;

/// Content requirements section shared by every instruction document.
const CONTENT_REQUIREMENTS: &str = r#"## CONTENT REQUIREMENTS

Group the microlessons into named modules. Each microlesson must carry:
- title (unique within its module)
- content body in markdown
- sequence_order: positive integer, unique within its module
- estimated_minutes: positive integer
- difficulty: easy, medium or hard
- key_concepts: list of concept names (may be empty)
- prerequisite_ids: identifiers of earlier microlessons only, never the
  lesson's own identifier

Each exercise belongs to one microlesson, carries sequence_order,
require_pass and difficulty, and is exactly one of:
- mcq: question, options (at least 2), zero-based correct_answer index into
  options, explanation
- short_answer: question, accepted answers as a single string with variants
  separated by "|", explanation, hints
- terminal: command, description, validation rule, timeout_sec, hints"#;

/// Builds the generation instruction document for one course.
pub fn build_generation_prompt(course: &Course) -> String {
    let mut file_blocks = String::new();
    let mut summary_lines = String::new();

    if course.sources.is_empty() {
        file_blocks.push_str("No source files are registered for this course.\n\n");
    }
    for (index, source) in course.sources.iter().enumerate() {
        let counts = &source.exercises;
        file_blocks.push_str(&format!(
            "### {number}. {file}\n\
             - Source units: {units}\n\
             - Microlessons to produce: {units} (one per source unit)\n\
             - Exercises to produce: {total} ({mcq} mcq, {terminal} terminal, {code} code)\n\
             - Prerequisite links to produce: {prerequisites}\n\n",
            number = index + 1,
            file = source.file,
            units = source.units,
            total = counts.total(),
            mcq = counts.mcq,
            terminal = counts.terminal,
            code = counts.code,
            prerequisites = source.prerequisites,
        ));
        summary_lines.push_str(&format!(
            "- {}: units={} microlessons=<created> exercises=<created> prerequisites=<linked>\n",
            source.file, source.units,
        ));
    }

    format!(
        "Generate microlessons and graded exercises for the course \"{name}\".\n\
         Target implementation language: {language}.\n\n\
         ## SOURCE FILES\n\n\
         {file_blocks}\
         {requirements}\n\n\
         ## SUMMARY TEMPLATE\n\n\
         Close your output with this summary, every count filled in:\n\n\
         Course: {name}\n\
         {summary_lines}\
         Totals: microlessons=<total> exercises=<total>\n\
         Exercise types: terminal=<count> mcq=<count> code=<count>\n",
        name = course.name,
        language = course.language,
        file_blocks = file_blocks,
        requirements = CONTENT_REQUIREMENTS,
        summary_lines = summary_lines,
    )
}
