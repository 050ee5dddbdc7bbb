//! CLI command definitions for course-forge.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::content::Module;
use crate::pipeline::BatchOrchestrator;
use crate::registry::CourseRegistry;
use crate::routing::TopicTable;

/// Default output directory for instruction documents.
const DEFAULT_OUTPUT_DIR: &str = "./instructions";

/// Adaptive-learning content generator driver.
#[derive(Parser)]
#[command(name = "course-forge")]
#[command(about = "Author, validate and seed adaptive-learning course content")]
#[command(version)]
#[command(
    long_about = "course-forge renders one generation instruction document per registered course, routed into topic directories, plus an aggregate run summary.\n\nExample usage:\n  course-forge generate --registry courses.yaml --output ./instructions"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Render instruction documents for every course in a registry file.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Validate persisted content records against the schema.
    Validate(ValidateArgs),

    /// Resolve a course identifier to its topic directory.
    Route(RouteArgs),
}

/// Arguments for `course-forge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the course registry YAML file.
    #[arg(short, long)]
    pub registry: PathBuf,

    /// Output directory for instruction documents.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Arguments for `course-forge validate`.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to a YAML file containing a list of modules.
    pub file: PathBuf,
}

/// Arguments for `course-forge route`.
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Course identifier, e.g. 03-chemical-bonding.
    pub identifier: String,
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses CLI arguments and runs the selected command.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Runs the selected command with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Validate(args) => validate(args),
        Commands::Route(args) => route(args),
    }
}

/// Handles `course-forge generate`.
fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let registry = CourseRegistry::from_yaml_file(&args.registry)?;
    info!(courses = registry.len(), "registry loaded");

    let orchestrator = BatchOrchestrator::new(TopicTable::curriculum(), &args.output);
    let report = orchestrator.run(&registry)?;

    println!(
        "Processed {} courses ({} skipped), wrote {} instruction files to {}",
        report.stats.courses_processed,
        report.stats.courses_skipped,
        report.stats.files_written,
        args.output.display()
    );
    Ok(())
}

/// Handles `course-forge validate`.
///
/// Records are checked one at a time so a single malformed record reports
/// its own error instead of hiding the rest of the file.
fn validate(args: ValidateArgs) -> anyhow::Result<()> {
    let contents = fs::read_to_string(&args.file)?;
    let records: Vec<serde_yaml::Value> = serde_yaml::from_str(&contents)?;

    let mut failures = 0usize;
    for (index, record) in records.into_iter().enumerate() {
        match serde_yaml::from_value::<Module>(record) {
            Ok(module) => {
                info!(
                    module = module.name(),
                    lessons = module.lessons().len(),
                    "module passed validation"
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!("record {index}: {e}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} record(s) failed schema validation");
    }
    println!("All records passed schema validation");
    Ok(())
}

/// Handles `course-forge route`.
fn route(args: RouteArgs) -> anyhow::Result<()> {
    let table = TopicTable::curriculum();
    let topic = table.route(&args.identifier)?;
    println!("{topic}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_with_alias() {
        let cli = Cli::try_parse_from([
            "course-forge",
            "gen",
            "--registry",
            "courses.yaml",
            "--output",
            "./out",
        ])
        .expect("alias should parse");
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.registry, PathBuf::from("courses.yaml"));
                assert_eq!(args.output, PathBuf::from("./out"));
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_default_output_dir() {
        let cli = Cli::try_parse_from(["course-forge", "generate", "--registry", "courses.yaml"])
            .expect("should parse");
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT_DIR));
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_route() {
        let cli = Cli::try_parse_from(["course-forge", "route", "03-chemical-bonding"])
            .expect("should parse");
        match cli.command {
            Commands::Route(args) => assert_eq!(args.identifier, "03-chemical-bonding"),
            _ => panic!("expected route command"),
        }
    }

    #[test]
    fn test_cli_default_log_level() {
        let cli = Cli::try_parse_from(["course-forge", "route", "01-a"]).expect("should parse");
        assert_eq!(cli.log_level, "info");
    }
}
