//! Plan command implementation
//!
//! Compiles both sides of a plan file, checks that they line up and prints the
//! resulting link table.

use anyhow::{Context, Result};
use colored::Colorize;
use linkster_glob::{LinkPlan, PlanFile};
use std::fs;
use std::process::ExitCode;
use tracing::info;

use super::json_output::{error_codes, JsonError, LinkRecord, PlanOutput};

/// Run the plan command
///
/// # Arguments
/// * `plan_path` - Path to the plan JSON file
/// * `placeholder` - Marker override (takes precedence over the file's config)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the plan is linkable, 1 otherwise
pub fn run(plan_path: &str, placeholder: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(plan_path, placeholder)
    } else {
        run_human(plan_path, placeholder)
    }
}

fn run_human(plan_path: &str, placeholder: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Planning:".cyan().bold(), plan_path);

    let content = fs::read_to_string(plan_path)
        .with_context(|| format!("Failed to read plan file: {}", plan_path))?;
    let file = parse_plan(&content, placeholder)
        .with_context(|| format!("Failed to parse plan file: {}", plan_path))?;

    let plan = match file.build() {
        Ok(plan) => plan,
        Err(e) => {
            println!("{} Linking not enabled", "FAILED".red().bold());
            println!("  {} [{}] {}", "✗".red(), e.code().dimmed(), e);
            return Ok(ExitCode::from(1));
        }
    };

    print_plan(&plan);
    Ok(ExitCode::SUCCESS)
}

fn run_json(plan_path: &str, placeholder: Option<&str>) -> Result<ExitCode> {
    let output = plan_to_output(plan_path, placeholder);
    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Builds the plan and captures the outcome as JSON output.
pub fn plan_to_output(plan_path: &str, placeholder: Option<&str>) -> PlanOutput {
    let content = match fs::read_to_string(plan_path) {
        Ok(content) => content,
        Err(e) => {
            return PlanOutput::failure(vec![JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read plan file: {}: {}", plan_path, e),
            )
            .with_file(plan_path)])
        }
    };
    let file = match parse_plan(&content, placeholder) {
        Ok(file) => file,
        Err(e) => {
            return PlanOutput::failure(vec![JsonError::new(
                error_codes::JSON_PARSE,
                format!("Failed to parse plan file: {}: {}", plan_path, e),
            )
            .with_file(plan_path)])
        }
    };

    match file.build() {
        Ok(plan) => PlanOutput {
            success: true,
            summary: Some(plan.summary()),
            links: plan
                .pairs
                .iter()
                .enumerate()
                .map(|(i, pair)| LinkRecord::new(i, pair))
                .collect(),
            errors: Vec::new(),
        },
        Err(e) => PlanOutput::failure(vec![JsonError::from(&e)]),
    }
}

fn parse_plan(content: &str, placeholder: Option<&str>) -> Result<PlanFile, serde_json::Error> {
    let file = PlanFile::from_json(content)?;
    Ok(PlanFile {
        config: file.config.with_placeholder_override(placeholder),
        ..file
    })
}

fn print_plan(plan: &LinkPlan) {
    for (i, pair) in plan.pairs.iter().enumerate() {
        println!(
            "  {:>4}  {}  {}",
            i.to_string().dimmed(),
            pair,
            pair.link_name().dimmed()
        );
    }

    let summary = plan.summary();
    info!(links = summary.links, "plan built");
    println!(
        "\n{} {} link(s) from {} source ord(s) to {} target ord(s)",
        "SUCCESS".green().bold(),
        summary.links,
        summary.source_ords,
        summary.target_ords
    );
}
