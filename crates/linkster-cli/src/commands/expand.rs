//! Expand command implementation
//!
//! Expands a template against a range field (or a JSON request file) and prints
//! one result per line.

use anyhow::Result;
use colored::Colorize;
use linkster_glob::{ExpandRequest, GlobConfig, RangeSpec};
use std::fs;
use std::process::ExitCode;
use tracing::info;

use super::json_output::{error_codes, ExpandOutput, JsonError};

/// Where the expansion input comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandSource<'a> {
    /// Template and range field given on the command line.
    Inline {
        template: Option<&'a str>,
        range: Option<&'a str>,
    },
    /// A JSON request file.
    RequestFile(&'a str),
}

/// Run the expand command
///
/// # Arguments
/// * `source` - Inline template/range or a request file path
/// * `placeholder` - Marker override (takes precedence over the request file)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(source: ExpandSource<'_>, placeholder: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(source, placeholder)
    } else {
        run_human(source, placeholder)
    }
}

fn run_human(source: ExpandSource<'_>, placeholder: Option<&str>) -> Result<ExitCode> {
    let request = load_request(source, placeholder).map_err(|e| anyhow::anyhow!(e.message))?;
    let results = request.run()?;

    for line in &results {
        println!("{}", line);
    }
    eprintln!(
        "{} {} result(s)",
        "Expanded".green().bold(),
        results.len()
    );
    info!(results = results.len(), "expand finished");

    Ok(ExitCode::SUCCESS)
}

fn run_json(source: ExpandSource<'_>, placeholder: Option<&str>) -> Result<ExitCode> {
    let output = expand_to_output(source, placeholder);
    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Runs the expansion and captures the outcome as JSON output.
pub fn expand_to_output(source: ExpandSource<'_>, placeholder: Option<&str>) -> ExpandOutput {
    let request = match load_request(source, placeholder) {
        Ok(request) => request,
        Err(e) => return ExpandOutput::failure(vec![e]),
    };
    match request.run() {
        Ok(results) => ExpandOutput::success(results),
        Err(e) => ExpandOutput::failure(vec![JsonError::from(&e)]),
    }
}

/// Builds the request from the command-line source, applying the placeholder override.
pub fn load_request(
    source: ExpandSource<'_>,
    placeholder: Option<&str>,
) -> Result<ExpandRequest, JsonError> {
    let request = match source {
        ExpandSource::Inline { template, range } => ExpandRequest {
            template: template.map(str::to_string),
            ranges: RangeSpec::Field(range.unwrap_or_default().to_string()),
            config: GlobConfig::default(),
        },
        ExpandSource::RequestFile(path) => read_request_file(path)?,
    };

    Ok(ExpandRequest {
        config: request.config.with_placeholder_override(placeholder),
        ..request
    })
}

fn read_request_file(path: &str) -> Result<ExpandRequest, JsonError> {
    let content = fs::read_to_string(path).map_err(|e| {
        JsonError::new(
            error_codes::FILE_READ,
            format!("Failed to read request file: {}: {}", path, e),
        )
        .with_file(path)
    })?;
    ExpandRequest::from_json(&content).map_err(|e| {
        JsonError::new(
            error_codes::JSON_PARSE,
            format!("Failed to parse request file: {}: {}", path, e),
        )
        .with_file(path)
    })
}
