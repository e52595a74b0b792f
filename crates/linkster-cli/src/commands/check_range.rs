//! Check-range command implementation
//!
//! Validates every token of a range field without expanding anything.

use anyhow::Result;
use colored::Colorize;
use linkster_glob::{resolve_range, split};
use std::process::ExitCode;

use super::json_output::{CheckRangeOutput, TokenReport};

/// Run the check-range command
///
/// # Arguments
/// * `range` - Range field, e.g. `"1..2,A:a..f"`
/// * `separator` - Token separator
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every token is valid, 1 otherwise
pub fn run(range: &str, separator: char, json_output: bool) -> Result<ExitCode> {
    let output = check(range, separator);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&output);
    }

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Resolves each token of the field on its own.
///
/// Unlike expansion, a bad token does not stop the check, so every problem in
/// the field is reported at once.
pub fn check(range: &str, separator: char) -> CheckRangeOutput {
    let tokens: Vec<TokenReport> = split(Some(range), separator, false)
        .unwrap_or_default()
        .into_iter()
        .map(|token| TokenReport::from_result(token, &resolve_range(token)))
        .collect();

    CheckRangeOutput {
        success: !tokens.is_empty() && tokens.iter().all(|t| t.error.is_none()),
        tokens,
    }
}

fn print_human(output: &CheckRangeOutput) {
    if output.tokens.is_empty() {
        println!("{} no range tokens given", "FAILED".red().bold());
        return;
    }

    for token in &output.tokens {
        match &token.error {
            None => println!(
                "  {} {} {} ({} value(s))",
                "✓".green(),
                token.token,
                token.mode.as_deref().unwrap_or_default().dimmed(),
                token.size.unwrap_or_default()
            ),
            Some(e) => println!(
                "  {} {} [{}] {}",
                "✗".red(),
                token.token,
                e.code.dimmed(),
                e.message
            ),
        }
    }

    if output.success {
        println!("{} {} token(s) valid", "SUCCESS".green().bold(), output.tokens.len());
    } else {
        println!("{} range field has errors", "FAILED".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_valid_field() {
        let output = check("1..2,,A:a..f,-3..3", ',');
        assert!(output.success);
        let sizes: Vec<Option<u64>> = output.tokens.iter().map(|t| t.size).collect();
        assert_eq!(sizes, vec![Some(2), Some(6), Some(7)]);
        assert_eq!(output.tokens[1].mode.as_deref(), Some("alpha"));
    }

    #[test]
    fn test_check_reports_every_bad_token() {
        let output = check("1..x,1..2,A:ab..c", ',');
        assert!(!output.success);
        let codes: Vec<Option<&str>> = output
            .tokens
            .iter()
            .map(|t| t.error.as_ref().map(|e| e.code.as_str()))
            .collect();
        assert_eq!(codes, vec![Some("G001"), None, Some("G002")]);
    }

    #[test]
    fn test_check_empty_field_fails() {
        let output = check("", ',');
        assert!(!output.success);
        assert!(output.tokens.is_empty());
    }

    #[test]
    fn test_run_exit_code() {
        assert_eq!(run("1..2", ',', true).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run("1..", ',', false).unwrap(), ExitCode::from(1));
    }
}
