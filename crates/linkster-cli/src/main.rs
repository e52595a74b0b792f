//! Linkster CLI - Command-line interface for template expansion
//!
//! This binary expands placeholder templates against numeric and alphabetic
//! ranges, and pairs two expanded sides into a link plan.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use linkster_cli::commands;
use linkster_cli::commands::expand::ExpandSource;
use linkster_cli::logging;

/// Linkster - Batch template expansion for component links
#[derive(Parser)]
#[command(name = "linkster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a template against one or more ranges
    Expand {
        /// Template containing placeholder markers, e.g. "slot:/Building{[]}/Floor{[]}"
        #[arg(short, long, conflicts_with = "request")]
        template: Option<String>,

        /// Comma-separated range tokens, e.g. "1..2,A:a..f"
        #[arg(short, long, conflicts_with = "request")]
        range: Option<String>,

        /// JSON request file with template, ranges and optional placeholder
        #[arg(long)]
        request: Option<String>,

        /// Placeholder marker to substitute (default: "{[]}")
        #[arg(short, long)]
        placeholder: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check every token of a range field without expanding
    CheckRange {
        /// Range field, e.g. "1..2,1..10,A:a..f"
        range: String,

        /// Token separator
        #[arg(short, long, default_value_t = ',')]
        separator: char,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compile both sides of a plan file and pair them into links
    Plan {
        /// Path to the plan JSON file
        plan: String,

        /// Placeholder marker to substitute (overrides the file's config)
        #[arg(short, long)]
        placeholder: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Expand {
            template,
            range,
            request,
            placeholder,
            json,
        } => {
            let source = match request.as_deref() {
                Some(path) => ExpandSource::RequestFile(path),
                None => ExpandSource::Inline {
                    template: template.as_deref(),
                    range: range.as_deref(),
                },
            };
            commands::expand::run(source, placeholder.as_deref(), json)
        }
        Commands::CheckRange {
            range,
            separator,
            json,
        } => commands::check_range::run(&range, separator, json),
        Commands::Plan {
            plan,
            placeholder,
            json,
        } => commands::plan::run(&plan, placeholder.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_expand() {
        let cli = Cli::try_parse_from([
            "linkster",
            "expand",
            "--template",
            "Floor{[]}",
            "--range",
            "1..3",
        ])
        .unwrap();
        match cli.command {
            Commands::Expand {
                template,
                range,
                request,
                placeholder,
                json,
            } => {
                assert_eq!(template.as_deref(), Some("Floor{[]}"));
                assert_eq!(range.as_deref(), Some("1..3"));
                assert!(request.is_none());
                assert!(placeholder.is_none());
                assert!(!json);
            }
            _ => panic!("expected expand command"),
        }
    }

    #[test]
    fn test_cli_expand_request_conflicts_with_template() {
        let result = Cli::try_parse_from([
            "linkster",
            "expand",
            "--request",
            "req.json",
            "--template",
            "Floor{[]}",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_check_range_separator() {
        let cli =
            Cli::try_parse_from(["linkster", "check-range", "1..2;A:a..c", "-s", ";"]).unwrap();
        match cli.command {
            Commands::CheckRange {
                range,
                separator,
                json,
            } => {
                assert_eq!(range, "1..2;A:a..c");
                assert_eq!(separator, ';');
                assert!(!json);
            }
            _ => panic!("expected check-range command"),
        }
    }

    #[test]
    fn test_cli_parses_plan_with_verbosity() {
        let cli = Cli::try_parse_from(["linkster", "plan", "links.json", "--json", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Plan {
                plan,
                placeholder,
                json,
            } => {
                assert_eq!(plan, "links.json");
                assert!(placeholder.is_none());
                assert!(json);
            }
            _ => panic!("expected plan command"),
        }
    }
}
