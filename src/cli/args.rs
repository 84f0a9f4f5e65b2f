use crate::constants::{exit_codes, verbosity};
use crate::prompt::dialoguer::ThemeKind;
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use regex::Regex;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for cliask.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Visual style of the prompts.
    #[arg(long, value_enum, default_value_t = ThemeKind::Colorful, global = true)]
    pub theme: ThemeKind,

    /// Answer the prompt without a terminal. Repeat to answer re-asked
    /// prompts; `^C` simulates an interrupt.
    #[arg(long = "answer", value_name = "VALUE", global = true)]
    pub answers: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for a line of text.
    Input(InputArgs),
    /// Ask a yes/no question.
    YesNo(YesNoArgs),
    /// Ask to pick one option and print its index.
    Select(SelectArgs),
    /// Ask to pick one labelled option and print its value.
    SelectString(SelectStringArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Prompt shown to the user.
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Minimum answer length in characters.
    #[arg(long = "min-length")]
    pub min_length: Option<usize>,

    /// Maximum answer length in characters.
    #[arg(long = "max-length")]
    pub max_length: Option<usize>,

    /// Regular expression the answer must match.
    #[arg(long, value_parser = parse_pattern)]
    pub pattern: Option<Regex>,
}

#[derive(Args, Debug, Clone)]
pub struct YesNoArgs {
    /// Question shown to the user.
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Pre-select "yes".
    #[arg(long)]
    pub default: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// Message shown above the options.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Options in display order.
    #[arg(value_name = "OPTION", required = true, num_args = 1..)]
    pub options: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SelectStringArgs {
    /// Message shown above the options.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Option as `LABEL=VALUE`; a bare `LABEL` is its own value.
    #[arg(long = "option", value_name = "LABEL[=VALUE]", required = true, value_parser = parse_option)]
    pub options: Vec<(String, String)>,
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    let (label, value) = raw.split_once('=').unwrap_or((raw, raw));
    if label.is_empty() {
        return Err(format!("option '{raw}' has an empty label"));
    }
    Ok((label.to_string(), value.to_string()))
}

fn parse_pattern(raw: &str) -> Result<Regex, String> {
    Regex::new(raw).map_err(|e| e.to_string())
}

/// Parse command line arguments, printing the help when a required input is missing.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingSubcommand
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_input_with_validators() {
        let cli = Cli::parse_from([
            "cliask",
            "input",
            "Project name",
            "--min-length",
            "3",
            "--pattern",
            "^[a-z]+$",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.theme, ThemeKind::Colorful);
        match cli.command {
            Commands::Input(args) => {
                assert_eq!(args.prompt, "Project name");
                assert_eq!(args.min_length, Some(3));
                assert_eq!(args.max_length, None);
                assert_eq!(args.pattern.map(|p| p.as_str().to_string()), Some("^[a-z]+$".into()));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_yes_no_default_and_global_flags() {
        let cli = Cli::parse_from([
            "cliask",
            "--theme",
            "plain",
            "yes-no",
            "Continue?",
            "--default",
            "--answer",
            "",
        ]);
        assert_eq!(cli.theme, ThemeKind::Plain);
        assert_eq!(cli.answers, vec![String::new()]);
        match cli.command {
            Commands::YesNo(args) => {
                assert_eq!(args.question, "Continue?");
                assert!(args.default);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_select_options_in_order() {
        let cli = Cli::parse_from(["cliask", "select", "Pick one", "A", "B", "C"]);
        match cli.command {
            Commands::Select(args) => assert_eq!(args.options, vec!["A", "B", "C"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn select_requires_options() {
        assert!(Cli::try_parse_from(["cliask", "select", "Pick one"]).is_err());
    }

    #[test]
    fn parses_labelled_options() {
        let cli = Cli::parse_from([
            "cliask",
            "select-string",
            "Proceed?",
            "--option",
            "Yes please=yes",
            "--option",
            "No thanks=no",
            "--option",
            "maybe",
        ]);
        match cli.command {
            Commands::SelectString(args) => assert_eq!(
                args.options,
                vec![
                    ("Yes please".to_string(), "yes".to_string()),
                    ("No thanks".to_string(), "no".to_string()),
                    ("maybe".to_string(), "maybe".to_string()),
                ]
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_pattern() {
        assert!(Cli::try_parse_from(["cliask", "input", "Slug", "--pattern", "("]).is_err());
    }

    #[test]
    fn rejects_option_without_label() {
        assert_eq!(parse_option("=x"), Err("option '=x' has an empty label".to_string()));
    }
}
