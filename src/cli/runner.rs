use crate::{
    cli::{Cli, Commands, InputArgs},
    error::Result,
    prompt::{
        dialoguer::DialoguerPrompter,
        scripted::{PromptKind, Reply, ScriptedPrompter},
        PromptProvider, Prompts,
    },
    validation::{MaxLength, MinLength, Pattern, Validator},
};

/// Runs the requested prompt and returns the text to print.
///
/// Answers given with `--answer` replace the terminal with a
/// [`ScriptedPrompter`]; otherwise dialoguer renders the prompt.
pub fn run(cli: &Cli) -> Result<String> {
    if cli.answers.is_empty() {
        log::debug!("Prompting on the terminal with the {} theme", cli.theme);
        execute(&Prompts::new(DialoguerPrompter::new(cli.theme)), &cli.command)
    } else {
        log::debug!("Answering from {} scripted replies", cli.answers.len());
        let prompter = scripted_prompter(&cli.command, &cli.answers)?;
        execute(&Prompts::new(prompter), &cli.command)
    }
}

/// Runs one command against any prompt provider.
pub fn execute<P: PromptProvider>(prompts: &Prompts<P>, command: &Commands) -> Result<String> {
    match command {
        Commands::Input(args) => {
            let validators = InputValidators::from_args(args);
            prompts.input(&args.prompt, &validators.as_refs())
        }
        Commands::YesNo(args) => {
            let yes = prompts.yes_no(&args.question, args.default)?;
            Ok(if yes { "yes" } else { "no" }.to_string())
        }
        Commands::Select(args) => {
            prompts.select(&args.message, &args.options).map(|index| index.to_string())
        }
        Commands::SelectString(args) => {
            let (labels, values): (Vec<&str>, Vec<&str>) =
                args.options.iter().map(|(label, value)| (label.as_str(), value.as_str())).unzip();
            prompts.select_string(&args.message, &labels, &values)
        }
    }
}

fn scripted_prompter(command: &Commands, answers: &[String]) -> Result<ScriptedPrompter> {
    let (kind, labels): (PromptKind, Vec<String>) = match command {
        Commands::Input(_) => (PromptKind::Text, Vec::new()),
        Commands::YesNo(_) => (PromptKind::Confirmation, Vec::new()),
        Commands::Select(args) => (PromptKind::Choice, args.options.clone()),
        Commands::SelectString(args) => {
            (PromptKind::Choice, args.options.iter().map(|(label, _)| label.clone()).collect())
        }
    };

    let replies = answers
        .iter()
        .map(|raw| Reply::parse_for(kind, raw, &labels))
        .collect::<Result<Vec<_>>>()?;
    Ok(ScriptedPrompter::from_replies(replies))
}

/// Validators built from the `input` flags, in flag order.
struct InputValidators {
    min_length: Option<MinLength>,
    max_length: Option<MaxLength>,
    pattern: Option<Pattern>,
}

impl InputValidators {
    fn from_args(args: &InputArgs) -> Self {
        Self {
            min_length: args.min_length.map(MinLength),
            max_length: args.max_length.map(MaxLength),
            pattern: args.pattern.clone().map(Pattern),
        }
    }

    fn as_refs(&self) -> Vec<&dyn Validator> {
        let mut validators: Vec<&dyn Validator> = Vec::new();
        if let Some(v) = &self.min_length {
            validators.push(v);
        }
        if let Some(v) = &self.max_length {
            validators.push(v);
        }
        if let Some(v) = &self.pattern {
            validators.push(v);
        }
        validators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String> {
        run(&Cli::parse_from(args))
    }

    #[test]
    fn input_skips_answers_failing_flags() {
        let out = run_args(&[
            "cliask", "input", "Name", "--min-length", "3", "--answer", "", "--answer", "ab",
            "--answer", "abc",
        ])
        .unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn input_pattern_rejects_until_match() {
        let out = run_args(&[
            "cliask", "input", "Slug", "--pattern", "^[a-z-]+$", "--answer", "My Slug",
            "--answer", "my-slug",
        ])
        .unwrap();
        assert_eq!(out, "my-slug");
    }

    #[test]
    fn input_runs_out_of_answers() {
        let err = run_args(&["cliask", "input", "Name", "--answer", ""]).unwrap_err();
        assert!(matches!(err, Error::IoError(e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn yes_no_accepts_default() {
        let out = run_args(&["cliask", "yes-no", "Go?", "--default", "--answer", ""]).unwrap();
        assert_eq!(out, "yes");
        let out = run_args(&["cliask", "yes-no", "Go?", "--default", "--answer", "no"]).unwrap();
        assert_eq!(out, "no");
    }

    #[test]
    fn select_prints_index() {
        let out = run_args(&["cliask", "select", "Pick", "A", "B", "C", "--answer", "C"]).unwrap();
        assert_eq!(out, "2");
    }

    #[test]
    fn select_matches_numeric_label_before_index() {
        let out =
            run_args(&["cliask", "select", "Port", "8080", "9090", "--answer", "9090"]).unwrap();
        assert_eq!(out, "1");
        let out = run_args(&["cliask", "select", "Port", "8080", "9090", "--answer", "0"]).unwrap();
        assert_eq!(out, "0");
    }

    #[test]
    fn select_string_prints_value() {
        let out = run_args(&[
            "cliask",
            "select-string",
            "Proceed?",
            "--option",
            "Yes please=yes",
            "--option",
            "No thanks=no",
            "--answer",
            "1",
        ])
        .unwrap();
        assert_eq!(out, "no");
    }

    #[test]
    fn interrupt_answer_cancels() {
        let err = run_args(&["cliask", "select", "Pick", "A", "--answer", "^C"]).unwrap_err();
        assert!(err.is_canceled());
    }
}
