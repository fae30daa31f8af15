//! Ask a single question from the shell and print the selected answer.
//!
//! ```text
//! $ choose "File does exist, what should be done?" skip overwrite overwrite_all=false abort
//! File does exist, what should be done? [s]kip, [o]verwrite, [a]bort s
//! skip
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use standout_choice::{AnswerSpec, Prompt};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "choose", version, about = "Ask a question with single-keystroke answers")]
struct Cli {
    /// Question to ask
    message: String,

    /// Answers as `name`, `name=true` or `name=false`
    #[arg(required = true, value_parser = parse_answer)]
    answers: Vec<(String, bool)>,

    /// Stop asking after this many invalid responses
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Log indicator resolution and retries to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_answer(raw: &str) -> Result<(String, bool), String> {
    match raw.split_once('=') {
        None => Ok((raw.to_string(), true)),
        Some((name, value)) => {
            let active = value
                .parse::<bool>()
                .map_err(|_| format!("expected true or false after '=', got '{}'", value))?;
            Ok((name.to_string(), active))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Bare names must be valid; mapping entries would be dropped silently.
    let mut specs = Vec::with_capacity(cli.answers.len());
    for (name, active) in cli.answers {
        if !standout_choice::indicator::is_name_token(&name) {
            bail!("'{}' is not a valid answer name", name);
        }
        specs.push(AnswerSpec::from((name, active)));
    }

    let mut prompt = Prompt::new(cli.message);
    if let Some(max) = cli.max_attempts {
        prompt = prompt.max_attempts(max);
    }
    prompt
        .set_answers(specs)
        .context("failed to set answers")?;

    let answer = prompt.ask()?;
    println!("{}", answer);
    Ok(())
}
