use std::fmt::Display;
use std::io::{self, IsTerminal};

use anyhow::{Result, anyhow, bail};
use askline::utils::{ConsoleReader, FromInput, PromptSpec, Terminal, Validator};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Ask one question on the console and print the accepted answer.
///
/// The prompt and error messages go to stderr so the answer can be captured:
/// `port=$(askline --kind int --min 1 --max 65535 "Port:")`
#[derive(Debug, Parser)]
#[command(name = "askline", version)]
struct Cli {
    /// Text shown before each attempt
    prompt: Option<String>,

    /// Type the answer must convert to
    #[arg(long, value_enum, default_value_t = Kind::Line, env = "ASKLINE_KIND")]
    kind: Kind,

    /// Do not echo the typed characters
    #[arg(long)]
    hidden: bool,

    /// Smallest accepted number (int and float)
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,

    /// Largest accepted number (int and float)
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,

    /// Comma separated list of accepted answers (line)
    #[arg(long, value_delimiter = ',')]
    one_of: Vec<String>,

    /// Reject blank answers (line)
    #[arg(long)]
    non_empty: bool,

    /// Log filter, e.g. `debug` or `askline=trace`
    #[arg(long, env = "ASKLINE_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Line,
    Int,
    Float,
    Bool,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Parses a `--min`/`--max` bound as the answer's type.
fn bound<T: FromInput>(flag: &str, raw: &str) -> Result<T> {
    T::from_input(raw)
        .ok_or_else(|| anyhow!("{} expects a {} value, got {:?}", flag, T::TYPE_NAME, raw))
}

fn range_validators<T>(cli: &Cli) -> Result<Vec<Validator<T>>>
where
    T: FromInput + PartialOrd + Display + 'static,
{
    let min = cli.min.as_deref().map(|raw| bound::<T>("--min", raw)).transpose()?;
    let max = cli.max.as_deref().map(|raw| bound::<T>("--max", raw)).transpose()?;

    Ok(match (min, max) {
        (Some(min), Some(max)) if min > max => {
            bail!("--min {} is greater than --max {}", min, max)
        }
        (Some(min), Some(max)) => vec![Validator::between(min, max)],
        (Some(min), None) => vec![Validator::at_least(min)],
        (None, Some(max)) => vec![Validator::at_most(max)],
        (None, None) => Vec::new(),
    })
}

fn text_validators(cli: &Cli) -> Vec<Validator<String>> {
    let mut validators = Vec::new();

    if cli.non_empty {
        validators.push(Validator::not_empty());
    }
    if !cli.one_of.is_empty() {
        validators.push(Validator::one_of(cli.one_of.clone()));
    }
    validators
}

fn spec_for<T>(cli: &Cli, validators: Vec<Validator<T>>) -> PromptSpec<T> {
    let mut spec = PromptSpec::new().with_validators(validators);

    if let Some(prompt) = &cli.prompt {
        spec = spec.prompt(prompt.as_str());
    }
    if cli.hidden {
        spec = spec.hidden();
    }
    spec
}

/// Rejects flags that make no sense for the chosen kind.
fn check_flags(cli: &Cli) -> Result<()> {
    let numeric = matches!(cli.kind, Kind::Int | Kind::Float);

    if !numeric && (cli.min.is_some() || cli.max.is_some()) {
        bail!("--min/--max only apply to --kind int or --kind float");
    }
    if cli.kind != Kind::Line && (cli.non_empty || !cli.one_of.is_empty()) {
        bail!("--non-empty/--one-of only apply to --kind line");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    check_flags(&cli)?;

    // Answer on stdout, everything else on stderr.
    let mut terminal = Terminal::with_io(ConsoleReader::new(), io::stderr());

    let answer = match cli.kind {
        Kind::Line => terminal.read(&spec_for(&cli, text_validators(&cli))),
        Kind::Int => {
            let value: i64 = terminal.read(&spec_for(&cli, range_validators(&cli)?));
            value.to_string()
        }
        Kind::Float => {
            let value: f64 = terminal.read(&spec_for(&cli, range_validators(&cli)?));
            value.to_string()
        }
        Kind::Bool => {
            let value: bool = terminal.read(&spec_for(&cli, Vec::new()));
            value.to_string()
        }
    };

    tracing::debug!(kind = ?cli.kind, "answer accepted");
    println!("{}", answer);
    Ok(())
}
