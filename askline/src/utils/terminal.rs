//! # Terminal Input Helper
//!
//! Asks the user for input and keeps asking until the answer converts to the
//! requested type and passes every validator of a [`PromptSpec`].
//!
//! One attempt goes like this:
//! 1. print the prompt, if any, and flush it;
//! 2. read one line (hidden when the [`PromptSpec`] asks for it);
//! 3. convert it with [`FromInput`], reporting [`InvalidInput::WrongType`] on failure;
//! 4. run the validators in order, reporting [`InvalidInput::FailedValidation`]
//!    for the first one that fails;
//! 5. return the value once everything passed.
//!
//! Rejections go to the [`PromptSpec`] error callback, or to stderr as
//! `Invalid input` / `Invalid input: <message>` when there is none. Running
//! out of input ends the loop: [`Terminal::try_read`] returns
//! [`AskError::EndOfInput`], [`Terminal::read`] exits the process with status 1.
//!
//! ## Usage
//!
//! ### Example 1: Boolean input
//! ```rust,no_run
//! use askline::utils::Terminal;
//!
//! let likes_rust = Terminal::new().read_bool("Do you like Rust? (y/n)");
//! println!("The input: {}", likes_rust);
//! ```
//!
//! ### Example 2: Validated number with a custom error callback
//! ```rust,no_run
//! use askline::utils::{PromptSpec, Terminal, Validator};
//!
//! let spec = PromptSpec::new()
//!     .prompt("Age")
//!     .validate(Validator::predicate("must be positive", |age: &i64| *age > 0))
//!     .on_invalid(|raw, reason| eprintln!("{:?} rejected: {}", raw, reason));
//!
//! let age: i64 = Terminal::new().read(&spec);
//! ```
//!
//! ### Example 3: Scripted input
//! ```rust
//! use askline::utils::{AskError, PromptSpec, ScriptedReader, Terminal};
//!
//! let mut terminal = Terminal::with_io(ScriptedReader::new(["abc", "30"]), Vec::new());
//! let spec = PromptSpec::new().prompt("Age").on_invalid(|_, _| {});
//!
//! assert_eq!(terminal.try_read::<u32>(&spec).unwrap(), 30);
//! assert!(matches!(terminal.try_read::<u32>(&spec), Err(AskError::EndOfInput)));
//!
//! let (_, shown) = terminal.into_parts();
//! assert_eq!(String::from_utf8(shown).unwrap(), "Age Age Age ");
//! ```

use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::io::{self, Write};

use tracing::{debug, error, trace};

use crate::utils::convert::FromInput;
use crate::utils::reader::{ConsoleReader, LineReader};
use crate::utils::sanitize::{Validator, validate_all};

/// Why an answer was rejected. Passed to the error callback.
///
/// The `Display` output is what the default callback prints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "reason", content = "message", rename_all = "snake_case")
)]
pub enum InvalidInput {
    /// The text could not be converted to the target type.
    #[error("Invalid input")]
    WrongType,
    /// The converted value failed a validator with this message.
    #[error("Invalid input{}", message_suffix(.0))]
    FailedValidation(String),
}

fn message_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

/// Conditions that stop the read loop for good.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("no more input to read")]
    EndOfInput,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Error callback: receives the raw line and the rejection reason.
pub type ErrorReporter = Box<dyn Fn(&str, &InvalidInput)>;

/// Default error callback: prints the reason to stderr.
pub fn report_invalid_input(_raw: &str, reason: &InvalidInput) {
    eprintln!("{}", reason);
}

/// Adds a single space after `prompt` unless it already ends in a space or a newline.
///
/// ```rust
/// use askline::utils::render_prompt;
///
/// assert_eq!(render_prompt("Name"), "Name ");
/// assert_eq!(render_prompt("Name: "), "Name: ");
/// assert_eq!(render_prompt("Name:\n"), "Name:\n");
/// ```
pub fn render_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt.ends_with(' ') || prompt.ends_with('\n') {
        Cow::Borrowed(prompt)
    } else {
        Cow::Owned(format!("{} ", prompt))
    }
}

/// Writes the rendered prompt and flushes so it shows before the read blocks.
pub fn write_prompt<W: Write + ?Sized>(out: &mut W, prompt: &str) -> io::Result<()> {
    out.write_all(render_prompt(prompt).as_bytes())?;
    out.flush()
}

/// What to ask and how to judge the answer.
///
/// Built once with the consuming builder methods, then only read.
pub struct PromptSpec<T> {
    prompt: Option<String>,
    hidden: bool,
    validators: Vec<Validator<T>>,
    on_invalid: Option<ErrorReporter>,
}

impl<T> PromptSpec<T> {
    /// No prompt, visible input, no validators, default error callback.
    pub fn new() -> Self {
        Self {
            prompt: None,
            hidden: false,
            validators: Vec::new(),
            on_invalid: None,
        }
    }

    /// Text printed before every attempt.
    ///
    /// An empty text means no prompt at all: nothing is printed, not even the
    /// single space a non-empty prompt gets appended.
    pub fn prompt(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.prompt = (!text.is_empty()).then_some(text);
        self
    }

    /// Do not echo the typed characters (passwords, tokens).
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Appends a validator. Validators run in the order they were added.
    pub fn validate(mut self, validator: Validator<T>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn with_validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = Validator<T>>,
    {
        self.validators.extend(validators);
        self
    }

    /// Replaces the default error callback.
    pub fn on_invalid<F>(mut self, reporter: F) -> Self
    where
        F: Fn(&str, &InvalidInput) + 'static,
    {
        self.on_invalid = Some(Box::new(reporter));
        self
    }

    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn validators(&self) -> &[Validator<T>] {
        &self.validators
    }

    fn report(&self, raw: &str, reason: &InvalidInput) {
        match &self.on_invalid {
            Some(reporter) => reporter(raw, reason),
            None => report_invalid_input(raw, reason),
        }
    }
}

impl<T> Default for PromptSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for PromptSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptSpec")
            .field("prompt", &self.prompt)
            .field("hidden", &self.hidden)
            .field("validators", &self.validators)
            .field("custom_on_invalid", &self.on_invalid.is_some())
            .finish()
    }
}

/// Prompt-read-validate loop over a [`LineReader`] and a prompt stream.
///
/// [`Terminal::new`] uses the process console; [`Terminal::with_io`] takes
/// any reader and writer.
pub struct Terminal<R = ConsoleReader, W = io::Stdout> {
    reader: R,
    out: W,
}

impl Terminal {
    /// Console input, prompts on stdout.
    pub fn new() -> Self {
        Self::with_io(ConsoleReader::new(), io::stdout())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LineReader, W: Write> Terminal<R, W> {
    pub fn with_io(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.out)
    }

    /// Loops until an answer converts to `T` and passes every validator.
    ///
    /// Conversion and validation failures are reported and retried. Returns
    /// [`AskError::EndOfInput`] once the reader is exhausted and
    /// [`AskError::Io`] if the console fails.
    pub fn try_read<T: FromInput>(&mut self, spec: &PromptSpec<T>) -> Result<T, AskError> {
        let mut attempt: usize = 0;

        loop {
            attempt += 1;

            if let Some(prompt) = spec.prompt_text() {
                trace!(attempt, "writing prompt");
                write_prompt(&mut self.out, prompt)?;
            }

            let Some(raw) = self.reader.read_line(spec.is_hidden())? else {
                debug!(attempt, target_type = T::TYPE_NAME, "input exhausted");
                return Err(AskError::EndOfInput);
            };
            let shown = if spec.is_hidden() { "<hidden>" } else { raw.as_str() };

            let Some(value) = T::from_input(&raw) else {
                debug!(attempt, target_type = T::TYPE_NAME, raw = shown, "conversion failed");
                spec.report(&raw, &InvalidInput::WrongType);
                continue;
            };

            match validate_all(&value, spec.validators()) {
                Ok(()) => {
                    debug!(attempt, target_type = T::TYPE_NAME, "input accepted");
                    return Ok(value);
                }
                Err(rejection) => {
                    debug!(
                        attempt,
                        validator = %rejection.validator,
                        raw = shown,
                        "validation failed"
                    );
                    spec.report(&raw, &InvalidInput::FailedValidation(rejection.message));
                }
            }
        }
    }

    /// Same loop as [`Terminal::try_read`], but a closed input stream or a
    /// console failure terminates the process with exit status 1.
    pub fn read<T: FromInput>(&mut self, spec: &PromptSpec<T>) -> T {
        match self.try_read(spec) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "cannot read from the console, exiting");
                std::process::exit(1)
            }
        }
    }

    /// One line of text, kept verbatim.
    pub fn read_line(&mut self, prompt: &str) -> String {
        self.read(&PromptSpec::new().prompt(prompt))
    }

    /// One line of text without echo.
    pub fn read_secret(&mut self, prompt: &str) -> String {
        self.read(&PromptSpec::new().prompt(prompt).hidden())
    }

    pub fn read_int(&mut self, prompt: &str) -> i64 {
        self.read(&PromptSpec::new().prompt(prompt))
    }

    pub fn read_float(&mut self, prompt: &str) -> f64 {
        self.read(&PromptSpec::new().prompt(prompt))
    }

    /// Yes/no answer, see [`FromInput`] for `bool` for the accepted words.
    pub fn read_bool(&mut self, prompt: &str) -> bool {
        self.read(&PromptSpec::new().prompt(prompt))
    }
}
