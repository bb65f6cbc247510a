//! # askline
//!
//! A small Rust library for interactive CLI applications that need typed,
//! validated answers from the console: prompt, read a line (optionally
//! hidden), convert it, validate it, and ask again until it is right.
//!
//! ## Features
//!
//! - **Typed conversion** - `String`, `bool`, every integer and float type, or
//!   your own types through [`utils::FromInput`]
//! - **Composable validators** - ordered, short-circuiting rules with readable
//!   messages ([`utils::Validator`])
//! - **Hidden input** - password entry without echo (`hidden-input` feature, on by default)
//! - **Pluggable reporting** - replace the default `Invalid input: ...` message
//!   with your own callback
//! - **Swappable input** - any [`utils::LineReader`], so tests never need a real console
//!
//! ## Feature flags
//!
//! - `hidden-input` (default) - no-echo reads through `rpassword`. Without it,
//!   hidden reads fall back to plain stdin reads and log a warning.
//! - `serde` - `Serialize`/`Deserialize` for [`utils::InvalidInput`].
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! askline = "0.1"
//! askline = { version = "0.1", default-features = false }
//! ```
//!
//! ## Usage Examples
//!
//! ### Common types
//!
//! ```rust,no_run
//! use askline::utils::Terminal;
//!
//! let mut terminal = Terminal::new();
//!
//! let name = terminal.read_line("Name:");
//! let age = terminal.read_int("Age:");
//! let ratio = terminal.read_float("Ratio:");
//! let proceed = terminal.read_bool("Continue? (y/n)");
//! let password = terminal.read_secret("Password:");
//! ```
//!
//! ### Validation rules
//!
//! ```rust,no_run
//! use askline::utils::{PromptSpec, Terminal, Validator};
//!
//! let spec = PromptSpec::new()
//!     .prompt("Choose scan type (quick/deep/custom):")
//!     .validate(Validator::not_empty())
//!     .validate(Validator::one_of(vec![
//!         "quick".to_string(),
//!         "deep".to_string(),
//!         "custom".to_string(),
//!     ]));
//!
//! let choice: String = Terminal::new().read(&spec);
//! ```
//!
//! ### Handling end of input yourself
//!
//! [`utils::Terminal::read`] exits the process with status 1 when stdin is
//! closed. Use [`utils::Terminal::try_read`] to decide for yourself:
//!
//! ```rust,no_run
//! use askline::utils::{AskError, PromptSpec, Terminal, Validator};
//!
//! let spec = PromptSpec::new()
//!     .prompt("Port:")
//!     .validate(Validator::between(1u16, 65535));
//!
//! match Terminal::new().try_read(&spec) {
//!     Ok(port) => println!("Listening on {}", port),
//!     Err(AskError::EndOfInput) => println!("No port given, using 8080"),
//!     Err(e) => eprintln!("Console error: {}", e),
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`utils::convert`** - raw text to typed value
//! - **`utils::sanitize`** - validators over typed values
//! - **`utils::reader`** - line sources (console, buffered streams, scripts)
//! - **`utils::terminal`** - prompt rendering and the retry loop
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (`debug` per attempt, `error` before
//! exiting) and never installs a subscriber. Raw input is left out of the
//! events when the prompt is hidden.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod utils;
