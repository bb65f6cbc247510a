pub mod convert;
pub use convert::{FALSY, FromInput, TRUTHY};

pub mod reader;
pub use reader::{ConsoleReader, LineReader, ScriptedReader, StreamReader};

pub mod sanitize;
pub use sanitize::{Rejection, Validator, Verdict, validate_all};

pub mod terminal;
pub use terminal::{
    AskError, ErrorReporter, InvalidInput, PromptSpec, Terminal, render_prompt,
    report_invalid_input, write_prompt,
};
