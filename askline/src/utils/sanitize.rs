//! # Input Sanitization & Validation
//!
//! Validation rules applied to a value *after* it was converted from raw text.
//! A [`Validator`] is a named predicate over `&T`; a list of validators runs in
//! order and short-circuits on the first failure, returning a message that
//! describes what went wrong.
//!
//! ## Features
//! - Custom rules via [`Validator::new`] and [`Validator::predicate`]
//! - Exact matching with [`Validator::matches`]
//! - Multiple-option matching with [`Validator::one_of`]
//! - Inclusive range validation with [`Validator::between`],
//!   [`Validator::at_least`] and [`Validator::at_most`]
//! - Text rules [`Validator::not_empty`] and [`Validator::min_len`]
//!
//! ## Examples
//!
//! ### Range check on a number
//! ```rust,no_run
//! use askline::utils::{PromptSpec, Terminal, Validator};
//!
//! let spec = PromptSpec::new()
//!     .prompt("Enter scan threads (1-16):")
//!     .validate(Validator::between(1, 16));
//!
//! let threads: i64 = Terminal::new().read(&spec);
//! println!("Threads: {}", threads);
//! ```
//!
//! ### Restricted options
//! ```rust,no_run
//! use askline::utils::{PromptSpec, Terminal, Validator};
//!
//! let spec = PromptSpec::new()
//!     .prompt("Choose scan type (quick/deep/custom):")
//!     .validate(Validator::one_of(vec![
//!         "quick".to_string(),
//!         "deep".to_string(),
//!         "custom".to_string(),
//!     ]));
//!
//! let choice: String = Terminal::new().read(&spec);
//! ```
use std::fmt::{self, Debug, Display};

/// Outcome of a single rule: `Ok(())` or the message shown to the user.
pub type Verdict = Result<(), String>;

/// A named validation rule for values of type `T`.
pub struct Validator<T> {
    name: String,
    rule: Box<dyn Fn(&T) -> Verdict>,
}

/// The first rule that rejected a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub validator: String,
    pub message: String,
}

impl<T> Validator<T> {
    /// Builds a rule from a function returning a [`Verdict`].
    ///
    /// ```rust
    /// use askline::utils::Validator;
    ///
    /// let even = Validator::new("even", |n: &i64| {
    ///     if n % 2 == 0 { Ok(()) } else { Err(format!("{} is odd", n)) }
    /// });
    /// assert!(even.check(&4).is_ok());
    /// assert_eq!(even.check(&3), Err("3 is odd".to_string()));
    /// ```
    pub fn new<F>(name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&T) -> Verdict + 'static,
    {
        Self {
            name: name.into(),
            rule: Box::new(rule),
        }
    }

    /// Builds a rule from a boolean predicate. The message doubles as the
    /// rule's name and is reported when the predicate returns `false`.
    pub fn predicate<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        let message = message.into();
        let failure = message.clone();

        Self::new(message, move |value| {
            if predicate(value) {
                Ok(())
            } else {
                Err(failure.clone())
            }
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the rule against `value`.
    pub fn check(&self, value: &T) -> Verdict {
        (self.rule)(value)
    }
}

impl<T> Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> Validator<T>
where
    T: PartialEq + Display + 'static,
{
    /// Ensures the value equals `expected`.
    pub fn matches(expected: T) -> Self {
        let name = format!("matches {}", expected);

        Self::new(name, move |value| {
            if *value == expected {
                Ok(())
            } else {
                Err(format!("The value doesn't match with {}", expected))
            }
        })
    }

    /// Ensures the value is one of `options`.
    pub fn one_of(options: Vec<T>) -> Self {
        let listed = options
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Self::new(format!("one of {}", listed), move |value| {
            if options.contains(value) {
                Ok(())
            } else {
                Err(format!(
                    "The value doesn't match with the options: {}",
                    listed
                ))
            }
        })
    }
}

impl<T> Validator<T>
where
    T: PartialOrd + Display + 'static,
{
    /// Ensures `min <= value <= max`.
    pub fn between(min: T, max: T) -> Self {
        let name = format!("between {} and {}", min, max);

        Self::new(name, move |value| {
            if *value >= min && *value <= max {
                Ok(())
            } else {
                Err(format!("The value is not between {} and {}", min, max))
            }
        })
    }

    /// Ensures `value >= min`.
    pub fn at_least(min: T) -> Self {
        Self::new(format!("at least {}", min), move |value| {
            if *value >= min {
                Ok(())
            } else {
                Err(format!("The value must be at least {}", min))
            }
        })
    }

    /// Ensures `value <= max`.
    pub fn at_most(max: T) -> Self {
        Self::new(format!("at most {}", max), move |value| {
            if *value <= max {
                Ok(())
            } else {
                Err(format!("The value must be at most {}", max))
            }
        })
    }
}

impl Validator<String> {
    /// Rejects blank text (empty or whitespace only).
    pub fn not_empty() -> Self {
        Self::predicate("The value can't be empty", |value: &String| {
            !value.trim().is_empty()
        })
    }

    /// Requires at least `min` characters.
    pub fn min_len(min: usize) -> Self {
        Self::new(format!("at least {} characters", min), move |value| {
            let len = value.chars().count();
            if len >= min {
                Ok(())
            } else {
                Err(format!(
                    "The value must be at least {} characters long, got {}",
                    min, len
                ))
            }
        })
    }
}

/// Executes all `validators` against `value`.
///
/// - Runs the rules in the order given.
/// - Stops at the first rule that fails and returns its [`Rejection`]; the
///   remaining rules are not evaluated.
/// - Returns `Ok(())` if every rule passes or `validators` is empty.
pub fn validate_all<T>(value: &T, validators: &[Validator<T>]) -> Result<(), Rejection> {
    for validator in validators {
        if let Err(message) = validator.check(value) {
            return Err(Rejection {
                validator: validator.name.clone(),
                message,
            });
        }
    }
    Ok(())
}
