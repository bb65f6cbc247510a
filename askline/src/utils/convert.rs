//! # Input Conversion
//!
//! Turns the raw text of a console line into a typed value. Every target type
//! implements [`FromInput`], which either produces the whole value or nothing:
//! there is no partial conversion and no error detail, since the caller only
//! needs to know whether to re-prompt.
//!
//! Supported out of the box:
//! - `String` (identity, the line is kept verbatim)
//! - `bool` (see [`FromInput`] for `bool` below)
//! - Signed integers: `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
//! - Unsigned integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
//! - Floating point: `f32`, `f64`
//!
//! Numbers and booleans ignore surrounding whitespace, so `" 42 "` reads as `42`.
//!
//! ## Example
//! ```rust
//! use askline::utils::FromInput;
//!
//! assert_eq!(u8::from_input("42"), Some(42));
//! assert_eq!(u8::from_input("256"), None);
//! assert_eq!(bool::from_input("Yes"), Some(true));
//! assert_eq!(String::from_input("  kept as is "), Some("  kept as is ".to_string()));
//! ```

/// Capability of a type to build itself from one line of raw input.
///
/// Implement this for your own types to read them with
/// [`crate::utils::Terminal::read`].
///
/// ```rust
/// use askline::utils::FromInput;
///
/// struct Port(u16);
///
/// impl FromInput for Port {
///     const TYPE_NAME: &'static str = "port";
///
///     fn from_input(raw: &str) -> Option<Self> {
///         u16::from_input(raw).filter(|p| *p != 0).map(Port)
///     }
/// }
///
/// assert!(Port::from_input("0").is_none());
/// assert_eq!(Port::from_input("8080").map(|p| p.0), Some(8080));
/// ```
pub trait FromInput: Sized {
    /// Short human name of the target type, used in log events.
    const TYPE_NAME: &'static str;

    /// Returns `Some(value)` if `raw` converts completely, `None` otherwise.
    fn from_input(raw: &str) -> Option<Self>;
}

/// Words accepted as `true` by the `bool` conversion (compared case-insensitively).
pub const TRUTHY: [&str; 4] = ["y", "yes", "t", "true"];

/// Words accepted as `false` by the `bool` conversion (compared case-insensitively).
pub const FALSY: [&str; 4] = ["n", "no", "f", "false"];

/// Implements [`FromInput`] through [`std::str::FromStr`] on the trimmed input.
///
/// # Example
/// ```rust,ignore
/// from_input_via_parse!(u8 => "u8", i32 => "i32");
/// ```
macro_rules! from_input_via_parse {
    ($($t:ty => $name:literal),+ $(,)?) => {
        $(
            impl FromInput for $t {
                const TYPE_NAME: &'static str = $name;

                fn from_input(raw: &str) -> Option<Self> {
                    raw.trim().parse::<$t>().ok()
                }
            }
        )+
    };
}

from_input_via_parse!(
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
);

impl FromInput for String {
    const TYPE_NAME: &'static str = "string";

    fn from_input(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// `y`, `yes`, `t`, `true` read as `true`; `n`, `no`, `f`, `false` read as
/// `false`. Case does not matter. Any other word is not a boolean.
impl FromInput for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_input(raw: &str) -> Option<Self> {
        let word = raw.trim();

        if TRUTHY.iter().any(|t| word.eq_ignore_ascii_case(t)) {
            Some(true)
        } else if FALSY.iter().any(|f| word.eq_ignore_ascii_case(f)) {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(String::from_input(""), Some(String::new()));
        assert_eq!(String::from_input(" a b "), Some(" a b ".to_string()));
    }

    #[test]
    fn test_bool_truthy_words() {
        for word in ["y", "Y", "yes", "YES", "t", "True", "tRuE", " yes "] {
            assert_eq!(bool::from_input(word), Some(true), "{word}");
        }
    }

    #[test]
    fn test_bool_falsy_words() {
        for word in ["n", "N", "no", "No", "f", "FALSE", "false\t"] {
            assert_eq!(bool::from_input(word), Some(false), "{word}");
        }
    }

    #[test]
    fn test_bool_other_words_fail() {
        assert!(bool::from_input("maybe").is_none());
        assert!(bool::from_input("").is_none());
        assert!(bool::from_input("1").is_none());
        assert!(bool::from_input("yess").is_none());
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(u8::from_input("255"), Some(255));
        assert!(u8::from_input("256").is_none()); // u8 max is 255
        assert!(u8::from_input("-1").is_none());
        assert_eq!(i32::from_input("2147483647"), Some(i32::MAX));
        assert!(i32::from_input("2147483648").is_none()); // overflow
        assert_eq!(i64::from_input(" -5 "), Some(-5));
    }

    #[test]
    fn test_integer_rejects_partial_numbers() {
        assert!(i64::from_input("12abc").is_none());
        assert!(i64::from_input("1.5").is_none());
        assert!(i64::from_input("").is_none());
    }

    #[test]
    fn test_float() {
        assert_eq!(f64::from_input("2.5"), Some(2.5));
        assert_eq!(f64::from_input("-3"), Some(-3.0));
        assert!(f64::from_input("two").is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(<bool as FromInput>::TYPE_NAME, "bool");
        assert_eq!(<u128 as FromInput>::TYPE_NAME, "u128");
        assert_eq!(<String as FromInput>::TYPE_NAME, "string");
    }
}
