//! Token formatting and line building for the entwire text protocol.
//!
//! This crate turns values into wire tokens and tokens into command lines.
//! It does not know about entities or symbol tables, only about the shape of
//! a line.
//!
//! # Design Principles
//!
//! - **Locale-free** - Numbers always use `.` and never group digits.
//! - **One delimiter** - Only [`Line`] writes separators; escaping and joining
//!   stay independent.
//! - **Deterministic** - Same value, same token.

mod error;
mod escape;
mod line;
mod number;
mod value;

pub use error::{WireError, WireResult};
pub use escape::{escape, QUOTE, SEPARATOR};
pub use line::{join, Line};
pub use number::{format_number, write_number, MAX_FRACTION_DIGITS};
pub use value::{format_value, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = SEPARATOR;
        let _ = QUOTE;
        let _ = MAX_FRACTION_DIGITS;
        let _ = Line::new();
        let _ = escape("x");
        let _ = join(["a"]);

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn escaped_text_joins_into_one_token_span() {
        let value = escape("a b");
        let line = join(["T", value.as_ref()]);
        assert_eq!(line, "T 'a b'");
    }

    #[test]
    fn number_and_value_paths_agree() {
        assert_eq!(
            format_number(2.5).unwrap(),
            format_value(&Value::Float(2.5)).unwrap()
        );
    }
}
