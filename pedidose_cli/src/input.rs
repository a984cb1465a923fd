//! Prompting loops over stdin.
//!
//! All prompts are generic over the reader and writer so they can be unit
//! tested against in-memory buffers. A prompt returns `Ok(None)` on EOF,
//! which the REPL treats as a clean end of session; invalid input is
//! reported as a status and re-prompted, never fatal.

use crate::render::Theme;
use pedidose_core::Status;
use std::io::{self, BufRead, Write};

/// Read one trimmed line; `None` means EOF.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Show a prompt and read one trimmed line.
pub fn prompt_line(
    out: &mut impl Write,
    input: &mut impl BufRead,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_line(input)
}

/// Prompt for a non-empty name, looping on blank input.
pub fn prompt_name(
    out: &mut impl Write,
    input: &mut impl BufRead,
    theme: &Theme,
    prompt: &str,
) -> io::Result<Option<String>> {
    loop {
        let Some(line) = prompt_line(out, input, prompt)? else {
            return Ok(None);
        };
        if !line.is_empty() {
            return Ok(Some(line));
        }
        theme.write_status(out, &Status::error("A name is required"))?;
    }
}

/// Prompt for a positive number, looping until one is entered.
///
/// Rejects non-numeric input, zero, negatives, and non-finite values.
pub fn prompt_positive(
    out: &mut impl Write,
    input: &mut impl BufRead,
    theme: &Theme,
    prompt: &str,
) -> io::Result<Option<f64>> {
    loop {
        let Some(line) = prompt_line(out, input, prompt)? else {
            return Ok(None);
        };
        match line.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => return Ok(Some(value)),
            Ok(_) => {
                theme.write_status(out, &Status::error("Enter a number greater than zero"))?;
            }
            Err(_) => {
                theme.write_status(
                    out,
                    &Status::error(format!("'{}' is not a number", line)),
                )?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn theme() -> Theme {
        Theme::new(false)
    }

    #[test]
    fn test_positive_accepts_first_valid() {
        let mut input = Cursor::new("12.5\n");
        let mut out = Vec::new();
        let value = prompt_positive(&mut out, &mut input, &theme(), "> ").unwrap();
        assert_eq!(value, Some(12.5));
    }

    #[test]
    fn test_positive_loops_past_garbage_and_zero() {
        let mut input = Cursor::new("abc\n0\n-4\n7\n");
        let mut out = Vec::new();
        let value = prompt_positive(&mut out, &mut input, &theme(), "> ").unwrap();
        assert_eq!(value, Some(7.0));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("'abc' is not a number"));
        assert!(text.contains("greater than zero"));
    }

    #[test]
    fn test_positive_eof_returns_none() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let value = prompt_positive(&mut out, &mut input, &theme(), "> ").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_name_rejects_blank() {
        let mut input = Cursor::new("\n  \nAmoxicillin\n");
        let mut out = Vec::new();
        let name = prompt_name(&mut out, &mut input, &theme(), "Name: ").unwrap();
        assert_eq!(name.as_deref(), Some("Amoxicillin"));
    }
}
