//! Line parser for Weird source.
//!
//! Each line is `keyword: arg, arg, ...`. Arguments are decoded by their
//! leading sigil:
//!
//! | sigil | value |
//! |-------|-------|
//! | `i`   | integer, leading decimal prefix (no digits gives 0) |
//! | `f`   | float, leading decimal prefix (no digits gives 0.0) |
//! | `'`   | the single character after the sigil |
//! | `"`   | vector of characters, rest of the token (no closing quote) |
//! | `:`   | identifier |
//!
//! `label` is the exception: its argument is the label name itself, with or
//! without a leading `:`.

use weird_foundation::{Error, ErrorKind, Result, Value};

use crate::command::{Command, Location};

/// Parses one source line into a command.
///
/// Blank lines and lines starting with `#` become `noop`.
///
/// # Errors
///
/// Returns a load error, located at `location`, if any argument has an
/// unrecognised sigil or an undecodable payload.
pub fn parse_line(text: &str, location: Location) -> Result<Command> {
    if text.trim().is_empty() || text.starts_with('#') {
        return Ok(Command::noop(location));
    }

    let (keyword, args) = match text.split_once(':') {
        Some((keyword, rest)) if keyword.trim() == LABEL_KEYWORD => {
            (keyword, parse_label_arguments(rest.trim()))
        }
        Some((keyword, rest)) => (keyword, parse_arguments(rest.trim())),
        None => (text, Ok(Vec::new())),
    };
    let args = args.map_err(|e| e.with_context(location.context()))?;

    Ok(Command::new(keyword.trim(), args, location))
}

/// Keyword whose argument is a bare name.
const LABEL_KEYWORD: &str = "label";

/// Decodes the arguments of `label`.
///
/// A label names itself, so `label: main` and `label: :main` both declare
/// `main`. No other sigil applies.
///
/// # Errors
///
/// Returns `EmptyArgument` for an empty entry.
pub fn parse_label_arguments(raw: &str) -> Result<Vec<Value>> {
    split_arguments(raw)
        .map(|piece| {
            let name = piece.trim();
            let name = name.strip_prefix(':').unwrap_or(name);
            if name.is_empty() {
                return Err(Error::new(ErrorKind::EmptyArgument));
            }
            Ok(Value::ident(name))
        })
        .collect()
}

/// Splits and decodes a raw argument string.
///
/// Trailing empty entries (`i1,`) are dropped; empty entries elsewhere are
/// an error.
///
/// # Errors
///
/// Returns the first argument decoding error.
pub fn parse_arguments(raw: &str) -> Result<Vec<Value>> {
    split_arguments(raw)
        .map(|piece| parse_argument(piece.trim()))
        .collect()
}

/// Splits on commas, dropping trailing empty pieces.
fn split_arguments(raw: &str) -> impl Iterator<Item = &str> {
    let mut pieces: Vec<&str> = raw.split(',').collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces.into_iter()
}

/// Decodes a single trimmed argument token.
///
/// # Errors
///
/// Returns `EmptyArgument`, `UnrecognizedSigil`, `MissingCharacter`, or
/// `IntegerOutOfRange`.
pub fn parse_argument(token: &str) -> Result<Value> {
    let mut chars = token.chars();
    let Some(sigil) = chars.next() else {
        return Err(Error::new(ErrorKind::EmptyArgument));
    };
    let rest = chars.as_str();

    match sigil {
        'i' => parse_int(rest).map(Value::Int),
        'f' => Ok(Value::Float(parse_float(rest))),
        '\'' => rest
            .chars()
            .next()
            .map(Value::Char)
            .ok_or_else(|| Error::new(ErrorKind::MissingCharacter)),
        '"' => Ok(Value::chars(rest)),
        ':' => Ok(Value::ident(rest)),
        other => Err(Error::new(ErrorKind::UnrecognizedSigil(other))),
    }
}

/// Parses the leading integer of `text`.
///
/// Accepts leading whitespace, an optional sign, and `_` between digits.
/// Stops at the first character that cannot continue the number; text with
/// no leading digits is 0.
fn parse_int(text: &str) -> Result<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let out_of_range = || Error::new(ErrorKind::IntegerOutOfRange(text.to_string()));
    let mut value: i64 = 0;
    let mut after_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                // Accumulate toward the sign so that i64::MIN is reachable.
                value = value
                    .checked_mul(10)
                    .and_then(|v| {
                        if negative {
                            v.checked_sub(digit)
                        } else {
                            v.checked_add(digit)
                        }
                    })
                    .ok_or_else(out_of_range)?;
                after_digit = true;
            }
            '_' if after_digit => after_digit = false,
            _ => break,
        }
    }
    Ok(value)
}

/// Parses the leading float of `text`, or 0.0 when there is none.
fn parse_float(text: &str) -> f32 {
    float_prefix(text.trim_start()).parse().unwrap_or(0.0)
}

/// Returns the longest prefix of `text` that reads as a decimal float.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let mut has_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end = digits_from(end + 1);
        has_digits = true;
    }
    if !has_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &text[..end]
}
