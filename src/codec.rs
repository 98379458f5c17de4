//! JSON text ⇄ `serde_json::Value`, with decoding errors meant for humans.
//!
//! A decoding failure names the problem (unexpected token, unexpected end,
//! empty input), adds a hint about the usual culprits and quotes the input
//! around the failure position.
use serde_json::Value;
use serde_json::error::Category;
use thiserror::Error;

use crate::error::Result;

/// Characters quoted on each side of the failure position.
const SNIPPET_RADIUS: usize = 20;

const NUMBER_OUT_OF_RANGE: &str = "number out of range";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("JSON string is empty or contains only whitespace")]
    Empty,

    #[error(
        "JSON Parse Error: unexpected token {found:?} at line {line} column {column} ({detail})\n  \
         → Check for: missing quotes around properties, trailing commas, or invalid characters\n  \
         → Near: \"{snippet}\""
    )]
    UnexpectedToken {
        found: char,
        line: usize,
        column: usize,
        detail: String,
        snippet: String,
    },

    #[error(
        "JSON Parse Error: unexpected end of JSON input at line {line} column {column} ({detail})\n  \
         → The JSON string appears to be incomplete (missing closing braces or brackets)\n  \
         → Near: \"{snippet}\""
    )]
    UnexpectedEnd {
        line: usize,
        column: usize,
        detail: String,
        snippet: String,
    },

    #[error("JSON Parse Error: {detail} at line {line} column {column}")]
    Invalid {
        line: usize,
        column: usize,
        detail: String,
    },
}

pub fn parse_value(src: &str) -> Result<Value, ParseError> {
    if src.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    serde_json::from_str(src).map_err(|err| describe(src, &err))
}

/// Two-space indentation when `prettify`, otherwise no whitespace at all.
pub fn stringify(value: &Value, prettify: bool) -> Result<String> {
    let out = if prettify {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn describe(src: &str, err: &serde_json::Error) -> ParseError {
    let (line, column) = (err.line(), err.column());
    let detail = bare_message(err);
    let offset = byte_offset(src, line, column);
    let snippet = snippet_around(src, offset);

    match err.classify() {
        Category::Eof => ParseError::UnexpectedEnd { line, column, detail, snippet },
        // well-formed text that does not fit an f64, e.g. `1e400`
        Category::Syntax if detail == NUMBER_OUT_OF_RANGE => ParseError::Invalid { line, column, detail },
        Category::Syntax => match src[offset..].chars().next() {
            Some(found) => ParseError::UnexpectedToken { found, line, column, detail, snippet },
            None => ParseError::UnexpectedEnd { line, column, detail, snippet },
        },
        Category::Data | Category::Io => ParseError::Invalid { line, column, detail },
    }
}

/// serde_json appends " at line L column C"; the position is reported separately.
fn bare_message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    full.strip_suffix(&suffix).unwrap_or(&full).to_string()
}

/// serde_json lines are 1-based, columns are 1-based byte counts. Column 0
/// means the failure is the newline that ended the previous line.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = match column {
        0 => line_start.saturating_sub(1),
        column => line_start + column - 1,
    };
    floor_char_boundary(src, offset)
}

fn snippet_around(src: &str, offset: usize) -> String {
    let start = floor_char_boundary(src, offset.saturating_sub(SNIPPET_RADIUS));
    let end = floor_char_boundary(src, offset + SNIPPET_RADIUS);
    src[start..end].to_string()
}

fn floor_char_boundary(src: &str, mut i: usize) -> usize {
    if i >= src.len() {
        return src.len();
    }
    while !src.is_char_boundary(i) {
        i -= 1;
    }
    i
}

// ------------------------------- Tests ------------------------------------ //
