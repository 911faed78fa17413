//! User input utilities: argument parsers and interactive prompts.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use rankplan_core::AssignmentType;

use crate::error::CliError;

/// Parse a date argument.
///
/// Accepts a calendar date (`2024-01-31`, taken as midnight UTC) or a full
/// RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| format!("invalid date '{raw}', expected YYYY-MM-DD or RFC 3339"))
}

/// Parse an assignment type argument (`main` or `reliever`).
pub fn parse_assignment_type(raw: &str) -> Result<AssignmentType, String> {
    AssignmentType::parse(&raw.trim().to_lowercase())
        .ok_or_else(|| format!("invalid assignment type '{raw}', expected main or reliever"))
}

/// Read one trimmed line from `input` after printing `prompt`.
fn read_answer(prompt: &str, input: &mut impl BufRead) -> Result<String> {
    print!("{prompt} (y/N): ");
    io::stdout().flush().map_err(CliError::from)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(CliError::from)?;
    Ok(line.trim().to_lowercase())
}

/// Ask a yes/no question on `input`. Empty input and end of input mean no.
pub fn confirm_from(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
    loop {
        match read_answer(prompt, input)?.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

/// Prompts the user for a yes/no confirmation on stdin.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    confirm_from(prompt, &mut io::stdin().lock())
}
