//! Parsing of raw client input into typed arguments.
//!
//! These errors belong to the adapters; the repository never sees them.

use chrono::NaiveDate;
use thiserror::Error;

/// Date layouts accepted for deadlines, tried in order
pub const DEADLINE_FORMATS: [&str; 4] = ["%d-%m-%Y", "%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Could not parse \"{0}\" as a task ID")]
    InvalidTaskId(String),

    #[error("Could not parse \"{0}\" as a deadline")]
    InvalidDeadline(String),

    #[error("Could not parse \"{0}\" as a completion flag")]
    InvalidFlag(String),
}

pub fn parse_task_id(raw: &str) -> Result<u64, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::InvalidTaskId(raw.to_string()))
}

pub fn parse_deadline(raw: &str) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    DEADLINE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| InputError::InvalidDeadline(raw.to_string()))
}

/// `true`/`false` in any case, or `1`/`0`
pub fn parse_flag(raw: &str) -> Result<bool, InputError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        Ok(false)
    } else {
        Err(InputError::InvalidFlag(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("42"), Ok(42));
        assert_eq!(parse_task_id(" 7 "), Ok(7));
        assert_eq!(
            parse_task_id("-1"),
            Err(InputError::InvalidTaskId("-1".into()))
        );
        assert!(parse_task_id("abc").is_err());
    }

    #[test]
    fn test_parse_deadline_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        for raw in ["05-03-2024", "2024-03-05", "05.03.2024", "05/03/2024"] {
            assert_eq!(parse_deadline(raw), Ok(expected), "format {raw}");
        }
    }

    #[test]
    fn test_parse_deadline_rejects_impossible_dates() {
        assert!(parse_deadline("31-02-2024").is_err());
        assert!(parse_deadline("tomorrow").is_err());
        assert_eq!(
            parse_deadline("").unwrap_err().to_string(),
            "Could not parse \"\" as a deadline"
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Ok(true));
        assert_eq!(parse_flag("1"), Ok(true));
        assert_eq!(parse_flag("false"), Ok(false));
        assert_eq!(parse_flag("0"), Ok(false));
        assert_eq!(parse_flag("yes"), Err(InputError::InvalidFlag("yes".into())));
    }
}
