//! 1-based user index handling.

use crate::errors::{TodosError, TodosResult};

/// Convert a user-supplied 1-based index into a 0-based list position.
///
/// Non-numeric input is an error; the entities never see it. Numeric
/// input below 1 yields `None`, which callers treat like any other
/// out-of-range position.
pub fn parse_position(input: &str) -> TodosResult<Option<usize>> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| TodosError::InvalidIndex {
            input: input.to_string(),
        })?;

    Ok(value
        .checked_sub(1)
        .and_then(|v| usize::try_from(v).ok()))
}
