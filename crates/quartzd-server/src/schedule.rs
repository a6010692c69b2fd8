//! Cron-to-quartz schedule translation.

use rand::Rng;
use tracing::instrument;

use crate::error::{ServerError, ServerResult};

/// Translates a 5-field cron expression into a 7-field quartz expression.
///
/// Quartz does not accept both day fields unrestricted: when day-of-month is
/// `*`, day-of-week is rewritten to `?` if it is also `*`, otherwise
/// day-of-month becomes `?`. The seconds field is drawn uniformly from 0-10
/// to spread job starts, and the year field is fixed to `*`.
///
/// An expression restricting both day-of-month and day-of-week passes
/// through with both fields unchanged, even though quartz may reject the
/// result. The scheduling semantics of that case are ambiguous and the
/// translation does not pick a meaning.
#[instrument]
pub fn cron_to_quartz(schedule: &str) -> ServerResult<String> {
    let mut fields: Vec<&str> = schedule.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(ServerError::InvalidSchedule {
            message: format!("expected 5 fields, got {}: {schedule:?}", fields.len()),
        });
    }

    if fields[2] == "*" {
        if fields[4] == "*" {
            fields[4] = "?";
        } else if fields[4] != "?" {
            fields[2] = "?";
        }
    }

    let seconds = rand::thread_rng().gen_range(0..=10);
    Ok(format!("{} {} *", seconds, fields.join(" ")))
}
