//! Display formatting for wire values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::AppointmentStatus;

/// Date part of an ISO datetime (`2025-03-14T09:30:00` → `2025-03-14`).
///
/// Already-date-only strings pass through unchanged.
pub fn date_only(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Time-of-day part of an ISO datetime (`HH:mm`), when one is present.
pub fn time_of_day(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once('T')?;
    let hhmm = rest.get(..5)?;
    if hhmm.as_bytes().get(2) == Some(&b':') { Some(hhmm) } else { None }
}

/// Human label for an appointment status.
pub fn status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "Scheduled",
        AppointmentStatus::Approved => "Approved",
        AppointmentStatus::Rejected => "Rejected",
        AppointmentStatus::Completed => "Completed",
    }
}
