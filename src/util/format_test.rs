use super::*;

#[test]
fn date_only_strips_the_time_part() {
    assert_eq!(date_only("2025-03-14T09:30:00"), "2025-03-14");
    assert_eq!(date_only("2025-03-14"), "2025-03-14");
    assert_eq!(date_only(""), "");
}

#[test]
fn time_of_day_extracts_hours_and_minutes() {
    assert_eq!(time_of_day("2025-03-14T09:30:00"), Some("09:30"));
    assert_eq!(time_of_day("2025-03-14T09:30"), Some("09:30"));
    assert_eq!(time_of_day("2025-03-14"), None);
    assert_eq!(time_of_day("2025-03-14Tbad"), None);
}

#[test]
fn status_labels_are_title_case() {
    assert_eq!(status_label(AppointmentStatus::Scheduled), "Scheduled");
    assert_eq!(status_label(AppointmentStatus::Completed), "Completed");
}
