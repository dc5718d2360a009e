use super::*;

#[test]
fn gender_form_value_maps_known_values() {
    assert_eq!(gender_form_value(Some(Gender::Male)), "MALE");
    assert_eq!(gender_form_value(Some(Gender::Female)), "FEMALE");
    assert_eq!(gender_form_value(None), "");
}

#[test]
fn birth_date_form_value_strips_time_part() {
    assert_eq!(birth_date_form_value(Some("1990-01-31T00:00:00")), "1990-01-31");
    assert_eq!(birth_date_form_value(Some("1990-01-31")), "1990-01-31");
    assert_eq!(birth_date_form_value(None), "");
}
