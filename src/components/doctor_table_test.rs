use super::*;

#[test]
fn doctor_query_pins_the_doctor_role() {
    let query = doctor_query("siti", 2);
    assert_eq!(query.role, Some(Role::Doctor));
    assert_eq!(query.search, "siti");
    assert_eq!(query.page, 2);
    assert_eq!(query.size, PAGE_SIZE);
}
