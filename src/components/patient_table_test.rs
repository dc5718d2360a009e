use super::*;

#[test]
fn patient_query_pins_the_patient_role() {
    let query = patient_query("budi", 3);
    assert_eq!(query.role, Some(Role::Patient));
    assert_eq!(query.search, "budi");
    assert_eq!(query.page, 3);
    assert_eq!(query.size, PAGE_SIZE);
}
