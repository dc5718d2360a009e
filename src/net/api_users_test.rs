use super::*;

#[test]
fn detail_and_mutation_endpoints_match_backend_paths() {
    assert_eq!(user_detail_endpoint(7), "/user/detail/7");
    assert_eq!(update_doctor_endpoint(7), "/user/update-doctor/7");
    assert_eq!(delete_doctor_endpoint(7), "/user/delete-doctor/7");
    assert_eq!(update_patient_endpoint(9), "/user/update-patient/9");
    assert_eq!(delete_patient_endpoint(9), "/user/delete-patient/9");
}

#[test]
fn list_query_includes_role_and_pagination() {
    let query = UserQuery {
        search: String::new(),
        role: Some(Role::Doctor),
        page: 2,
        size: 10,
    };
    assert_eq!(
        user_list_query(&query),
        vec![
            ("role", "DOCTOR".to_owned()),
            ("page", "2".to_owned()),
            ("size", "10".to_owned()),
        ]
    );
}

#[test]
fn list_query_trims_search_and_skips_it_when_blank() {
    let mut query = UserQuery {
        search: "  siti  ".to_owned(),
        role: None,
        page: 1,
        size: 10,
    };
    assert_eq!(
        user_list_query(&query),
        vec![
            ("search", "siti".to_owned()),
            ("page", "1".to_owned()),
            ("size", "10".to_owned()),
        ]
    );

    query.search = "   ".to_owned();
    assert_eq!(
        user_list_query(&query),
        vec![("page", "1".to_owned()), ("size", "10".to_owned())]
    );
}
