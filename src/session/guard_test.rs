use super::*;

fn authenticated(role: Role) -> Session {
    Session {
        user_id: Some(7),
        role: Some(role),
        is_authenticated: true,
    }
}

#[test]
fn absent_session_always_redirects_to_login() {
    let session = Session::default();
    for allowed in [
        vec![Role::Admin],
        vec![Role::Doctor],
        vec![Role::Patient],
        vec![Role::Admin, Role::Doctor, Role::Patient],
    ] {
        assert_eq!(guard_decision(&session, &allowed), GuardOutcome::RedirectToLogin);
    }
}

#[test]
fn matching_role_is_allowed() {
    for role in [Role::Admin, Role::Doctor, Role::Patient] {
        let session = authenticated(role.clone());
        assert_eq!(guard_decision(&session, &[role]), GuardOutcome::Allow);
    }
}

#[test]
fn role_outside_allowed_set_is_unauthorized() {
    let session = authenticated(Role::Doctor);
    assert_eq!(
        guard_decision(&session, &[Role::Admin]),
        GuardOutcome::RedirectToUnauthorized
    );
    assert_eq!(
        guard_decision(&session, &[Role::Admin, Role::Patient]),
        GuardOutcome::RedirectToUnauthorized
    );
}

#[test]
fn membership_in_a_wider_set_is_allowed() {
    let session = authenticated(Role::Doctor);
    assert_eq!(
        guard_decision(&session, &[Role::Admin, Role::Doctor]),
        GuardOutcome::Allow
    );
}

#[test]
fn unknown_role_is_denied_not_logged_out() {
    let session = authenticated(Role::Unknown("NURSE".to_owned()));
    for allowed in [
        vec![Role::Admin],
        vec![Role::Admin, Role::Doctor, Role::Patient],
    ] {
        assert_eq!(
            guard_decision(&session, &allowed),
            GuardOutcome::RedirectToUnauthorized
        );
    }
}

#[test]
fn redirect_targets_are_the_fixed_routes() {
    // The guard's two redirect outcomes land on these exact paths.
    assert_eq!(routes::LOGIN_PATIENT, "/login-patient");
    assert_eq!(routes::UNAUTHORIZED, "/error");
}

#[test]
fn doctor_session_against_admin_and_doctor_gates() {
    // Concrete end-to-end expectation for a stored doctor session.
    let session = authenticated(Role::Doctor);
    assert_eq!(
        guard_decision(&session, &[Role::Admin]),
        GuardOutcome::RedirectToUnauthorized
    );
    assert_eq!(guard_decision(&session, &[Role::Doctor]), GuardOutcome::Allow);
}
