use super::*;

#[test]
fn first_page_has_no_prev() {
    assert!(!has_prev(1));
    assert!(has_prev(2));
}

#[test]
fn last_page_has_no_next() {
    assert!(has_next(1, 3));
    assert!(!has_next(3, 3));
    assert!(!has_next(1, 0));
}

#[test]
fn label_never_reports_zero_pages() {
    assert_eq!(page_label(1, 0), "Page 1 of 1");
    assert_eq!(page_label(2, 5), "Page 2 of 5");
}
