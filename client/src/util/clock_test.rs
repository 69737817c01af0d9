use super::*;

#[test]
fn clock_label_zero_pads() {
    assert_eq!(clock_label(9, 5), "09:05");
    assert_eq!(clock_label(23, 59), "23:59");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_label_is_none_outside_browser() {
    assert_eq!(now_label(), None);
}
