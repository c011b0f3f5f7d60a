use super::*;

#[test]
fn currency_renders_two_decimals() {
    assert_eq!(currency(0.0), "$0.00");
    assert_eq!(currency(1234.5), "$1234.50");
}

#[test]
fn yes_no_maps_booleans() {
    assert_eq!(yes_no(true), "Yes");
    assert_eq!(yes_no(false), "No");
}
