use super::*;

#[test]
fn format_clock_zero_pads_fields() {
    assert_eq!(format_clock(0, 0, 0), "00:00:00");
    assert_eq!(format_clock(9, 5, 7), "09:05:07");
    assert_eq!(format_clock(23, 59, 59), "23:59:59");
}

#[test]
fn format_clock_wraps_out_of_range_fields() {
    assert_eq!(format_clock(24, 60, 61), "00:00:01");
}

#[test]
fn tick_is_one_second() {
    assert_eq!(TICK, Duration::from_secs(1));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_text_is_placeholder_without_browser() {
    assert_eq!(now_text(), PLACEHOLDER);
}
