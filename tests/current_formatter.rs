use currentplot::data::y_formatter::{format_current, CurrentUnit};

#[test]
fn reference_values() {
    assert_eq!(format_current(0.0), "0.0pA");
    assert_eq!(format_current(3.2e-9), "3.2nA");
    assert_eq!(format_current(-2.5e-3), "-2.5mA");
    assert_eq!(format_current(1.0), "1.0A");
    assert_eq!(format_current(0.999), "999.0mA");
}

#[test]
fn every_bucket_has_its_suffix() {
    assert_eq!(format_current(5e-12), "5.0pA");
    assert_eq!(format_current(4.5e-8), "45.0nA");
    assert_eq!(format_current(1.5e-6), "1.5µA");
    assert_eq!(format_current(2e-3), "2.0mA");
    assert_eq!(format_current(42.0), "42.0A");
}

#[test]
fn bucket_edges_switch_unit() {
    assert_eq!(CurrentUnit::for_magnitude(1e-9), CurrentUnit::Nanoamps);
    assert_eq!(CurrentUnit::for_magnitude(1e-6), CurrentUnit::Microamps);
    assert_eq!(CurrentUnit::for_magnitude(1e-3), CurrentUnit::Milliamps);
    assert_eq!(CurrentUnit::for_magnitude(1.0), CurrentUnit::Amps);
    assert_eq!(format_current(1e-6), "1.0µA");
}

#[test]
fn negative_values_keep_sign_and_pick_unit_by_magnitude() {
    assert_eq!(format_current(-1e-9), "-1.0nA");
    assert_eq!(format_current(-7.4e-6), "-7.4µA");
    assert_eq!(format_current(-3.0), "-3.0A");
}

#[test]
fn values_rounding_to_zero_have_no_minus_sign() {
    assert_eq!(format_current(-0.0), "0.0pA");
    assert_eq!(format_current(-1e-14), "0.0pA");
}

#[test]
fn non_finite_values_have_no_unit() {
    assert_eq!(format_current(f64::NAN), "NaN");
    assert_eq!(format_current(f64::INFINITY), "inf");
    assert_eq!(format_current(f64::NEG_INFINITY), "-inf");
}

#[test]
fn unit_display_matches_suffix() {
    assert_eq!(CurrentUnit::Microamps.to_string(), "µA");
    assert_eq!(CurrentUnit::Picoamps.scale(), 1e12);
}
