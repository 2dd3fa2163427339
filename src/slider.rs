//! Slider math
//!
//! Pure pixel/value conversions for the slider widget: snapping,
//! pointer mapping and scoring-band geometry. No DOM access, so the
//! whole module is testable natively.

use crate::models::SliderSpec;

/// Decimal places used when displaying values, derived from the step
/// (a step of 0.25 shows two decimals, a step of 5 shows none).
pub fn step_decimals(step: f64) -> usize {
    let text = format!("{}", step);
    match text.split_once('.') {
        Some((_, frac)) => frac.len(),
        None => 0,
    }
}

/// Format a value with the precision implied by the step.
pub fn format_value(value: f64, step: f64) -> String {
    format!("{:.*}", step_decimals(step), value)
}

/// Snap a raw value to the nearest step from min (half rounds up),
/// clamped to [min, max].
pub fn snap_to_step(raw: f64, spec: &SliderSpec) -> f64 {
    let steps = ((raw - spec.min) / spec.step + 0.5).floor();
    let snapped = spec.min + steps * spec.step;
    // Trim float noise to the step's precision before clamping
    let factor = 10f64.powi(step_decimals(spec.step) as i32);
    let tidy = (snapped * factor).round() / factor;
    tidy.clamp(spec.min, spec.max)
}

/// Map a pointer offset inside the track to a snapped value.
pub fn value_from_pointer(px: f64, track_width_px: f64, spec: &SliderSpec) -> f64 {
    if track_width_px <= 0.0 {
        return spec.min;
    }
    let fraction = (px / track_width_px).clamp(0.0, 1.0);
    snap_to_step(spec.min + fraction * (spec.max - spec.min), spec)
}

/// Position of a value along the track as a fraction in [0, 1].
pub fn fraction_of(value: f64, spec: &SliderSpec) -> f64 {
    let span = spec.max - spec.min;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - spec.min) / span).clamp(0.0, 1.0)
}

/// Inverse of `value_from_pointer` (before snapping).
pub fn pointer_from_value(value: f64, track_width_px: f64, spec: &SliderSpec) -> f64 {
    fraction_of(value, spec) * track_width_px
}

/// Pixel widths of the credit bands drawn around the handle: the
/// partial band covers ±threshold, the exact band one unit of value.
pub fn zone_widths_px(spec: &SliderSpec, track_width_px: f64) -> (f64, f64) {
    let span = spec.max - spec.min;
    if span <= 0.0 || track_width_px <= 0.0 {
        return (0.0, 0.0);
    }
    let partial = (2.0 * spec.threshold / span * track_width_px).clamp(0.0, track_width_px);
    let exact = (track_width_px / span).clamp(0.0, track_width_px);
    (partial, exact)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn spec(min: f64, max: f64, step: f64) -> SliderSpec {
        SliderSpec {
            min,
            max,
            step,
            unit: "km/h".to_string(),
            threshold: 2.5,
            points_exact: 10,
            points_partial: 5,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_snap_rounds_half_up() {
        let s = spec(0.0, 10.0, 1.0);
        assert!(close(snap_to_step(0.5, &s), 1.0));
        assert!(close(snap_to_step(1.49, &s), 1.0));
        assert!(close(snap_to_step(2.5, &s), 3.0));
    }

    #[test]
    fn test_snap_stays_within_half_step_and_bounds() {
        let specs = [spec(0.0, 50.0, 0.5), spec(-10.0, 10.0, 0.25), spec(5.0, 6.0, 0.1)];
        for s in &specs {
            let mut raw = s.min;
            while raw <= s.max {
                let snapped = snap_to_step(raw, s);
                assert!(
                    (snapped - raw).abs() <= s.step / 2.0 + EPS,
                    "snap({}) = {} drifted past step/2 for {:?}",
                    raw,
                    snapped,
                    s
                );
                assert!(snapped >= s.min - EPS && snapped <= s.max + EPS);
                raw += s.step / 3.0;
            }
            // Boundaries map to themselves
            assert!(close(snap_to_step(s.min, s), s.min));
            assert!(close(snap_to_step(s.max, s), s.max));
        }
    }

    #[test]
    fn test_snap_clamps_raw_values_outside_bounds() {
        let s = spec(0.0, 50.0, 0.5);
        assert!(close(snap_to_step(-20.0, &s), 0.0));
        assert!(close(snap_to_step(99.0, &s), 50.0));
        // Max off the step grid still clamps to max
        let coarse = spec(0.0, 10.0, 4.0);
        assert!(close(snap_to_step(10.0, &coarse), 10.0));
    }

    #[test]
    fn test_value_from_pointer_spans_the_track() {
        let s = spec(0.0, 50.0, 0.5);
        assert!(close(value_from_pointer(0.0, 200.0, &s), 0.0));
        assert!(close(value_from_pointer(100.0, 200.0, &s), 25.0));
        assert!(close(value_from_pointer(200.0, 200.0, &s), 50.0));
        // Pointer can leave the track mid-drag
        assert!(close(value_from_pointer(-40.0, 200.0, &s), 0.0));
        assert!(close(value_from_pointer(900.0, 200.0, &s), 50.0));
        // Degenerate geometry
        assert!(close(value_from_pointer(10.0, 0.0, &s), 0.0));
    }

    #[test]
    fn test_pointer_from_value_is_the_inverse() {
        let s = spec(0.0, 50.0, 0.5);
        assert!(close(pointer_from_value(25.0, 200.0, &s), 100.0));
        assert!(close(pointer_from_value(0.0, 200.0, &s), 0.0));
        assert!(close(pointer_from_value(50.0, 200.0, &s), 200.0));
        assert!(close(fraction_of(12.5, &s), 0.25));
    }

    #[test]
    fn test_zone_widths_scale_with_span() {
        let s = spec(0.0, 50.0, 0.5);
        let (partial, exact) = zone_widths_px(&s, 200.0);
        assert!(close(partial, 20.0)); // 2 * 2.5 of 50 units over 200px
        assert!(close(exact, 4.0)); // one unit over 200px

        let mut no_partial = s.clone();
        no_partial.threshold = 0.0;
        assert!(close(zone_widths_px(&no_partial, 200.0).0, 0.0));

        let mut wide = s.clone();
        wide.threshold = 1000.0;
        assert!(close(zone_widths_px(&wide, 200.0).0, 200.0));
    }

    #[test]
    fn test_display_precision_follows_step() {
        assert_eq!(step_decimals(0.5), 1);
        assert_eq!(step_decimals(0.25), 2);
        assert_eq!(step_decimals(5.0), 0);
        assert_eq!(format_value(7.0, 0.5), "7.0");
        assert_eq!(format_value(7.0, 1.0), "7");
        assert_eq!(format_value(7.125, 0.25), "7.12");
    }
}
