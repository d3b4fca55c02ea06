/// Tick values computed for one axis range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisValues {
    pub entries: Vec<f64>,
    /// Fraction digits needed to tell neighboring entries apart.
    pub decimals: usize,
}

/// Computes evenly spaced tick values covering `[min, max]`.
///
/// Without `force_label_count` the interval is rounded to a "nice" number
/// (one significant digit, bumped to the next power of ten when that digit
/// exceeds 5) and entries sit on multiples of it. With `force_label_count`
/// exactly `label_count` entries are spread from `min` to `max`.
#[must_use]
pub fn compute_axis_values(
    min: f64,
    max: f64,
    label_count: usize,
    force_label_count: bool,
) -> AxisValues {
    let range = (max - min).abs();
    if label_count == 0 || !range.is_finite() || range <= 0.0 || !min.is_finite() {
        return AxisValues::default();
    }
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    let raw_interval = range / label_count as f64;
    let mut interval = round_to_next_significant(raw_interval);

    let interval_magnitude = round_to_next_significant(10f64.powf(interval.log10().floor()));
    if interval_magnitude > 0.0 {
        let interval_sig_digit = (interval / interval_magnitude) as i64;
        if interval_sig_digit > 5 {
            // Below 0.1 the floored bump collapses to zero; keep the rounded interval.
            let bumped = (10.0 * interval_magnitude).floor();
            if bumped > 0.0 {
                interval = bumped;
            }
        }
    }

    let entries = if force_label_count {
        let count = label_count.max(2);
        interval = range / (count - 1) as f64;
        (0..count).map(|i| min + interval * i as f64).collect()
    } else if !interval.is_finite() || interval <= 0.0 {
        return AxisValues::default();
    } else {
        let first = (min / interval).ceil() * interval;
        let last = next_up((max / interval).floor() * interval);
        let mut values = Vec::new();
        let mut index = 0u32;
        loop {
            let value = first + interval * f64::from(index);
            if value > last {
                break;
            }
            // Multiples of the interval can land on -0.0.
            values.push(if value == 0.0 { 0.0 } else { value });
            index += 1;
        }
        values
    };

    AxisValues {
        entries,
        decimals: decimals_for_interval(interval),
    }
}

/// Rounds `number` to one significant digit; zero for non-finite input.
#[must_use]
pub fn round_to_next_significant(number: f64) -> f64 {
    if !number.is_finite() || number == 0.0 {
        return 0.0;
    }
    let digits = number.abs().log10().ceil();
    let power = 1.0 - digits;
    let magnitude = 10f64.powf(power);
    (number * magnitude).round() / magnitude
}

#[must_use]
pub fn decimals_for_interval(interval: f64) -> usize {
    if !interval.is_finite() || interval <= 0.0 || interval >= 1.0 {
        return 0;
    }
    let digits = (-interval.log10()).ceil();
    if digits.is_finite() && digits > 0.0 {
        digits as usize
    } else {
        0
    }
}

fn next_up(value: f64) -> f64 {
    if value.is_nan() || value == f64::INFINITY {
        return value;
    }
    if value == 0.0 {
        return f64::from_bits(1);
    }
    let bits = value.to_bits();
    if value > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{compute_axis_values, decimals_for_interval, next_up, round_to_next_significant};

    #[test]
    fn nice_interval_for_zero_to_hundred() {
        let values = compute_axis_values(0.0, 100.0, 6, false);
        assert_eq!(values.entries, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(values.decimals, 0);
    }

    #[test]
    fn interval_digit_above_five_bumps_magnitude() {
        // 70 / 10 = 7 -> bumped to 10
        let values = compute_axis_values(0.0, 70.0, 10, false);
        assert_eq!(values.entries, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);
    }

    #[test]
    fn fractional_interval_reports_decimals() {
        let values = compute_axis_values(0.0, 1.0, 5, false);
        assert_eq!(values.decimals, 1);
        assert_eq!(values.entries.len(), 6);
        assert_relative_eq!(values.entries[5], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn narrow_fractional_range_keeps_ticks_inside_range() {
        let values = compute_axis_values(5.0, 5.42, 6, false);
        assert!(values.entries.len() >= 5, "entries: {:?}", values.entries);
        assert!(values.entries.iter().all(|v| (5.0..=5.42).contains(v)));
        assert!(values.decimals >= 1);
        assert!(!values.entries.contains(&0.0));

        let from_zero = compute_axis_values(0.0, 0.42, 6, false);
        assert!(from_zero.entries.len() >= 5, "entries: {:?}", from_zero.entries);
        assert_eq!(from_zero.decimals, 2);
        assert_relative_eq!(from_zero.entries[1] - from_zero.entries[0], 0.07, epsilon = 1e-12);
    }

    #[test]
    fn forced_label_count_spreads_exactly() {
        let values = compute_axis_values(-3.0, 9.0, 4, true);
        assert_eq!(values.entries, vec![-3.0, 1.0, 5.0, 9.0]);
    }

    #[test]
    fn degenerate_ranges_yield_no_entries() {
        assert!(compute_axis_values(5.0, 5.0, 6, false).entries.is_empty());
        assert!(compute_axis_values(0.0, f64::INFINITY, 6, false).entries.is_empty());
        assert!(compute_axis_values(0.0, 10.0, 0, false).entries.is_empty());
    }

    #[test]
    fn entries_never_contain_negative_zero() {
        let values = compute_axis_values(-10.0, 10.0, 4, false);
        assert!(values.entries.iter().all(|v| *v != 0.0 || v.is_sign_positive()));
        assert!(values.entries.contains(&0.0));
    }

    #[test]
    fn significant_rounding() {
        assert_eq!(round_to_next_significant(16.67), 20.0);
        assert_eq!(round_to_next_significant(0.0234), 0.02);
        assert_eq!(round_to_next_significant(f64::NAN), 0.0);
        assert_eq!(decimals_for_interval(0.25), 1);
        assert_eq!(decimals_for_interval(0.02), 2);
        assert!(next_up(1.0) > 1.0);
        assert!(next_up(-1.0) > -1.0);
    }
}
