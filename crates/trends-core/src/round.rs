// File: crates/trends-core/src/round.rs
// Summary: Decimal rounding (half away from zero) for tooltip and label values.

/// Round `value` to `decimals` places, halves away from zero, in decimal terms.
///
/// The shift is done on the shortest decimal representation of `value` rather than
/// by multiplying, so `2.345` rounds to `2.35` even though `2.345 * 100.0` is
/// `234.49999999999997`. Non-finite input is returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let shifted = match format!("{value}e{decimals}").parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return value,
    };
    format!("{}e-{decimals}", shifted.round())
        .parse::<f64>()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(round_to(2.345, 2), 2.35);
        assert_eq!(round_to(-2.345, 2), -2.35);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(1.005, 2), 1.01);
    }

    #[test]
    fn stable_at_target_precision() {
        assert_eq!(round_to(2.0, 0), 2.0);
        for v in [2.35, -7.1, 0.0, 123456.789] {
            let once = round_to(v, 3);
            assert_eq!(round_to(once, 3), once);
        }
    }

    #[test]
    fn non_finite_passthrough() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 1), f64::INFINITY);
    }
}
