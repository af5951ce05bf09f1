// File: crates/trends-core/src/grid.rs
// Summary: Tick layout helpers.

use crate::round::round_to;

/// Multiples of `step` within `[min, max]`, ascending. Falls back to the two ends
/// when `step` is not positive or would produce an unreasonable number of ticks.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(max >= min) || (max - min) / step > 1000.0 {
        return vec![min, max];
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    let decimals = step_decimals(step);
    (first..=last).map(|k| round_to(k as f64 * step, decimals)).collect()
}

/// Digits after the decimal point in the shortest form of `step` (`0.25` -> 2).
fn step_decimals(step: f64) -> u32 {
    let text = step.to_string();
    text.split_once('.').map_or(0, |(_, frac)| frac.len().min(15) as u32)
}
