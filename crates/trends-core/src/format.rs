// File: crates/trends-core/src/format.rs
// Summary: en-US display strings for data labels, tooltips and axis labels.

use crate::round::round_to;

/// Fixed `decimals` places with `,` thousands separators and `.` decimal point.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Value label drawn next to a point: whole number plus suffix.
pub fn data_label(value: f64, suffix: &str) -> String {
    format!("{}{suffix}", group_thousands(round_to(value, 0), 0))
}

/// Tooltip value: one decimal, always shown.
pub fn tooltip_value(value: f64, suffix: &str) -> String {
    format!("{}{suffix}", group_thousands(round_to(value, 1), 1))
}

/// Series name as shown in tooltips: any trailing " (...)" qualifier is dropped.
pub fn tooltip_series_name(name: &str) -> &str {
    name.split(" (").next().unwrap_or(name)
}

/// Category label as shown on the x axis: the first word only ("Q1 2022" -> "Q1").
pub fn category_label(label: &str) -> &str {
    label.split(' ').next().unwrap_or(label)
}

/// Y axis tick text, e.g. `-4%`.
pub fn axis_tick(value: f64, suffix: &str, allow_decimals: bool) -> String {
    if allow_decimals && value.fract() != 0.0 {
        format!("{value}{suffix}")
    } else {
        format!("{}{suffix}", round_to(value, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(-1234.5, 1), "-1,234.5");
        assert_eq!(group_thousands(999.0, 0), "999");
        assert_eq!(group_thousands(-0.04, 1), "0.0");
    }

    #[test]
    fn labels_and_tooltips() {
        assert_eq!(data_label(2.5, "%"), "3%");
        assert_eq!(data_label(-2.5, "%"), "-3%");
        assert_eq!(tooltip_value(4.0, "%"), "4.0%");
        assert_eq!(tooltip_value(1.25, ""), "1.3");
        assert_eq!(tooltip_series_name("Friends (close)"), "Friends");
        assert_eq!(category_label("Q1 2022"), "Q1");
        assert_eq!(axis_tick(-4.0, "%", true), "-4%");
    }
}
