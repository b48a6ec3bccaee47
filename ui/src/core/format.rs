//! Formatting helpers for presenting roster numbers.

/// `12345` -> `"12,345"`.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Signed delta for diff badges: `+20`, `-5`, `0`.
pub fn format_delta(value: i64) -> String {
    if value > 0 {
        format!("+{}", format_count(value))
    } else {
        format_count(value)
    }
}

/// CSS modifier for a delta badge.
pub fn delta_class(value: i64) -> &'static str {
    match value.signum() {
        1 => "delta--up",
        -1 => "delta--down",
        _ => "delta--flat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(-45210), "-45,210");
    }

    #[test]
    fn deltas_carry_a_sign() {
        assert_eq!(format_delta(20), "+20");
        assert_eq!(format_delta(-5), "-5");
        assert_eq!(format_delta(0), "0");
        assert_eq!(delta_class(-5), "delta--down");
    }
}
