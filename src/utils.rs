//! Small helpers.

/// Format a USD amount with sign and two decimals, e.g. "-$12.50".
pub fn format_usd(v: f64) -> String {
    if v < 0.0 {
        format!("-${:.2}", v.abs())
    } else {
        format!("${:.2}", v)
    }
}

/// Format a ratio as a percentage, e.g. 0.5 -> "50.00%".
pub fn format_pct(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_two_decimals_and_sign() {
        assert_eq!(format_usd(10_000.0), "$10000.00");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-12.5), "-$12.50");
    }

    #[test]
    fn pct_keeps_sign() {
        assert_eq!(format_pct(0.5), "50.00%");
        assert_eq!(format_pct(-0.5), "-50.00%");
        assert_eq!(format_pct(1.0), "100.00%");
    }
}
