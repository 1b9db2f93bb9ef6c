//! Human-readable rendering of USD amounts and percentage shares
//!
//! Every numeric quantity in a view response is carried both raw and
//! rendered; these helpers define the rendered form.

/// Abbreviate a USD amount with a suffix and one decimal place
///
/// `1_234_000_000.0` renders as `$1.2B`. Amounts under a thousand render
/// with no suffix and no decimals.
pub fn format_usd(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.1}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.1}K", value / 1e3)
    } else {
        format!("${:.0}", value)
    }
}

/// Render a USD amount in billions regardless of magnitude
///
/// Stablecoin supply totals always use this form, so a zero total renders
/// as `$0.0B` rather than `$0`.
pub fn format_usd_billions(value: f64) -> String {
    // `+ 0.0` normalizes IEEE negative zero (an empty `Iterator::sum` can
    // yield -0.0) so a zero total renders "$0.0B", not "$-0.0B"
    format!("${:.1}B", (value + 0.0) / 1e9)
}

/// Render a percentage share to one decimal place
pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_suffixes() {
        assert_eq!(format_usd(2_500_000_000_000.0), "$2.5T");
        assert_eq!(format_usd(55_000_000_000.0), "$55.0B");
        assert_eq!(format_usd(1_234_000_000.0), "$1.2B");
        assert_eq!(format_usd(7_500_000.0), "$7.5M");
        assert_eq!(format_usd(1_500.0), "$1.5K");
        assert_eq!(format_usd(999.0), "$999");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn test_format_usd_billions_always_billions() {
        assert_eq!(format_usd_billions(0.0), "$0.0B");
        assert_eq!(format_usd_billions(125_300_000_000.0), "$125.3B");
        assert_eq!(format_usd_billions(500_000_000.0), "$0.5B");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(100.0), "100.0%");
        assert_eq!(format_share(9.09), "9.1%");
        assert_eq!(format_share(0.0), "0.0%");
    }
}
