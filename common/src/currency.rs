/// Display units for taka amounts. Amounts are always stored as whole taka.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TakaUnit {
    /// `৳12,800`
    #[default]
    Taka,
    /// Thousands, `৳450K`
    Thousand,
    /// Lakh (100,000), `৳45.0L`
    Lakh,
}

/// Comma-grouped in threes, e.g. `1234567` → `1,234,567`.
pub fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a taka amount for display in the given unit.
pub fn format_amount(amount: u64, unit: TakaUnit) -> String {
    match unit {
        TakaUnit::Taka => format!("৳{}", group_digits(amount)),
        TakaUnit::Thousand => format!("৳{:.0}K", amount as f64 / 1_000.0),
        TakaUnit::Lakh => format!("৳{:.1}L", amount as f64 / 100_000.0),
    }
}

pub fn format_taka(amount: u64) -> String {
    format_amount(amount, TakaUnit::Taka)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(12_800), "12,800");
        assert_eq!(group_digits(4_500_000), "4,500,000");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_taka(7250), "৳7,250");
        assert_eq!(format_amount(450_000, TakaUnit::Thousand), "৳450K");
        assert_eq!(format_amount(4_500_000, TakaUnit::Lakh), "৳45.0L");
        assert_eq!(format_amount(720_000, TakaUnit::Lakh), "৳7.2L");
    }
}
