//! Rupee formatting with Indian digit grouping.
//!
//! Amounts are rounded to paise and grouped the en-IN way: the last three
//! digits, then pairs (`26,46,000.00`).

/// Currency symbol rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyStyle {
    /// `₹26,46,000.00`
    #[default]
    Symbol,
    /// `Rs. 26,46,000.00`, for terminals without the rupee glyph.
    Ascii,
}

impl CurrencyStyle {
    #[must_use]
    pub const fn for_ascii_only(ascii_only: bool) -> Self {
        if ascii_only { Self::Ascii } else { Self::Symbol }
    }

    pub(crate) const fn prefix(self) -> &'static str {
        match self {
            Self::Symbol => "₹",
            Self::Ascii => "Rs. ",
        }
    }

    const fn unavailable(self) -> &'static str {
        match self {
            Self::Symbol => "—",
            Self::Ascii => "-",
        }
    }
}

#[must_use]
pub fn format_inr(value: f64, style: CurrencyStyle) -> String {
    if !value.is_finite() {
        return style.unavailable().to_string();
    }

    // f64::round is half-away-from-zero, matching how receipts round paise.
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    let fixed = format!("{rounded:.2}");
    let (rupees, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{sign}{}{}.{paise}", style.prefix(), group_indian(rupees))
}

/// Group a run of ASCII digits the en-IN way.
pub(crate) fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::{CurrencyStyle, format_inr, group_indian};

    #[test]
    fn groups_last_three_then_pairs() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("63750"), "63,750");
        assert_eq!(group_indian("126000"), "1,26,000");
        assert_eq!(group_indian("2646000"), "26,46,000");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_inr(2_646_000.0, CurrencyStyle::Symbol), "₹26,46,000.00");
        assert_eq!(format_inr(1_338.75, CurrencyStyle::Symbol), "₹1,338.75");
        assert_eq!(format_inr(0.0, CurrencyStyle::Symbol), "₹0.00");
    }

    #[test]
    fn rounds_to_paise() {
        assert_eq!(format_inr(10.004, CurrencyStyle::Symbol), "₹10.00");
        assert_eq!(format_inr(10.006, CurrencyStyle::Symbol), "₹10.01");
        assert_eq!(format_inr(999.999, CurrencyStyle::Symbol), "₹1,000.00");
    }

    #[test]
    fn ascii_style_uses_rs_prefix() {
        assert_eq!(format_inr(2_205.0, CurrencyStyle::Ascii), "Rs. 2,205.00");
        assert_eq!(format_inr(f64::NAN, CurrencyStyle::Ascii), "-");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_inr(-1_500.5, CurrencyStyle::Symbol), "-₹1,500.50");
        assert_eq!(format_inr(-0.001, CurrencyStyle::Symbol), "₹0.00");
    }

    #[test]
    fn amounts_beyond_u64_paise_keep_every_digit() {
        assert_eq!(
            format_inr(1e18, CurrencyStyle::Symbol),
            "₹10,00,00,00,00,00,00,00,000.00"
        );
        assert_eq!(
            format_inr(-1e18, CurrencyStyle::Ascii),
            "-Rs. 10,00,00,00,00,00,00,00,000.00"
        );
        assert_ne!(format_inr(1e19, CurrencyStyle::Symbol), format_inr(1e20, CurrencyStyle::Symbol));
    }

    #[test]
    fn non_finite_renders_placeholder() {
        assert_eq!(format_inr(f64::INFINITY, CurrencyStyle::Symbol), "—");
    }
}
