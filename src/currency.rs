//! Display currencies and the static INR exchange-rate table.

/// Currency all price tables are denominated in.
pub const BASE_CURRENCY_CODE: &str = "INR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Inr,
    Usd,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Inr, Currency::Usd, Currency::Cad];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Cad => "$",
        }
    }

    /// Label shown on the currency picker buttons.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Inr => "INR (₹)",
            Currency::Usd => "USD ($)",
            Currency::Cad => "CAD ($)",
        }
    }

    /// Multiplier from INR.
    pub fn rate_from_inr(self) -> f64 {
        match self {
            Currency::Inr => 1.0,
            Currency::Usd => 0.012,
            Currency::Cad => 0.016,
        }
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }
}

/// Convert an INR amount into the currency named by `code`. Unknown codes
/// pass the amount through unchanged.
pub fn convert_from_inr(amount_inr: f64, code: &str) -> f64 {
    match Currency::from_code(code) {
        Some(currency) => amount_inr * currency.rate_from_inr(),
        None => amount_inr,
    }
}

/// Two decimal places with thousands separators, e.g. `12,345.68`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_convert() {
        assert_eq!(convert_from_inr(100_000.0, "INR"), 100_000.0);
        assert_eq!(convert_from_inr(100_000.0, "USD"), 1_200.0);
        assert_eq!(convert_from_inr(100_000.0, "CAD"), 1_600.0);
    }

    #[test]
    fn unknown_code_passes_through() {
        assert_eq!(convert_from_inr(123.0, "EUR"), 123.0);
        assert_eq!(convert_from_inr(123.0, ""), 123.0);
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("INR"), Some(Currency::Inr));
        assert_eq!(Currency::from_code("GBP"), None);
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(950.5), "950.50");
        assert_eq!(format_amount(12_345.678), "12,345.68");
        assert_eq!(format_amount(1_234_567.0), "1,234,567.00");
    }
}
