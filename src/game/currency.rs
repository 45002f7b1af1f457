//! Display currencies and money formatting.
//!
//! The game operates on unscaled base units throughout; the rate multiplier
//! here is applied at render time only and never feeds back into stored
//! balance or verdict thresholds.

/// Supported display currencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Inr,
}

/// All currencies in tab-bar display order.
pub const ALL_CURRENCIES: [Currency; 2] = [Currency::Usd, Currency::Inr];

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    /// Base units → display units. 1 USD = 80 INR for gameplay balance.
    pub fn rate(self) -> i64 {
        match self {
            Currency::Usd => 1,
            Currency::Inr => 80,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    /// Cycle to the other currency (keyboard toggle).
    pub fn toggled(self) -> Self {
        match self {
            Currency::Usd => Currency::Inr,
            Currency::Inr => Currency::Usd,
        }
    }
}

/// Format a base-unit amount in the given currency, e.g. `$1,000` / `₹80,000`.
pub fn format_money(amount: i64, currency: Currency) -> String {
    let scaled = amount * currency.rate();
    if scaled < 0 {
        format!("-{}{}", currency.symbol(), format_with_commas(scaled.unsigned_abs()))
    } else {
        format!("{}{}", currency.symbol(), format_with_commas(scaled as u64))
    }
}

/// Like [`format_money`] but with an explicit `+` on gains, for feedback text.
pub fn format_money_signed(amount: i64, currency: Currency) -> String {
    if amount >= 0 {
        format!("+{}", format_money(amount, currency))
    } else {
        format_money(amount, currency)
    }
}

fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_is_unscaled() {
        assert_eq!(format_money(1_000, Currency::Usd), "$1,000");
        assert_eq!(format_money(50, Currency::Usd), "$50");
        assert_eq!(format_money(0, Currency::Usd), "$0");
    }

    #[test]
    fn inr_scales_by_80() {
        assert_eq!(format_money(1_000, Currency::Inr), "₹80,000");
        assert_eq!(format_money(-50, Currency::Inr), "-₹4,000");
    }

    #[test]
    fn negative_amounts_put_the_sign_before_the_symbol() {
        assert_eq!(format_money(-800, Currency::Usd), "-$800");
        assert_eq!(format_money(-1_234, Currency::Usd), "-$1,234");
    }

    #[test]
    fn signed_formatting() {
        assert_eq!(format_money_signed(50, Currency::Usd), "+$50");
        assert_eq!(format_money_signed(0, Currency::Usd), "+$0");
        assert_eq!(format_money_signed(-200, Currency::Usd), "-$200");
    }

    #[test]
    fn toggle_cycles_both_ways() {
        assert_eq!(Currency::Usd.toggled(), Currency::Inr);
        assert_eq!(Currency::Inr.toggled(), Currency::Usd);
    }

    #[test]
    fn format_with_commas_works() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_currency() -> impl Strategy<Value = Currency> {
        prop_oneof![Just(Currency::Usd), Just(Currency::Inr)]
    }

    proptest! {
        #[test]
        fn prop_commas_strip_back_to_digits(n in 0u64..10_000_000_000) {
            let s = format_with_commas(n);
            let stripped: String = s.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, n.to_string());
        }

        #[test]
        fn prop_format_money_starts_with_sign_or_symbol(
            amount in -100_000i64..100_000,
            currency in arb_currency(),
        ) {
            let s = format_money(amount, currency);
            if amount < 0 {
                prop_assert!(s.starts_with('-'), "got: {}", s);
            } else {
                prop_assert!(s.starts_with(currency.symbol()), "got: {}", s);
            }
        }

        #[test]
        fn prop_scaling_never_changes_the_sign(
            amount in -100_000i64..100_000,
            currency in arb_currency(),
        ) {
            let s = format_money(amount, currency);
            prop_assert_eq!(s.starts_with('-'), amount < 0, "got: {}", s);
        }
    }
}
