use rust_decimal::prelude::*;
use serde::Serialize;

/// Predicted sales for one set of investments.
///
/// Keeps the raw model output next to a two-decimal `Decimal` used for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesEstimate {
    pub raw: f64,
    pub amount: Option<Decimal>,
}

impl SalesEstimate {
    pub fn new(raw: f64) -> Self {
        let amount = Decimal::from_f64_retain(raw)
            .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven));
        Self { raw, amount }
    }

    /// Display form, e.g. `$1,234.56`.
    pub fn formatted(&self) -> String {
        match self.amount {
            Some(amount) => format_currency(amount),
            None => format!("${:.2}", self.raw),
        }
    }
}

impl std::fmt::Display for SalesEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Formats an amount as dollars with a `,` every three integer digits and two decimals.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}
