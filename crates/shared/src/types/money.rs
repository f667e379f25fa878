//! Money type and regional number formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    /// The amount in major currency units.
    pub amount: Decimal,
    /// Currency the amount is printed in.
    pub currency: Currency,
}

/// Currencies a report can be printed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Peruvian Sol
    #[default]
    Pen,
}

impl Currency {
    /// Returns the printed prefix used in reports.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pen => "S/",
        }
    }
}

/// How many fraction digits a formatted number carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Round to at most this many digits and drop trailing zeros.
    UpTo(u32),
    /// Round and pad to exactly this many digits.
    Exactly(u32),
}

impl Precision {
    /// Default precision for plain amounts (three fraction digits at most).
    pub const AMOUNT: Self = Self::UpTo(3);

    const fn digits(self) -> u32 {
        match self {
            Self::UpTo(dp) | Self::Exactly(dp) => dp,
        }
    }
}

/// Regional separators for grouped numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Thousands separator.
    pub group_separator: char,
    /// Decimal separator.
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::ES_PE
    }
}

impl NumberFormat {
    /// Peruvian convention: `1,234,567.89`.
    pub const ES_PE: Self = Self {
        group_separator: ',',
        decimal_separator: '.',
    };

    /// Formats a value with thousands grouping.
    ///
    /// Rounds half away from zero. A value that rounds to zero never carries a sign.
    #[must_use]
    pub fn format(&self, value: Decimal, precision: Precision) -> String {
        let rounded = round(value, precision.digits());
        let text = match precision {
            Precision::UpTo(_) => rounded.normalize().to_string(),
            Precision::Exactly(dp) => format!("{:.*}", dp as usize, rounded),
        };

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let (integer, fraction) = unsigned
            .split_once('.')
            .map_or((unsigned, None), |(i, f)| (i, Some(f)));

        let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group(integer));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

/// Formats a percentage-point value with a fixed number of decimals and no grouping.
#[must_use]
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    format!("{:.*}%", decimals as usize, round(value, decimals))
}

fn round(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Formats as `<symbol> <grouped amount>`, e.g. `S/ 85,000`.
    #[must_use]
    pub fn format(&self, number_format: &NumberFormat, precision: Precision) -> String {
        format!(
            "{} {}",
            self.currency.symbol(),
            number_format.format(self.amount, precision)
        )
    }
}
