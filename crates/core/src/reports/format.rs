//! Cell text for every numeric and descriptive value in the report.

use rust_decimal::Decimal;
use simucredito_shared::types::{Currency, Money, NumberFormat, Precision, format_percent};

use super::labels::ReportLabels;
use crate::simulation::{KeyIndicators, PaymentRow, Summary};

/// Turns simulation values into printed cell text.
///
/// Missing values print as the zero of their category.
#[derive(Debug, Clone)]
pub struct CellFormatter<'a> {
    number_format: NumberFormat,
    currency: Currency,
    labels: &'a ReportLabels,
}

impl<'a> CellFormatter<'a> {
    /// Creates a formatter.
    #[must_use]
    pub fn new(number_format: NumberFormat, currency: Currency, labels: &'a ReportLabels) -> Self {
        Self {
            number_format,
            currency,
            labels,
        }
    }

    /// `S/ 1,234.567`: grouped, up to three decimals.
    #[must_use]
    pub fn money(&self, value: Option<Decimal>) -> String {
        Money::new(value.unwrap_or_default(), self.currency)
            .format(&self.number_format, Precision::AMOUNT)
    }

    /// `S/ 1,234.50`: grouped, exactly two decimals.
    #[must_use]
    pub fn money_fixed2(&self, value: Option<Decimal>) -> String {
        Money::new(value.unwrap_or_default(), self.currency)
            .format(&self.number_format, Precision::Exactly(2))
    }

    /// `12.35%` from a value already in percentage points.
    #[must_use]
    pub fn percent_points(&self, value: Option<Decimal>) -> String {
        format_percent(value.unwrap_or_default(), 2)
    }

    /// `0.8300%` from a monthly rate expressed as a fraction.
    #[must_use]
    pub fn tem(&self, rate: Decimal) -> String {
        format_percent(rate * Decimal::ONE_HUNDRED, 4)
    }

    /// The description, or the locale placeholder when missing or blank.
    #[must_use]
    pub fn grace(&self, description: Option<&str>) -> String {
        description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(self.labels.no_grace)
            .to_string()
    }

    /// Label/value pairs of the summary table.
    #[must_use]
    pub fn summary_rows(&self, summary: Option<&Summary>) -> Vec<Vec<String>> {
        let s = summary.cloned().unwrap_or_default();
        let values = [
            s.property_value,
            s.state_contribution,
            s.initial_payment,
            s.financing_amount,
        ];
        self.labels
            .summary_rows
            .iter()
            .zip(values)
            .map(|(label, value)| vec![(*label).to_string(), self.money(value)])
            .collect()
    }

    /// Label/value pairs of the indicators table.
    #[must_use]
    pub fn indicator_rows(&self, indicators: Option<&KeyIndicators>) -> Vec<Vec<String>> {
        let k = indicators.cloned().unwrap_or_default();
        let values = [
            self.money_fixed2(k.monthly_payment),
            self.percent_points(k.tcea),
            self.percent_points(k.cok),
            self.money(k.van),
            self.percent_points(k.tir),
            self.money(k.total_interest),
        ];
        self.labels
            .indicator_rows
            .iter()
            .zip(values)
            .map(|(label, value)| vec![(*label).to_string(), value])
            .collect()
    }

    /// The 14 cells of one amortization row, in column order.
    #[must_use]
    pub fn payment_cells(&self, row: &PaymentRow) -> Vec<String> {
        let amount = |value: Decimal| self.money(Some(value));
        vec![
            row.payment_number.to_string(),
            self.tem(row.tem),
            self.grace(row.grace_period_description.as_deref()),
            amount(row.initial_balance),
            amount(row.interest),
            amount(row.payment),
            amount(row.principal),
            amount(row.life_insurance),
            amount(row.property_insurance),
            amount(row.commissions),
            amount(row.admin_costs),
            amount(row.delivery_costs),
            amount(row.final_balance),
            amount(row.cash_flow),
        ]
    }
}
