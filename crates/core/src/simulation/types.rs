//! Simulation data types.
//!
//! Mirrors the JSON produced by the simulations API (camelCase). Every field
//! the backend may omit is an explicit `Option`; monetary amounts of a payment
//! row default to zero when absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A fully computed loan simulation, as shown on the results screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Borrower information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
    /// Financed property information.
    #[serde(default)]
    pub property_info: Option<PropertyInfo>,
    /// Operation summary amounts.
    #[serde(default)]
    pub summary: Option<Summary>,
    /// Key financial indicators.
    #[serde(default)]
    pub key_indicators: Option<KeyIndicators>,
    /// Installment schedule.
    #[serde(default)]
    pub amortization_schedule: Option<AmortizationSchedule>,
}

impl SimulationResult {
    /// Returns the borrower name, if present and non-blank.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client_info
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// Returns the property name, if present and non-blank.
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        self.property_info
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// Returns the schedule rows in display order (empty when absent).
    #[must_use]
    pub fn payments(&self) -> &[PaymentRow] {
        self.amortization_schedule
            .as_ref()
            .map(|schedule| schedule.payments.as_slice())
            .unwrap_or_default()
    }

    /// Replaces the schedule with the given rows.
    #[must_use]
    pub fn with_payments(mut self, payments: Vec<PaymentRow>) -> Self {
        self.amortization_schedule = Some(AmortizationSchedule { payments });
        self
    }
}

/// Borrower information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Financed property information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Property or project name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Operation summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Appraised property value.
    #[serde(default)]
    pub property_value: Option<Decimal>,
    /// Government housing bonus applied to the purchase.
    #[serde(default)]
    pub state_contribution: Option<Decimal>,
    /// Down payment.
    #[serde(default)]
    pub initial_payment: Option<Decimal>,
    /// Loan principal.
    #[serde(default)]
    pub financing_amount: Option<Decimal>,
}

/// Key financial indicators.
///
/// `tcea`, `cok` and `tir` are expressed in percentage points (12.5 means 12.5%).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyIndicators {
    /// Total monthly installment including insurance and fees.
    #[serde(default)]
    pub monthly_payment: Option<Decimal>,
    /// Total effective annual cost.
    #[serde(default)]
    pub tcea: Option<Decimal>,
    /// Opportunity cost of capital.
    #[serde(default)]
    pub cok: Option<Decimal>,
    /// Net present value of the cash flows.
    #[serde(default)]
    pub van: Option<Decimal>,
    /// Internal rate of return of the cash flows.
    #[serde(default)]
    pub tir: Option<Decimal>,
    /// Sum of interest over the life of the loan.
    #[serde(default)]
    pub total_interest: Option<Decimal>,
}

/// Installment schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Rows ordered by payment number.
    #[serde(default)]
    pub payments: Vec<PaymentRow>,
}

/// One installment of the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRow {
    /// 1-based installment number.
    pub payment_number: u32,
    /// Monthly effective rate as a fraction (0.0083 means 0.83%).
    #[serde(default, deserialize_with = "null_as_zero")]
    pub tem: Decimal,
    /// Grace period applied to this installment, if any.
    #[serde(default)]
    pub grace_period_description: Option<String>,
    /// Balance before the installment.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub initial_balance: Decimal,
    /// Interest accrued.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub interest: Decimal,
    /// Installment amount.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub payment: Decimal,
    /// Principal repaid.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub principal: Decimal,
    /// Mortgage life insurance.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub life_insurance: Decimal,
    /// Property insurance.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub property_insurance: Decimal,
    /// Periodic commissions.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub commissions: Decimal,
    /// Administrative costs.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub admin_costs: Decimal,
    /// Statement delivery costs.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub delivery_costs: Decimal,
    /// Balance after the installment.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub final_balance: Decimal,
    /// Borrower cash flow for the period.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub cash_flow: Decimal,
}

/// Reads a row amount, treating `null` like an absent key.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PaymentRow {
    /// Creates a row with the given number and every amount at zero.
    #[must_use]
    pub fn new(payment_number: u32) -> Self {
        Self {
            payment_number,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "clientInfo": {"name": "José Pérez"},
            "propertyInfo": {"name": "Residencial Los Olivos"},
            "summary": {"propertyValue": 100000, "stateContribution": 10000,
                        "initialPayment": 5000, "financingAmount": 85000},
            "keyIndicators": {"monthlyPayment": 812.456, "tcea": 10.25, "tir": 0.81},
            "amortizationSchedule": {"payments": [
                {"paymentNumber": 1, "tem": 0.0083, "initialBalance": 85000, "interest": 705.5,
                 "payment": 812.46, "principal": 106.96, "finalBalance": 84893.04, "cashFlow": -812.46}
            ]}
        }"#;

        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.client_name(), Some("José Pérez"));
        assert_eq!(result.property_name(), Some("Residencial Los Olivos"));
        let summary = result.summary.as_ref().unwrap();
        assert_eq!(summary.financing_amount, Some(dec!(85000)));
        let indicators = result.key_indicators.as_ref().unwrap();
        assert_eq!(indicators.cok, None);
        assert_eq!(indicators.tcea, Some(dec!(10.25)));

        let row = &result.payments()[0];
        assert_eq!(row.payment_number, 1);
        assert_eq!(row.tem, dec!(0.0083));
        assert_eq!(row.grace_period_description, None);
        assert_eq!(row.commissions, Decimal::ZERO);
        assert_eq!(row.cash_flow, dec!(-812.46));
    }

    #[test]
    fn test_null_row_amounts_load_as_zero() {
        let json = r#"{"amortizationSchedule": {"payments": [
            {"paymentNumber": 1, "tem": null, "commissions": null, "payment": 812.46}
        ]}}"#;

        let result: SimulationResult = serde_json::from_str(json).unwrap();
        let row = &result.payments()[0];
        assert_eq!(row.tem, Decimal::ZERO);
        assert_eq!(row.commissions, Decimal::ZERO);
        assert_eq!(row.payment, dec!(812.46));
    }

    #[test]
    fn test_missing_sections_are_none() {
        let result: SimulationResult = serde_json::from_str("{}").unwrap();
        assert!(result.client_name().is_none());
        assert!(result.summary.is_none());
        assert!(result.payments().is_empty());
    }

    #[test]
    fn test_blank_client_name_is_absent() {
        let result = SimulationResult {
            client_info: Some(ClientInfo {
                name: Some("   ".to_string()),
            }),
            ..SimulationResult::default()
        };
        assert!(result.client_name().is_none());
    }

    #[test]
    fn test_with_payments_replaces_schedule() {
        let result = SimulationResult::default().with_payments(vec![PaymentRow::new(1)]);
        assert_eq!(result.payments().len(), 1);
    }
}
