//! Request and response payloads of the simulations API.

use serde::{Deserialize, Serialize};
use simucredito_core::simulation::{
    ClientInfo, KeyIndicators, PropertyInfo, SimulationResult, Summary,
};
use simucredito_shared::types::{Page, SimulationId};

/// Simulator form contents, forwarded to the server as-is.
///
/// The server owns validation and the schedule computation, so the payload
/// stays opaque here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationInput(serde_json::Value);

impl SimulationInput {
    /// Wraps a JSON payload.
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrows the JSON payload.
    #[must_use]
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for SimulationInput {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Response to a create call: the new id plus whatever result the server computed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedSimulation {
    /// Identifier of the stored simulation.
    #[serde(alias = "simulationId")]
    pub id: SimulationId,
    /// Computed result, when the server returns it inline.
    #[serde(flatten)]
    pub result: SimulationResult,
}

/// One entry of the user's simulation history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummaryItem {
    /// Identifier of the stored simulation.
    #[serde(alias = "simulationId")]
    pub id: SimulationId,
    /// Borrower information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
    /// Property information.
    #[serde(default)]
    pub property_info: Option<PropertyInfo>,
    /// Operation summary.
    #[serde(default)]
    pub summary: Option<Summary>,
    /// Key indicators.
    #[serde(default)]
    pub key_indicators: Option<KeyIndicators>,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SimulationSummaryItem {
    /// Borrower name, if present and non-blank.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client_info
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

/// The list endpoint answers either with a bare array or with a page.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse {
    Plain(Vec<SimulationSummaryItem>),
    Paged(Page<SimulationSummaryItem>),
}

impl ListResponse {
    pub(crate) fn into_items(self) -> Vec<SimulationSummaryItem> {
        match self {
            Self::Plain(items) => items,
            Self::Paged(page) => page.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_created_simulation_with_inline_result() {
        let json = r#"{"id": 17, "summary": {"financingAmount": 85000}}"#;
        let created: CreatedSimulation = serde_json::from_str(json).unwrap();

        assert_eq!(created.id.as_str(), "17");
        let summary = created.result.summary.unwrap();
        assert_eq!(summary.financing_amount, Some(dec!(85000)));
    }

    #[test]
    fn test_created_simulation_id_alias() {
        let created: CreatedSimulation =
            serde_json::from_str(r#"{"simulationId": "abc"}"#).unwrap();
        assert_eq!(created.id.as_str(), "abc");
        assert!(created.result.payments().is_empty());
    }

    #[test]
    fn test_list_response_accepts_array_and_page() {
        let plain: ListResponse =
            serde_json::from_str(r#"[{"id": 1, "clientInfo": {"name": "Ana"}}]"#).unwrap();
        let items = plain.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].client_name(), Some("Ana"));

        let paged: ListResponse = serde_json::from_str(
            r#"{"content": [{"id": 1}, {"id": 2}], "totalElements": 2, "totalPages": 1, "number": 0, "size": 10}"#,
        )
        .unwrap();
        assert_eq!(paged.into_items().len(), 2);
    }

    #[test]
    fn test_input_serializes_transparently() {
        let input = SimulationInput::new(serde_json::json!({"propertyValue": 100000}));
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"propertyValue":100000}"#
        );
    }
}
