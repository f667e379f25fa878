//! Gateway trait.

use async_trait::async_trait;
use simucredito_core::simulation::{PaymentRow, SimulationResult};
use simucredito_shared::types::{Page, PageRequest, SimulationId};

use crate::error::GatewayError;
use crate::types::{CreatedSimulation, SimulationInput, SimulationSummaryItem};

/// Operations offered by the simulations API.
///
/// One network call per invocation. Reads are idempotent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SimulationGateway: Send + Sync {
    /// `POST /simulations`
    async fn create(&self, input: &SimulationInput) -> Result<CreatedSimulation, GatewayError>;

    /// `GET /simulations`
    async fn list(&self) -> Result<Vec<SimulationSummaryItem>, GatewayError>;

    /// `GET /simulations/{id}`
    async fn get_by_id(&self, id: &SimulationId) -> Result<SimulationResult, GatewayError>;

    /// `GET /simulations/{id}/amortization?page=&size=`
    ///
    /// Pages are zero-based; `PageRequest::default()` asks for page 0 of size 10.
    async fn get_amortization_page(
        &self,
        id: &SimulationId,
        request: PageRequest,
    ) -> Result<Page<PaymentRow>, GatewayError>;
}
