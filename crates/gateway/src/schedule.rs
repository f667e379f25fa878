//! Complete amortization schedules.
//!
//! The report needs every row before composition starts, so these helpers
//! walk the paginated endpoint to the end.

use simucredito_core::simulation::{PaymentRow, SimulationResult};
use simucredito_shared::types::{PageRequest, SimulationId};
use tracing::{debug, info, warn};

use crate::client::SimulationGateway;
use crate::error::GatewayError;

/// Requests pages in order until the server reports the last one.
///
/// Stops on the `last` flag, on an empty page, or once `totalElements` rows
/// have arrived. A page whose rows do not continue past the rows already
/// collected ends the walk and is discarded. A failure on any page aborts the
/// whole fetch.
///
/// # Errors
///
/// Returns the first `GatewayError` encountered, unchanged.
pub async fn fetch_full_schedule<G>(
    gateway: &G,
    id: &SimulationId,
    page_size: u32,
) -> Result<Vec<PaymentRow>, GatewayError>
where
    G: SimulationGateway + ?Sized,
{
    let mut request = PageRequest::new(0, page_size.max(1));
    let mut rows = Vec::new();

    loop {
        let page = gateway.get_amortization_page(id, request).await?;
        if !advances(&rows, &page.content) {
            warn!(
                simulation_id = %id,
                page = request.page,
                "Amortization page repeats earlier rows, stopping"
            );
            break;
        }
        let last = page.is_last();
        let total = page.total_elements;
        rows.extend(page.content);

        debug!(
            simulation_id = %id,
            page = request.page,
            fetched = rows.len(),
            total,
            "Amortization page received"
        );

        if last || (total > 0 && rows.len() as u64 >= total) || request.page == u32::MAX {
            break;
        }
        request = request.next();
    }

    info!(simulation_id = %id, rows = rows.len(), "Amortization schedule fetched");
    Ok(rows)
}

fn advances(collected: &[PaymentRow], page: &[PaymentRow]) -> bool {
    match (collected.last(), page.first()) {
        (Some(previous), Some(first)) => first.payment_number > previous.payment_number,
        _ => true,
    }
}

/// Fetches a simulation with its full schedule, ready for report composition.
///
/// The schedule embedded in the result is used when present; otherwise the
/// paginated endpoint is exhausted.
///
/// # Errors
///
/// Returns the first `GatewayError` encountered, unchanged.
pub async fn load_for_report<G>(
    gateway: &G,
    id: &SimulationId,
    page_size: u32,
) -> Result<SimulationResult, GatewayError>
where
    G: SimulationGateway + ?Sized,
{
    let result = gateway.get_by_id(id).await?;
    if !result.payments().is_empty() {
        return Ok(result);
    }

    let payments = fetch_full_schedule(gateway, id, page_size).await?;
    Ok(result.with_payments(payments))
}
