//! Loan simulation results and the draft exchange between views.

pub mod draft;
pub mod types;

pub use draft::DraftExchange;
pub use types::{
    AmortizationSchedule, ClientInfo, KeyIndicators, PaymentRow, PropertyInfo, SimulationResult,
    Summary,
};
