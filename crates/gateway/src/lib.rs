//! Client side of the simulations API.
//!
//! Every operation is a single HTTP call with no caching, retry or request
//! deduplication. Failures are logged and returned unchanged; the caller
//! decides how to recover.
//!
//! # Modules
//!
//! - `client` - The `SimulationGateway` trait
//! - `http` - reqwest implementation
//! - `schedule` - Fetching a complete amortization schedule page by page
//! - `types` - Request and response payloads

pub mod client;
pub mod error;
pub mod http;
pub mod schedule;
pub mod types;

pub use client::SimulationGateway;
pub use error::GatewayError;
pub use http::HttpSimulationGateway;
pub use schedule::{fetch_full_schedule, load_for_report};
pub use types::{CreatedSimulation, SimulationInput, SimulationSummaryItem};
