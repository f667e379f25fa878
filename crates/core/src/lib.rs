//! Core business logic for SimuCredito.
//!
//! This crate contains pure composition logic with ZERO network dependencies.
//! Simulation results arrive fully computed; this crate lays them out,
//! renders them, and hands them between views.
//!
//! # Modules
//!
//! - `simulation` - Simulation result model and the draft exchange slot
//! - `reports` - Page layout and section rendering of the simulation report
//! - `export` - PDF rendering and artifact naming
//! - `storage` - Persistence of exported artifacts

pub mod export;
pub mod reports;
pub mod simulation;
pub mod storage;
