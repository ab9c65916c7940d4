//! Vehicle emissions estimates and keyword-scored car-problem advice.
//!
//! The two computations live in [`emissions`] and [`diagnosis`]; both read only
//! static tables and take their randomness from the caller. The remaining
//! modules carry the service plumbing shared with the HTTP binary.

pub mod catalog;
pub mod config;
pub mod diagnosis;
pub mod emissions;
pub mod error;
pub mod forms;
pub mod history;
pub mod rng;
pub mod telemetry;
