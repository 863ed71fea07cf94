//! Presentational components for the PubCash dashboards.
//!
//! Everything here renders props; none of it talks to the backend or reads
//! the session.

pub mod components;

pub use components::*;
