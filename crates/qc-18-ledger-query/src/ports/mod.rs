//! # Ports Layer
//!
//! - **Driving Port (Inbound)**: `LedgerQueryApi`, consumed by adapters
//! - **Driven Port (Outbound)**: `LedgerStore`, implemented by storage backends

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerQueryApi;
pub use outbound::LedgerStore;
