//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local repositories seeded from JSON fixtures.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business logic.

pub mod memory;
