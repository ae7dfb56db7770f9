//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of domain port traits:
//!
//! - **http**: reqwest-backed transport for the postal directory and weather
//!   provider
//! - **orchestrator**: remote orchestration service client used by the gateway
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod http;
pub mod orchestrator;
