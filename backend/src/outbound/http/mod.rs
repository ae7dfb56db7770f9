//! Reqwest-backed transport shared by every provider call.
//!
//! This module provides the thin HTTP implementation of the `HttpTransport`
//! port used by the postal directory and weather lookups.

mod reqwest_transport;

pub(crate) use reqwest_transport::body_preview;
pub use reqwest_transport::{DEFAULT_USER_AGENT, ReqwestTransport};
