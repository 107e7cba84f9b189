//! Wire-level schemas exchanged with HTTP clients.
//!
//! Input DTOs are deserialized from request bodies and queries and are validated into
//! server params before reaching a service. Output DTOs are the only shape in which
//! persisted data leaves the process.

pub mod api;
pub mod user;
