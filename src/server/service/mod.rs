//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing the rules of each use case (uniqueness, existence)
//! - **Error Typing**: Turning missing rows and constraint violations into typed errors
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services run on the connection they are given; the caller owns the session and
//! decides whether its work is committed.

pub mod user;

#[cfg(test)]
mod test;
