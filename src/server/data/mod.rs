//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! the entity representation out of the service and controller layers. They are generic
//! over `ConnectionTrait`, so the same code runs inside a request session's transaction
//! or directly against a connection in tests.

pub mod user;

#[cfg(test)]
mod test;
