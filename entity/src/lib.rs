//! SeaORM entity declarations.
//!
//! Each module maps one table. Entities carry column constraints and relation edges only;
//! table creation belongs to the `migration` crate.

pub mod prelude;

pub mod user;
