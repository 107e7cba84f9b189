//! HTTP request handlers.
//!
//! Controllers turn transport input into validated parameters, run the matching
//! service inside a database session, and convert the result to a response DTO.

pub mod health;
pub mod user;

#[cfg(test)]
mod test;
