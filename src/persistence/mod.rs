//! Persistence layer: connection provider and `personas` table access.
//!
//! Every operation runs over a fresh [`connector::Connector`] connection
//! scoped to a single request; the repository functions in [`personas`]
//! each execute exactly one parameterized statement.

pub mod connector;
pub mod personas;

pub use connector::Connector;
