//! Service layer: per-request orchestration of store operations.
//!
//! [`PersonaService`] sits between the HTTP handlers and the persistence
//! layer. Every method acquires its own connection, runs one statement
//! (inside a transaction for writes), and releases the connection on
//! every exit path.

pub mod persona_service;

pub use persona_service::PersonaService;
