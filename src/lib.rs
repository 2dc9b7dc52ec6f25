//! # persona-service
//!
//! REST CRUD service over a single `personas` table, backed by
//! PostgreSQL through a connection-per-request pattern.
//!
//! Each request opens a fresh database connection, runs one parameterized
//! statement (inside a transaction for writes), maps rows to a response
//! object, and closes the connection. There is no pooling, no caching,
//! and no shared mutable in-process state.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PersonaService (service/)
//!     │
//!     ├── Persona / PersonaPatch (domain/)
//!     │
//!     └── Connector + personas repository (persistence/)
//!             │
//!             └── PostgreSQL (one fresh session per request)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
