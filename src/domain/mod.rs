//! Domain layer: the persona record model and its sparse patch.
//!
//! This module contains the plain data shapes the service moves between
//! the HTTP surface and the store. Wire serialization lives in the DTO
//! layer; persistence SQL lives in the persistence layer.

pub mod persona;

pub use persona::{NewPersona, PatchValue, Persona, PersonaPatch};
