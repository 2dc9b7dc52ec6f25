//! Data Transfer Objects for REST request/response serialization.
//!
//! DTOs own the JSON wire format; conversions into the domain shapes
//! happen here so handlers stay thin.

pub mod persona_dto;

pub use persona_dto::*;
