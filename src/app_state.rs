//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::PersonaService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Holds no per-request data: the service inside opens and closes a
/// fresh store connection for every call.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Persona service for all CRUD operations and the health probe.
    pub persona_service: Arc<PersonaService>,
}
