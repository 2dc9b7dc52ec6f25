//! Persona CRUD handlers: create, list, get, update, delete.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    CreatePersonaRequest, CreatePersonaResponse, MessageResponse, PersonaDetailResponse,
    PersonaDto, PersonaListResponse, UpdatePersonaRequest,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ServiceError};

/// `POST /personas/` — Create a new persona.
///
/// # Errors
///
/// Returns [`ServiceError`] when the store is unreachable or the insert
/// fails.
#[utoipa::path(
    post,
    path = "/personas/",
    tag = "Personas",
    summary = "Create a persona",
    description = "Inserts one row; `nombre` and `apellido` are required, the remaining fields default to null. Returns the store-generated identifier.",
    request_body = CreatePersonaRequest,
    responses(
        (status = 200, description = "Persona created", body = CreatePersonaResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_persona(
    State(state): State<AppState>,
    Json(req): Json<CreatePersonaRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = state.persona_service.create(req.into_new_persona()).await?;

    Ok(Json(CreatePersonaResponse {
        message: "persona created successfully".to_string(),
        id,
    }))
}

/// `GET /personas/` — List every persona.
///
/// # Errors
///
/// Returns [`ServiceError`] when the store is unreachable or the read
/// fails.
#[utoipa::path(
    get,
    path = "/personas/",
    tag = "Personas",
    summary = "List personas",
    description = "Returns every row of the table; an empty table yields an empty list, not an error.",
    responses(
        (status = 200, description = "Persona list", body = PersonaListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_personas(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let personas = state
        .persona_service
        .list()
        .await?
        .into_iter()
        .map(PersonaDto::from)
        .collect();

    Ok(Json(PersonaListResponse { personas }))
}

/// `GET /personas/{id}` — Get one persona.
///
/// # Errors
///
/// Returns [`ServiceError::PersonaNotFound`] when the identifier is
/// absent, or another [`ServiceError`] on store failure.
#[utoipa::path(
    get,
    path = "/personas/{id}",
    tag = "Personas",
    summary = "Get a persona",
    description = "Returns the row matching the identifier.",
    params(
        ("id" = i32, Path, description = "Persona identifier"),
    ),
    responses(
        (status = 200, description = "The persona", body = PersonaDetailResponse),
        (status = 404, description = "Persona not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn get_persona(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let persona = state.persona_service.get(id).await?;

    Ok(Json(PersonaDetailResponse {
        persona: PersonaDto::from(persona),
    }))
}

/// `PUT /personas/{id}` — Apply a sparse patch to one persona.
///
/// # Errors
///
/// Returns [`ServiceError::PersonaNotFound`] when the identifier is
/// absent, [`ServiceError::EmptyPatch`] when the body carries no fields,
/// or another [`ServiceError`] on store failure.
#[utoipa::path(
    put,
    path = "/personas/{id}",
    tag = "Personas",
    summary = "Update a persona",
    description = "Applies every present field of the patch in one statement; absent fields keep their stored value. An empty patch is rejected.",
    params(
        ("id" = i32, Path, description = "Persona identifier"),
    ),
    request_body = UpdatePersonaRequest,
    responses(
        (status = 200, description = "Persona updated", body = MessageResponse),
        (status = 400, description = "Empty patch", body = ErrorResponse),
        (status = 404, description = "Persona not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn update_persona(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePersonaRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    state.persona_service.update(id, req.into_patch()).await?;

    Ok(Json(MessageResponse {
        message: "persona updated successfully".to_string(),
    }))
}

/// `DELETE /personas/{id}` — Remove one persona.
///
/// # Errors
///
/// Returns [`ServiceError::PersonaNotFound`] when the identifier is
/// absent (including a repeated delete), or another [`ServiceError`] on
/// store failure.
#[utoipa::path(
    delete,
    path = "/personas/{id}",
    tag = "Personas",
    summary = "Delete a persona",
    description = "Removes the row matching the identifier. Deleting it again reports 404.",
    params(
        ("id" = i32, Path, description = "Persona identifier"),
    ),
    responses(
        (status = 200, description = "Persona deleted", body = MessageResponse),
        (status = 404, description = "Persona not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn delete_persona(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.persona_service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "persona deleted successfully".to_string(),
    }))
}

/// Persona resource routes, registered exactly as the API table lists
/// them (the collection path keeps its trailing slash).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/personas/", get(list_personas).post(create_persona))
        .route(
            "/personas/{id}",
            get(get_persona).put(update_persona).delete(delete_persona),
        )
}
