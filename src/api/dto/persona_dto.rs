//! Persona DTOs for the create, read, update, and delete endpoints.
//!
//! Wire field names are the `personas` column names (`nombre`,
//! `apellido`, `edad`, `email`, `fecha`); the schema is managed outside
//! this service and the column names are the JSON contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewPersona, Persona, PersonaPatch};

/// Request body for `POST /personas/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePersonaRequest {
    /// First name. Required.
    pub nombre: String,
    /// Last name. Required.
    pub apellido: String,
    /// Age in years. Defaults to null.
    #[serde(default)]
    pub edad: Option<i32>,
    /// Email address. Defaults to null.
    #[serde(default)]
    pub email: Option<String>,
    /// Date string. Defaults to null.
    #[serde(default)]
    pub fecha: Option<String>,
}

impl CreatePersonaRequest {
    /// Converts the request into the domain insert shape.
    #[must_use]
    pub fn into_new_persona(self) -> NewPersona {
        NewPersona {
            nombre: self.nombre,
            apellido: self.apellido,
            edad: self.edad,
            email: self.email,
            fecha: self.fecha,
        }
    }
}

/// Request body for `PUT /personas/{id}`: a sparse patch.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePersonaRequest {
    /// Replacement first name.
    #[serde(default)]
    pub nombre: Option<String>,
    /// Replacement last name.
    #[serde(default)]
    pub apellido: Option<String>,
    /// Replacement age.
    #[serde(default)]
    pub edad: Option<i32>,
    /// Replacement email.
    #[serde(default)]
    pub email: Option<String>,
    /// Replacement date string.
    #[serde(default)]
    pub fecha: Option<String>,
}

impl UpdatePersonaRequest {
    /// Converts the request into the domain patch.
    #[must_use]
    pub fn into_patch(self) -> PersonaPatch {
        PersonaPatch {
            nombre: self.nombre,
            apellido: self.apellido,
            edad: self.edad,
            email: self.email,
            fecha: self.fecha,
        }
    }
}

/// One persona as returned by the read endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaDto {
    /// Store-generated identifier.
    pub id: i32,
    /// First name.
    pub nombre: String,
    /// Last name.
    pub apellido: String,
    /// Age in years.
    pub edad: Option<i32>,
    /// Email address.
    pub email: Option<String>,
    /// Date string.
    pub fecha: Option<String>,
}

impl From<Persona> for PersonaDto {
    fn from(persona: Persona) -> Self {
        Self {
            id: persona.id,
            nombre: persona.nombre,
            apellido: persona.apellido,
            edad: persona.edad,
            email: persona.email,
            fecha: persona.fecha,
        }
    }
}

/// Response body for `POST /personas/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePersonaResponse {
    /// Confirmation message.
    pub message: String,
    /// Identifier assigned by the store.
    pub id: i32,
}

/// Response body for `GET /personas/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaListResponse {
    /// Every persona in the store; empty when the table has no rows.
    pub personas: Vec<PersonaDto>,
}

/// Response body for `GET /personas/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaDetailResponse {
    /// The matching persona.
    pub persona: PersonaDto,
}

/// Confirmation-only response body for update and delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation message.
    pub message: String,
}
