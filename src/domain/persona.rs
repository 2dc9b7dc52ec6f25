//! Persona record model and partial-update patch.
//!
//! [`Persona`] mirrors one row of the `personas` table. Field names follow
//! the table columns (`nombre`, `apellido`, `edad`, `email`, `fecha`),
//! which are also the JSON wire names: the schema is managed outside this
//! service and the column names are the contract.

/// One row of the `personas` table.
///
/// The identifier is server-generated (`idpersonas`), unique, and
/// immutable; records exist only in the store, never cached between
/// requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Store-generated identifier (`idpersonas` column).
    pub id: i32,
    /// First name. Required.
    pub nombre: String,
    /// Last name. Required.
    pub apellido: String,
    /// Age in years.
    pub edad: Option<i32>,
    /// Email address. Stored as-is, no format validation in this layer.
    pub email: Option<String>,
    /// Date string. Date semantics are not validated by this service.
    pub fecha: Option<String>,
}

/// Insert shape for a new persona: required names, optional rest.
///
/// The identifier is assigned by the store at insert time and is not part
/// of this shape.
#[derive(Debug, Clone)]
pub struct NewPersona {
    /// First name. Required.
    pub nombre: String,
    /// Last name. Required.
    pub apellido: String,
    /// Age in years.
    pub edad: Option<i32>,
    /// Email address.
    pub email: Option<String>,
    /// Date string.
    pub fecha: Option<String>,
}

/// A single bindable value in an update assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    /// Text column value (`nombre`, `apellido`, `email`, `fecha`).
    Text(String),
    /// Integer column value (`edad`).
    Int(i32),
}

/// Sparse patch over a persona: only present fields are applied.
///
/// Invariant: a patch must carry at least one field to be applied; an
/// empty patch is rejected before any statement is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaPatch {
    /// Replacement first name.
    pub nombre: Option<String>,
    /// Replacement last name.
    pub apellido: Option<String>,
    /// Replacement age.
    pub edad: Option<i32>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement date string.
    pub fecha: Option<String>,
}

impl PersonaPatch {
    /// Returns `true` when no field is present in the patch.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.apellido.is_none()
            && self.edad.is_none()
            && self.email.is_none()
            && self.fecha.is_none()
    }

    /// Returns the `(column, value)` assignment list for every present
    /// field, in the fixed column order `nombre`, `apellido`, `edad`,
    /// `email`, `fecha`.
    ///
    /// Statement assembly iterates this list so that column names stay
    /// static identifiers and values stay bind parameters.
    #[must_use]
    pub fn assignments(&self) -> Vec<(&'static str, PatchValue)> {
        let mut out = Vec::new();
        if let Some(nombre) = &self.nombre {
            out.push(("nombre", PatchValue::Text(nombre.clone())));
        }
        if let Some(apellido) = &self.apellido {
            out.push(("apellido", PatchValue::Text(apellido.clone())));
        }
        if let Some(edad) = self.edad {
            out.push(("edad", PatchValue::Int(edad)));
        }
        if let Some(email) = &self.email {
            out.push(("email", PatchValue::Text(email.clone())));
        }
        if let Some(fecha) = &self.fecha {
            out.push(("fecha", PatchValue::Text(fecha.clone())));
        }
        out
    }
}
