//! Repository functions for the `personas` table.
//!
//! One function per statement. Callers hand in the connection (or an open
//! transaction, which derefs to one), so connection scope and commit
//! boundaries stay with the service layer.

use sqlx::postgres::{PgConnection, Postgres};
use sqlx::QueryBuilder;

use crate::domain::{NewPersona, PatchValue, Persona, PersonaPatch};
use crate::error::ServiceError;

/// Row tuple in column order: `idpersonas`, `nombre`, `apellido`, `edad`,
/// `email`, `fecha`.
type PersonaRow = (i32, String, String, Option<i32>, Option<String>, Option<String>);

fn into_persona(row: PersonaRow) -> Persona {
    let (id, nombre, apellido, edad, email, fecha) = row;
    Persona {
        id,
        nombre,
        apellido,
        edad,
        email,
        fecha,
    }
}

/// Inserts one row and returns the store-generated identifier.
///
/// # Errors
///
/// Returns [`ServiceError::Persistence`] on statement failure.
pub async fn insert(conn: &mut PgConnection, persona: &NewPersona) -> Result<i32, ServiceError> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO personas (nombre, apellido, edad, email, fecha) \
         VALUES ($1, $2, $3, $4, $5) RETURNING idpersonas",
    )
    .bind(&persona.nombre)
    .bind(&persona.apellido)
    .bind(persona.edad)
    .bind(&persona.email)
    .bind(&persona.fecha)
    .fetch_one(conn)
    .await
    .map_err(|e| ServiceError::Persistence(e.to_string()))
}

/// Fetches every row of the table.
///
/// # Errors
///
/// Returns [`ServiceError::Persistence`] on statement failure.
pub async fn fetch_all(conn: &mut PgConnection) -> Result<Vec<Persona>, ServiceError> {
    let rows = sqlx::query_as::<_, PersonaRow>(
        "SELECT idpersonas, nombre, apellido, edad, email, fecha \
         FROM personas ORDER BY idpersonas",
    )
    .fetch_all(conn)
    .await
    .map_err(|e| ServiceError::Persistence(e.to_string()))?;

    Ok(rows.into_iter().map(into_persona).collect())
}

/// Fetches the row matching `id`, if any.
///
/// # Errors
///
/// Returns [`ServiceError::Persistence`] on statement failure.
pub async fn fetch_by_id(
    conn: &mut PgConnection,
    id: i32,
) -> Result<Option<Persona>, ServiceError> {
    let row = sqlx::query_as::<_, PersonaRow>(
        "SELECT idpersonas, nombre, apellido, edad, email, fecha \
         FROM personas WHERE idpersonas = $1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(|e| ServiceError::Persistence(e.to_string()))?;

    Ok(row.map(into_persona))
}

/// Returns whether a row with the given identifier exists.
///
/// # Errors
///
/// Returns [`ServiceError::Persistence`] on statement failure.
pub async fn exists(conn: &mut PgConnection, id: i32) -> Result<bool, ServiceError> {
    let row = sqlx::query_scalar::<_, i32>("SELECT idpersonas FROM personas WHERE idpersonas = $1")
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

    Ok(row.is_some())
}

/// Applies every assignment of `patch` to the row matching `id` in a
/// single statement.
///
/// The caller has already verified existence and rejected empty patches.
///
/// # Errors
///
/// Returns [`ServiceError::Persistence`] on statement failure.
pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    patch: &PersonaPatch,
) -> Result<(), ServiceError> {
    let mut builder = build_update(id, patch);
    builder
        .build()
        .execute(conn)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

    Ok(())
}

/// Removes the row matching `id`.
///
/// # Errors
///
/// Returns [`ServiceError::Persistence`] on statement failure.
pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<(), ServiceError> {
    sqlx::query("DELETE FROM personas WHERE idpersonas = $1")
        .bind(id)
        .execute(conn)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

    Ok(())
}

/// Builds the dynamic `UPDATE` statement from the patch's ordered
/// assignment list.
///
/// Column names come from the fixed list in
/// [`PersonaPatch::assignments`]; values are always bind parameters.
fn build_update(id: i32, patch: &PersonaPatch) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE personas SET ");
    {
        let mut assignments = builder.separated(", ");
        for (column, value) in patch.assignments() {
            assignments.push(format!("{column} = "));
            match value {
                PatchValue::Text(text) => assignments.push_bind_unseparated(text),
                PatchValue::Int(int) => assignments.push_bind_unseparated(int),
            };
        }
    }
    builder.push(" WHERE idpersonas = ");
    builder.push_bind(id);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_patch_builds_ordered_assignments() {
        let patch = PersonaPatch {
            nombre: Some("Ana".to_string()),
            apellido: Some("Gomez".to_string()),
            edad: Some(41),
            email: Some("ana@example.com".to_string()),
            fecha: Some("2025-06-01".to_string()),
        };

        let sql = build_update(7, &patch).into_sql();
        assert_eq!(
            sql,
            "UPDATE personas SET nombre = $1, apellido = $2, edad = $3, \
             email = $4, fecha = $5 WHERE idpersonas = $6"
        );
    }

    #[test]
    fn sparse_patch_skips_absent_columns() {
        let patch = PersonaPatch {
            edad: Some(30),
            ..PersonaPatch::default()
        };

        let sql = build_update(3, &patch).into_sql();
        assert_eq!(sql, "UPDATE personas SET edad = $1 WHERE idpersonas = $2");
    }

    #[test]
    fn mixed_patch_keeps_relative_order() {
        let patch = PersonaPatch {
            apellido: Some("Gomez".to_string()),
            fecha: Some("2025-06-01".to_string()),
            ..PersonaPatch::default()
        };

        let sql = build_update(12, &patch).into_sql();
        assert_eq!(
            sql,
            "UPDATE personas SET apellido = $1, fecha = $2 WHERE idpersonas = $3"
        );
    }

    #[test]
    fn row_tuple_maps_into_persona() {
        let persona = into_persona((
            5,
            "Luis".to_string(),
            "Diaz".to_string(),
            None,
            Some("luis@example.com".to_string()),
            None,
        ));

        assert_eq!(persona.id, 5);
        assert_eq!(persona.nombre, "Luis");
        assert_eq!(persona.apellido, "Diaz");
        assert_eq!(persona.edad, None);
        assert_eq!(persona.email.as_deref(), Some("luis@example.com"));
        assert_eq!(persona.fecha, None);
    }
}
