//! Persona service: connection-per-request CRUD orchestration.

use sqlx::Connection as _;

use crate::domain::{NewPersona, Persona, PersonaPatch};
use crate::error::ServiceError;
use crate::persistence::{Connector, personas};

/// Orchestration layer for all persona operations.
///
/// Stateless between requests: the only field is the [`Connector`], and
/// every method opens a fresh connection scoped to that single call.
/// Writes run inside a transaction that commits on success and rolls back
/// before the error surfaces; the connection is closed explicitly after a
/// successful commit and closed by drop on every error path.
#[derive(Debug, Clone)]
pub struct PersonaService {
    connector: Connector,
}

impl PersonaService {
    /// Creates a new `PersonaService` over the given connector.
    #[must_use]
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }

    /// Inserts a new persona and returns the store-generated identifier.
    ///
    /// Either the row is fully persisted and visible to subsequent reads,
    /// or no row is created.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Connection`] when the store is unreachable
    /// and [`ServiceError::Persistence`] when the insert fails (the
    /// transaction is rolled back first).
    pub async fn create(&self, persona: NewPersona) -> Result<i32, ServiceError> {
        let mut conn = self.connector.acquire().await?;
        let mut tx = conn
            .begin()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        let id = match personas::insert(&mut tx, &persona).await {
            Ok(id) => id,
            Err(err) => {
                let _ = tx.rollback().await;
                return Err(err);
            }
        };

        tx.commit()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        let _ = conn.close().await;

        tracing::info!(id, "persona created");
        Ok(id)
    }

    /// Fetches every persona in the store.
    ///
    /// An empty table yields an empty collection, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Connection`] or
    /// [`ServiceError::Persistence`] on store failure.
    pub async fn list(&self) -> Result<Vec<Persona>, ServiceError> {
        let mut conn = self.connector.acquire().await?;
        let all = personas::fetch_all(&mut conn).await?;
        let _ = conn.close().await;

        Ok(all)
    }

    /// Fetches the persona matching `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PersonaNotFound`] when no row matches, or
    /// [`ServiceError::Connection`] / [`ServiceError::Persistence`] on
    /// store failure.
    pub async fn get(&self, id: i32) -> Result<Persona, ServiceError> {
        let mut conn = self.connector.acquire().await?;
        let persona = personas::fetch_by_id(&mut conn, id).await?;
        let _ = conn.close().await;

        persona.ok_or(ServiceError::PersonaNotFound(id))
    }

    /// Applies a sparse patch to the persona matching `id`.
    ///
    /// Existence is verified first, then the patch is rejected if empty;
    /// all assignments are applied atomically in a single statement.
    /// Fields absent from the patch keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PersonaNotFound`] when no row matches,
    /// [`ServiceError::EmptyPatch`] when the patch carries no fields, or
    /// [`ServiceError::Connection`] / [`ServiceError::Persistence`] on
    /// store failure (the transaction is rolled back first).
    pub async fn update(&self, id: i32, patch: PersonaPatch) -> Result<(), ServiceError> {
        let mut conn = self.connector.acquire().await?;

        if !personas::exists(&mut conn, id).await? {
            return Err(ServiceError::PersonaNotFound(id));
        }
        if patch.is_empty() {
            return Err(ServiceError::EmptyPatch);
        }

        let fields = patch.assignments().len();
        let mut tx = conn
            .begin()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        if let Err(err) = personas::update(&mut tx, id, &patch).await {
            let _ = tx.rollback().await;
            return Err(err);
        }

        tx.commit()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        let _ = conn.close().await;

        tracing::info!(id, fields, "persona updated");
        Ok(())
    }

    /// Removes the persona matching `id`.
    ///
    /// A second delete of the same identifier reports
    /// [`ServiceError::PersonaNotFound`], never a silent success.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PersonaNotFound`] when no row matches, or
    /// [`ServiceError::Connection`] / [`ServiceError::Persistence`] on
    /// store failure (the transaction is rolled back first).
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let mut conn = self.connector.acquire().await?;

        if !personas::exists(&mut conn, id).await? {
            return Err(ServiceError::PersonaNotFound(id));
        }

        let mut tx = conn
            .begin()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        if let Err(err) = personas::delete(&mut tx, id).await {
            let _ = tx.rollback().await;
            return Err(err);
        }

        tx.commit()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        let _ = conn.close().await;

        tracing::info!(id, "persona deleted");
        Ok(())
    }

    /// Reports whether the store answers, returning its version string.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Connection`] or
    /// [`ServiceError::Persistence`] when the store does not answer.
    pub async fn probe_store(&self) -> Result<String, ServiceError> {
        self.connector.probe().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // No PostgreSQL listener ever sits on port 1, so acquire fails fast
    // with a refused connection.
    fn unreachable_service() -> PersonaService {
        PersonaService::new(Connector::new("postgres://u:p@127.0.0.1:1/none"))
    }

    #[tokio::test]
    async fn create_surfaces_connection_error() {
        let service = unreachable_service();
        let persona = NewPersona {
            nombre: "Ana".to_string(),
            apellido: "Gomez".to_string(),
            edad: None,
            email: None,
            fecha: None,
        };

        let Err(err) = service.create(persona).await else {
            panic!("expected connection failure");
        };
        assert!(matches!(err, ServiceError::Connection(_)));
    }

    #[tokio::test]
    async fn update_acquires_before_business_checks() {
        // The connection is scoped to the request and acquired first, so
        // an unreachable store wins over the empty-patch rejection.
        let service = unreachable_service();

        let Err(err) = service.update(1, PersonaPatch::default()).await else {
            panic!("expected connection failure");
        };
        assert!(matches!(err, ServiceError::Connection(_)));
    }
}
