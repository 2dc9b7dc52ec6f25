//! Connection provider: one fresh PostgreSQL session per request.

use sqlx::postgres::PgConnection;
use sqlx::Connection as _;

use crate::error::ServiceError;

/// Opens a new database connection on demand.
///
/// Deliberately not a pool: every call to [`Connector::acquire`]
/// establishes a new network session, and the caller releases it exactly
/// once per request, explicitly via [`sqlx::Connection::close`] on
/// success paths or by drop on error paths (dropping a `PgConnection`
/// also terminates the session).
#[derive(Debug, Clone)]
pub struct Connector {
    database_url: String,
}

impl Connector {
    /// Creates a connector for the given connection URL.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Opens a fresh connection to the store.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Connection`] when the store is unreachable
    /// or the credentials are invalid.
    pub async fn acquire(&self) -> Result<PgConnection, ServiceError> {
        tracing::debug!("opening database connection");
        PgConnection::connect(&self.database_url)
            .await
            .map_err(|e| ServiceError::Connection(e.to_string()))
    }

    /// Connectivity self-test: opens a session, asks the store for its
    /// version string, and closes the session.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Connection`] when the store is unreachable
    /// and [`ServiceError::Persistence`] when the probe statement fails.
    pub async fn probe(&self) -> Result<String, ServiceError> {
        let mut conn = self.acquire().await?;
        let version = sqlx::query_scalar::<_, String>("SELECT version()")
            .fetch_one(&mut conn)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        let _ = conn.close().await;

        Ok(version)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acquire_surfaces_connection_error() {
        // Port 1 is never a PostgreSQL listener; the connect attempt is
        // refused immediately.
        let connector = Connector::new("postgres://u:p@127.0.0.1:1/none");
        let result = connector.acquire().await;

        let Err(err) = result else {
            panic!("expected connection failure");
        };
        assert!(matches!(err, ServiceError::Connection(_)));
    }
}
