use async_trait::async_trait;

use crate::domain::database::errors::DatabaseAdminError;
use crate::domain::database::models::ConnectionStatus;
use crate::domain::database::models::DatabaseName;

/// Port for database administration service operations.
#[async_trait]
pub trait DatabaseAdminServicePort: Send + Sync + 'static {
    /// List the databases hosted by the server, sorted by name.
    ///
    /// # Arguments
    /// * `exclude_system` - Leave out the maintenance and template databases
    ///
    /// # Errors
    /// * `Unavailable` - Server cannot be reached
    /// * `Database` - Query failed
    async fn list_databases(
        &self,
        exclude_system: bool,
    ) -> Result<Vec<DatabaseName>, DatabaseAdminError>;

    /// Check that the server answers.
    ///
    /// # Errors
    /// * `Unavailable` - Server cannot be reached
    async fn test_connection(&self) -> Result<ConnectionStatus, DatabaseAdminError>;
}

/// Read-only access to the server's catalog.
#[async_trait]
pub trait DatabaseCatalog: Send + Sync + 'static {
    /// Names of every database on the server, templates included.
    ///
    /// # Errors
    /// * `Unavailable` - Server cannot be reached
    /// * `Database` - Query failed
    async fn list_database_names(&self) -> Result<Vec<String>, DatabaseAdminError>;

    /// Round trip to the server.
    ///
    /// # Errors
    /// * `Unavailable` - Server cannot be reached
    async fn ping(&self) -> Result<(), DatabaseAdminError>;
}
