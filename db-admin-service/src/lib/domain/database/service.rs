use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::domain::database::errors::DatabaseAdminError;
use crate::domain::database::models::ConnectionStatus;
use crate::domain::database::models::DatabaseName;
use crate::domain::database::ports::DatabaseAdminServicePort;
use crate::domain::database::ports::DatabaseCatalog;

/// Domain service implementation for database administration.
pub struct DatabaseAdminService<DC>
where
    DC: DatabaseCatalog,
{
    catalog: Arc<DC>,
}

impl<DC> DatabaseAdminService<DC>
where
    DC: DatabaseCatalog,
{
    pub fn new(catalog: Arc<DC>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<DC> DatabaseAdminServicePort for DatabaseAdminService<DC>
where
    DC: DatabaseCatalog,
{
    async fn list_databases(
        &self,
        exclude_system: bool,
    ) -> Result<Vec<DatabaseName>, DatabaseAdminError> {
        let mut names: Vec<DatabaseName> = self
            .catalog
            .list_database_names()
            .await?
            .into_iter()
            .map(DatabaseName::new)
            .filter(|name| !(exclude_system && name.is_system()))
            .collect();

        names.sort();
        names.dedup();

        tracing::debug!(count = names.len(), exclude_system, "Databases listed");

        Ok(names)
    }

    async fn test_connection(&self) -> Result<ConnectionStatus, DatabaseAdminError> {
        let started = Instant::now();

        if let Err(e) = self.catalog.ping().await {
            tracing::warn!(error = %e, "Database ping failed");
            return Err(e);
        }

        Ok(ConnectionStatus {
            latency: started.elapsed(),
        })
    }
}
