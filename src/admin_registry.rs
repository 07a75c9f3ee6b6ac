use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::database::DatabasePool;
use crate::errors::AdminError;

/// In-memory mirror of the `admins` table.
///
/// Loaded once at startup. Additions go to the table first and only then to
/// the set, so the set never holds an id the table does not.
pub struct AdminRegistry {
    ids: RwLock<HashSet<i64>>,
    db_pool: Arc<DatabasePool>,
}

impl AdminRegistry {
    pub async fn load(db_pool: Arc<DatabasePool>) -> anyhow::Result<Self> {
        let ids: HashSet<i64> = db_pool.load_admin_ids().await?.into_iter().collect();
        Ok(Self {
            ids: RwLock::new(ids),
            db_pool,
        })
    }

    pub async fn is_privileged(&self, user_id: i64) -> bool {
        self.ids.read().await.contains(&user_id)
    }

    pub async fn len(&self) -> usize {
        self.ids.read().await.len()
    }

    /// Returns `true` when `candidate` was not an admin before.
    pub async fn add_admin(&self, operator: i64, candidate: i64) -> Result<bool, AdminError> {
        if !self.is_privileged(operator).await {
            return Err(AdminError::PermissionDenied { operator });
        }

        self.db_pool.upsert_admin(candidate).await?;
        let added = self.ids.write().await.insert(candidate);

        log::info!("Admin {} granted admin rights to {}", operator, candidate);
        Ok(added)
    }
}
