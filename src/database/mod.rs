use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

pub mod records;

pub use records::StoreSummary;

const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Hands out one short-lived SQLite connection per call.
///
/// Every call opens its own connection on a blocking thread and drops it when
/// the closure returns, so no connection outlives a single store operation.
/// The semaphore caps how many of those connections exist at once.
pub struct DatabasePool {
    path: PathBuf,
    permits: Arc<Semaphore>,
    busy_timeout: Duration,
}

impl DatabasePool {
    pub fn new(path: impl Into<PathBuf>, max_connections: usize) -> Self {
        Self {
            path: path.into(),
            permits: Arc::new(Semaphore::new(max_connections.max(1))),
            busy_timeout: BUSY_TIMEOUT,
        }
    }

    #[cfg(test)]
    fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `f` on a fresh connection whose lock waits give up after the busy
    /// timeout. The call itself is always awaited to the end: an `Err` never
    /// stands for work still running on the blocking thread.
    pub async fn execute_with_timeout<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .context("database pool closed")?;

        let path = self.path.clone();
        let busy_timeout = self.busy_timeout;
        tokio::task::spawn_blocking(move || -> Result<T> {
            // Held until the connection is dropped.
            let _permit = permit;
            let conn = open_connection(&path, busy_timeout)?;
            let value = f(&conn)?;
            Ok(value)
        })
        .await
        .context("sqlite task join failed")?
    }
}

fn open_connection(path: &Path, busy_timeout: Duration) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;
    conn.busy_timeout(busy_timeout)?;
    Ok(conn)
}

/// Creates the schema if missing and seeds the bootstrap admin.
pub fn init_database(path: &Path, bootstrap_admin: i64) -> Result<()> {
    let conn = open_connection(path, BUSY_TIMEOUT)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            user_id     INTEGER PRIMARY KEY,
            first_seen  DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS groups (
            chat_id     INTEGER PRIMARY KEY,
            title       TEXT,
            added_at    DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS admins (
            user_id     INTEGER PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS command_stats (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER,
            command     TEXT,
            timestamp   DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS user_activity (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER,
            date           DATE,
            actions_count  INTEGER DEFAULT 1,
            UNIQUE(user_id, date)
        );
        ",
    )
    .context("failed to create schema")?;

    records::upsert_admin(&conn, bootstrap_admin).context("failed to seed bootstrap admin")?;

    log::info!("Database ready at {}", path.display());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::fresh_db;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_init_seeds_bootstrap_admin() {
        let db = fresh_db(42);
        let admins = db.pool.load_admin_ids().await.unwrap();
        assert_eq!(admins, vec![42]);
    }

    #[tokio::test]
    async fn test_init_is_repeatable() {
        let db = fresh_db(42);
        init_database(db.pool.path(), 42).unwrap();
        init_database(db.pool.path(), 43).unwrap();

        let mut admins = db.pool.load_admin_ids().await.unwrap();
        admins.sort();
        assert_eq!(admins, vec![42, 43]);
    }

    #[tokio::test]
    async fn test_closure_error_is_propagated() {
        let db = fresh_db(1);
        let result = db
            .pool
            .execute_with_timeout(|conn| conn.execute("INSERT INTO missing_table VALUES (1)", []))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_slow_write_is_awaited_to_completion() {
        let db = fresh_db(42);
        let pool = DatabasePool::new(db.pool.path(), 1).with_busy_timeout(Duration::from_millis(50));

        let result = pool
            .execute_with_timeout(|conn| {
                std::thread::sleep(Duration::from_millis(300));
                records::upsert_admin(conn, 99)
            })
            .await;

        assert!(result.is_ok());
        let mut admins = pool.load_admin_ids().await.unwrap();
        admins.sort();
        assert_eq!(admins, vec![42, 99]);
    }

    #[tokio::test]
    async fn test_connection_cap_holds() {
        let db = fresh_db(1);
        let pool = Arc::new(DatabasePool::new(db.pool.path(), 1));
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let mut tasks = Vec::new();
        for _ in 0..4 {
            let pool = pool.clone();
            let active = active.clone();
            let peak = peak.clone();
            tasks.push(tokio::spawn(async move {
                pool.execute_with_timeout(move |_conn| {
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(30));
                    active.fetch_sub(1, Ordering::SeqCst);
                    Ok(())
                })
                .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(peak.load(Ordering::SeqCst), 1);
    }
}
