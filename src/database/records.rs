use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{Connection, params};

use super::DatabasePool;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn upsert_user(conn: &Connection, user_id: i64) -> rusqlite::Result<usize> {
    conn.execute("INSERT OR IGNORE INTO users (user_id) VALUES (?1)", [user_id])
}

pub fn upsert_group(conn: &Connection, chat_id: i64, title: &str) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT OR IGNORE INTO groups (chat_id, title) VALUES (?1, ?2)",
        params![chat_id, title],
    )
}

pub fn upsert_admin(conn: &Connection, user_id: i64) -> rusqlite::Result<usize> {
    conn.execute("INSERT OR IGNORE INTO admins (user_id) VALUES (?1)", [user_id])
}

pub fn append_command_log(conn: &Connection, user_id: i64, command: &str) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO command_stats (user_id, command) VALUES (?1, ?2)",
        params![user_id, command],
    )
}

pub fn increment_activity(conn: &Connection, user_id: i64, date: NaiveDate) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO user_activity (user_id, date, actions_count) VALUES (?1, ?2, 1)
         ON CONFLICT(user_id, date) DO UPDATE SET actions_count = actions_count + 1",
        params![user_id, date.format(DATE_FORMAT).to_string()],
    )
}

fn collect_ids(conn: &Connection, sql: &str) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare(sql)?;
    let ids_iter = stmt.query_map([], |row| row.get::<_, i64>(0))?;
    let mut ids = Vec::new();
    for id in ids_iter {
        ids.push(id?);
    }
    Ok(ids)
}

/// Totals shown on the admin stats screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub users: i64,
    pub groups: i64,
    pub admins: i64,
    pub active_today: i64,
}

impl DatabasePool {
    pub async fn upsert_user(&self, user_id: i64) -> Result<()> {
        self.execute_with_timeout(move |conn| upsert_user(conn, user_id)).await?;
        Ok(())
    }

    pub async fn upsert_group(&self, chat_id: i64, title: String) -> Result<()> {
        self.execute_with_timeout(move |conn| upsert_group(conn, chat_id, &title)).await?;
        Ok(())
    }

    pub async fn upsert_admin(&self, user_id: i64) -> Result<()> {
        self.execute_with_timeout(move |conn| upsert_admin(conn, user_id)).await?;
        Ok(())
    }

    pub async fn append_command_log(&self, user_id: i64, command: String) -> Result<()> {
        self.execute_with_timeout(move |conn| append_command_log(conn, user_id, &command))
            .await?;
        Ok(())
    }

    pub async fn increment_activity(&self, user_id: i64, date: NaiveDate) -> Result<()> {
        self.execute_with_timeout(move |conn| increment_activity(conn, user_id, date))
            .await?;
        Ok(())
    }

    /// Audit entry plus today's activity bump for one interaction.
    pub async fn record_interaction(&self, user_id: i64, tag: &str) -> Result<()> {
        let today = chrono::Local::now().date_naive();
        self.append_command_log(user_id, tag.to_string()).await?;
        self.increment_activity(user_id, today).await
    }

    pub async fn list_users(&self) -> Result<Vec<i64>> {
        self.execute_with_timeout(|conn| collect_ids(conn, "SELECT user_id FROM users ORDER BY rowid"))
            .await
    }

    pub async fn list_groups(&self) -> Result<Vec<i64>> {
        self.execute_with_timeout(|conn| collect_ids(conn, "SELECT chat_id FROM groups ORDER BY rowid"))
            .await
    }

    pub async fn load_admin_ids(&self) -> Result<Vec<i64>> {
        self.execute_with_timeout(|conn| collect_ids(conn, "SELECT user_id FROM admins"))
            .await
    }

    pub async fn store_summary(&self) -> Result<StoreSummary> {
        let today = chrono::Local::now().date_naive().format(DATE_FORMAT).to_string();
        self.execute_with_timeout(move |conn| {
            let count = |sql: &str| conn.query_row(sql, [], |row| row.get::<_, i64>(0));
            Ok(StoreSummary {
                users: count("SELECT COUNT(*) FROM users")?,
                groups: count("SELECT COUNT(*) FROM groups")?,
                admins: count("SELECT COUNT(*) FROM admins")?,
                active_today: conn.query_row(
                    "SELECT COUNT(*) FROM user_activity WHERE date = ?1",
                    [today],
                    |row| row.get(0),
                )?,
            })
        })
        .await
    }
}
