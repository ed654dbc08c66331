use anyhow::Context;
use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS work_queue (
    handle      INTEGER PRIMARY KEY AUTOINCREMENT,
    message_id  TEXT NOT NULL UNIQUE,
    body        TEXT NOT NULL,
    enqueued_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS suggestions (
    id              TEXT PRIMARY KEY,
    restaurant_name TEXT NOT NULL,
    address         TEXT NOT NULL,
    rating          INTEGER NOT NULL,
    cuisine         TEXT NOT NULL,
    created_at      TEXT NOT NULL
);
";

pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(SCHEMA)
        .context("failed to apply database schema")?;
    Ok(())
}
