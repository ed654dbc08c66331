use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{QueuedMessage, Suggestion};

// ── Work queue ──

pub fn enqueue(conn: &Connection, message_id: &str, body: &str) -> anyhow::Result<()> {
    let enqueued_at = Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO work_queue (message_id, body, enqueued_at) VALUES (?1, ?2, ?3)",
        params![message_id, body, enqueued_at],
    )?;
    Ok(())
}

pub fn receive(conn: &Connection, max: usize) -> anyhow::Result<Vec<QueuedMessage>> {
    let mut stmt = conn.prepare(
        "SELECT handle, message_id, body FROM work_queue ORDER BY handle LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![max as i64], |row| {
        Ok(QueuedMessage {
            handle: row.get(0)?,
            message_id: row.get(1)?,
            body: row.get(2)?,
        })
    })?;

    let mut messages = Vec::new();
    for row in rows {
        messages.push(row?);
    }
    Ok(messages)
}

pub fn delete(conn: &Connection, handle: i64) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM work_queue WHERE handle = ?1", params![handle])?;
    Ok(count > 0)
}

pub fn queue_depth(conn: &Connection) -> anyhow::Result<i64> {
    let depth = conn.query_row("SELECT COUNT(*) FROM work_queue", [], |row| row.get(0))?;
    Ok(depth)
}

// ── Suggestions ──

// OR REPLACE: a redelivered work item rewrites its own records instead of
// failing on the primary key.
pub fn insert_suggestion(conn: &Connection, suggestion: &Suggestion) -> anyhow::Result<()> {
    let created_at = suggestion
        .created_at
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    conn.execute(
        "INSERT OR REPLACE INTO suggestions (id, restaurant_name, address, rating, cuisine, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            suggestion.id,
            suggestion.restaurant_name,
            suggestion.address,
            suggestion.rating,
            suggestion.cuisine,
            created_at,
        ],
    )?;
    Ok(())
}

pub fn list_suggestions(conn: &Connection) -> anyhow::Result<Vec<Suggestion>> {
    let mut stmt = conn.prepare(
        "SELECT id, restaurant_name, address, rating, cuisine, created_at
         FROM suggestions ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        let created_at_str: String = row.get(5)?;
        Ok(Suggestion {
            id: row.get(0)?,
            restaurant_name: row.get(1)?,
            address: row.get(2)?,
            rating: row.get(3)?,
            cuisine: row.get(4)?,
            created_at: NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
                .unwrap_or_else(|_| Utc::now().naive_utc()),
        })
    })?;

    let mut suggestions = Vec::new();
    for row in rows {
        suggestions.push(row?);
    }
    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    #[test]
    fn test_enqueue_receive_delete() {
        let conn = setup_db();
        enqueue(&conn, "m-1", r#"{"a":1}"#).unwrap();
        enqueue(&conn, "m-2", r#"{"a":2}"#).unwrap();

        let messages = receive(&conn, 10).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message_id, "m-1");
        assert_eq!(messages[1].body, r#"{"a":2}"#);

        assert!(delete(&conn, messages[0].handle).unwrap());
        assert_eq!(queue_depth(&conn).unwrap(), 1);
        assert!(!delete(&conn, messages[0].handle).unwrap());
    }

    #[test]
    fn test_receive_respects_batch_limit() {
        let conn = setup_db();
        for i in 0..5 {
            enqueue(&conn, &format!("m-{i}"), "{}").unwrap();
        }
        let messages = receive(&conn, 3).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].message_id, "m-0");
    }

    #[test]
    fn test_insert_suggestion_is_idempotent() {
        let conn = setup_db();
        let now = Utc::now().naive_utc();
        let mut suggestion = Suggestion {
            id: "m-1-1".to_string(),
            restaurant_name: "Han Dynasty".to_string(),
            address: "90 3rd Ave".to_string(),
            rating: 4,
            cuisine: "chinese".to_string(),
            created_at: now,
        };
        insert_suggestion(&conn, &suggestion).unwrap();

        suggestion.rating = 5;
        insert_suggestion(&conn, &suggestion).unwrap();

        let stored = list_suggestions(&conn).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].rating, 5);
    }
}
