use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rusqlite::{Connection, params};

use crate::model::{DATE_FORMAT, Idea, SortMode};

/// Error type for record store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    #[error("no idea with id {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// SQLite-backed table of idea records. All operations are immediately
/// durable; `set_positions` is the only multi-record write and applies
/// inside a single transaction.
pub struct IdeaStore {
    conn: Connection,
}

impl IdeaStore {
    /// Open (or create) a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::init_with_connection(conn)
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init_with_connection(conn)
    }

    fn init_with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS ideas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                position INTEGER NOT NULL,
                created_date TEXT NOT NULL,
                notes TEXT NOT NULL,
                archived INTEGER NOT NULL DEFAULT 0
            );
            ",
        )?;
        Ok(IdeaStore { conn })
    }

    /// Insert a new idea, appended at the end of the manual order
    /// (position = max existing + 1, or 0 for an empty table), dated
    /// today and not archived. Returns the assigned id.
    pub fn insert(&self, title: &str, notes: &str) -> Result<i64, StoreError> {
        let max_pos: Option<i64> =
            self.conn
                .query_row("SELECT MAX(position) FROM ideas", [], |row| row.get(0))?;
        let position = max_pos.map_or(0, |p| p + 1);
        let created_date = Local::now().date_naive().format(DATE_FORMAT).to_string();

        self.conn.execute(
            "INSERT INTO ideas (title, position, created_date, notes, archived)
             VALUES (?1, ?2, ?3, ?4, 0)",
            params![title, position, created_date, notes],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Delete an idea by id. Remaining positions are left untouched
    /// (gaps are tolerated; the position scan stays stable).
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let n = self
            .conn
            .execute("DELETE FROM ideas WHERE id = ?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Update the title and notes of an idea.
    pub fn update_fields(&self, id: i64, title: &str, notes: &str) -> Result<(), StoreError> {
        let n = self.conn.execute(
            "UPDATE ideas SET title = ?1, notes = ?2 WHERE id = ?3",
            params![title, notes, id],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Set the archived flag of an idea.
    pub fn set_archived(&self, id: i64, archived: bool) -> Result<(), StoreError> {
        let n = self.conn.execute(
            "UPDATE ideas SET archived = ?1 WHERE id = ?2",
            params![archived as i64, id],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Full ordered scan of all ideas in the given sort mode.
    pub fn list(&self, sort: SortMode) -> Result<Vec<Idea>, StoreError> {
        let sql = format!(
            "SELECT id, title, position, created_date, notes, archived
             FROM ideas ORDER BY {}",
            sort.order_clause()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_idea)?;
        let mut ideas = Vec::new();
        for row in rows {
            ideas.push(row?);
        }
        Ok(ideas)
    }

    /// Rewrite positions so that each id in `ids` gets its index,
    /// 0-based. Applied atomically: either the whole new order becomes
    /// visible or none of it does.
    pub fn set_positions(&mut self, ids: &[i64]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        for (position, id) in ids.iter().enumerate() {
            tx.execute(
                "UPDATE ideas SET position = ?1 WHERE id = ?2",
                params![position as i64, id],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn row_to_idea(row: &rusqlite::Row<'_>) -> rusqlite::Result<Idea> {
    let date_text: String = row.get(3)?;
    let created_date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Idea {
        id: row.get(0)?,
        title: row.get(1)?,
        position: row.get(2)?,
        created_date,
        notes: row.get(4)?,
        archived: row.get::<_, i64>(5)? != 0,
    })
}
