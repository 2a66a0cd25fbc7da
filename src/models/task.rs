use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use uuid::Uuid;

/// A unit of work that pomodoros are recorded against.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Set once at insert, never updated.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with a fresh id and the current time (not yet saved to database).
    pub fn new(title: &str, description: &str, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            completed,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            completed: row.get::<_, i32>(3)? != 0,
            created_at: row.get(4)?,
        })
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO tasks (id, titulo, descricao, concluida, data_criacao)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.id,
                self.title,
                self.description,
                i32::from(self.completed),
                self.created_at,
            ],
        )?;
        Ok(())
    }

    /// Overwrite title, description and completion. The creation time is left untouched.
    pub fn update(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "UPDATE tasks SET titulo = ?1, descricao = ?2, concluida = ?3 WHERE id = ?4",
            params![
                self.title,
                self.description,
                i32::from(self.completed),
                self.id,
            ],
        )?;
        Ok(())
    }

    pub fn find_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, titulo, descricao, concluida, data_criacao FROM tasks",
        )?;
        let rows = stmt.query_map([], Self::from_row)?;
        rows.collect()
    }

    pub fn find_by_id(conn: &Connection, id: &str) -> Result<Option<Self>> {
        conn.query_row(
            "SELECT id, titulo, descricao, concluida, data_criacao FROM tasks WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// Delete a task by id. Returns whether a row was removed.
    /// Pomodoros that reference the task are kept.
    pub fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[test]
    fn test_new_assigns_id_and_timestamp() {
        let before = Utc::now();
        let task = Task::new("Write report", "", false);

        assert!(!task.id.is_empty());
        assert!(Uuid::parse_str(&task.id).is_ok());
        assert!(task.created_at <= Utc::now());
        assert!(task.created_at >= before.trunc_subsecs(6));
        assert!(!task.completed);
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = Task::new("a", "", false);
        let b = Task::new("b", "", false);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_save_and_find_by_id() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();

        let task = Task::new("Write report", "quarterly numbers", false);
        task.save(conn).unwrap();

        let found = Task::find_by_id(conn, &task.id).unwrap().unwrap();
        assert_eq!(found, task);
    }

    #[test]
    fn test_find_by_id_missing() {
        let (db, _dir) = setup_test_db();
        assert!(Task::find_by_id(db.connection(), "missing").unwrap().is_none());
    }

    #[test]
    fn test_find_all() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();

        assert!(Task::find_all(conn).unwrap().is_empty());

        Task::new("one", "", false).save(conn).unwrap();
        Task::new("two", "", true).save(conn).unwrap();

        let tasks = Task::find_all(conn).unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().any(|t| t.title == "two" && t.completed));
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();

        let mut task = Task::new("Draft", "first pass", false);
        task.save(conn).unwrap();
        let original_created_at = task.created_at;

        task.title = "Final".to_string();
        task.description = String::new();
        task.completed = true;
        task.update(conn).unwrap();

        let found = Task::find_by_id(conn, &task.id).unwrap().unwrap();
        assert_eq!(found.title, "Final");
        assert_eq!(found.description, "");
        assert!(found.completed);
        assert_eq!(found.created_at, original_created_at);
    }

    #[test]
    fn test_delete() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();

        let task = Task::new("Temp", "", false);
        task.save(conn).unwrap();

        assert!(Task::delete(conn, &task.id).unwrap());
        assert!(Task::find_by_id(conn, &task.id).unwrap().is_none());
        assert!(!Task::delete(conn, &task.id).unwrap(), "second delete affects no rows");
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();

        conn.execute(
            "INSERT INTO tasks (id, titulo, descricao, concluida, data_criacao)
             VALUES ('legacy', 'Old task', NULL, 0, '2024-01-01 09:00:00.123+00:00')",
            [],
        )
        .unwrap();

        let found = Task::find_by_id(conn, "legacy").unwrap().unwrap();
        assert_eq!(found.description, "");
        assert_eq!(found.created_at.to_rfc3339(), "2024-01-01T09:00:00.123+00:00");
    }
}
