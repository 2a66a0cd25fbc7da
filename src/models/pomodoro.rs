use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result, Row};
use uuid::Uuid;

/// One completed work/rest cycle. Timing happens on the client; the cycle
/// is recorded after the fact and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Pomodoro {
    pub id: String,
    /// Plain reference to a task id, not checked against the tasks table.
    pub task_id: String,
    pub work_minutes: i32,
    pub rest_minutes: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl Pomodoro {
    pub fn new(
        task_id: &str,
        work_minutes: i32,
        rest_minutes: i32,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            task_id: task_id.to_string(),
            work_minutes,
            rest_minutes,
            started_at,
            ended_at,
        }
    }

    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            task_id: row.get(1)?,
            work_minutes: row.get(2)?,
            rest_minutes: row.get(3)?,
            started_at: row.get(4)?,
            ended_at: row.get(5)?,
        })
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO pomodoros (id, tarefa_id, duracao_trabalho, duracao_descanso, data_inicio, data_fim)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                self.id,
                self.task_id,
                self.work_minutes,
                self.rest_minutes,
                self.started_at,
                self.ended_at,
            ],
        )?;
        Ok(())
    }

    pub fn find_by_task(conn: &Connection, task_id: &str) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, tarefa_id, duracao_trabalho, duracao_descanso, data_inicio, data_fim
             FROM pomodoros WHERE tarefa_id = ?1",
        )?;
        let rows = stmt.query_map(params![task_id], Self::from_row)?;
        rows.collect()
    }
}
