use crate::constants::DAILY_STATS_LIMIT;
use rusqlite::{params, Connection, Result};

/// Pomodoro totals for one calendar day (UTC), derived on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyStat {
    /// `YYYY-MM-DD`
    pub date: String,
    pub pomodoros: i64,
    pub work_minutes: i64,
    pub rest_minutes: i64,
}

impl DailyStat {
    /// Totals per start date, most recent first, capped at [`DAILY_STATS_LIMIT`] days.
    pub fn recent(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT DATE(data_inicio) AS data,
                    COUNT(*),
                    SUM(duracao_trabalho),
                    SUM(duracao_descanso)
             FROM pomodoros
             GROUP BY DATE(data_inicio)
             ORDER BY data DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![DAILY_STATS_LIMIT], |row| {
            Ok(Self {
                date: row.get(0)?,
                pomodoros: row.get(1)?,
                work_minutes: row.get(2)?,
                rest_minutes: row.get(3)?,
            })
        })?;

        rows.collect()
    }
}
