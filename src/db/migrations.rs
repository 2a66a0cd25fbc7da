use super::schema::SCHEMA;
use rusqlite::{Connection, Result};

/// Create any missing tables and indexes. Safe to run on every startup.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
