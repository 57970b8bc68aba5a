use rusqlite::{params, Connection, OptionalExtension};

use super::parse_timestamp;
use crate::db::DatabaseError;
use crate::models::Specialty;

pub fn list_specialties(conn: &Connection) -> Result<Vec<Specialty>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, created_at
         FROM specialties
         ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Specialty {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: parse_timestamp(row.get::<_, Option<String>>(2)?),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Insert a specialty unless one with the same name exists.
/// Returns `true` when a row was written.
pub fn insert_specialty_if_absent(conn: &Connection, name: &str) -> Result<bool, DatabaseError> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO specialties (name) VALUES (?1)",
        params![name],
    )?;
    Ok(inserted > 0)
}

/// Resolve specialty names to ids by exact name match.
///
/// Returns the distinct matched ids in request order, plus every name that
/// matched nothing.
pub fn resolve_specialty_ids(
    conn: &Connection,
    names: &[String],
) -> Result<(Vec<i64>, Vec<String>), DatabaseError> {
    let mut stmt = conn.prepare("SELECT id FROM specialties WHERE name = ?1")?;

    let mut ids = Vec::with_capacity(names.len());
    let mut unmatched = Vec::new();

    for name in names {
        let found = stmt
            .query_row(params![name], |row| row.get::<_, i64>(0))
            .optional()?;
        match found {
            Some(id) if !ids.contains(&id) => ids.push(id),
            Some(_) => {}
            None => unmatched.push(name.clone()),
        }
    }

    Ok((ids, unmatched))
}
