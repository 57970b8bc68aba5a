use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{parse_timestamp, resolve_specialty_ids};
use crate::db::DatabaseError;
use crate::models::{Advocate, AdvocateFields, AdvocateSpecialtyRow};

/// Advocates joined to their specialty names, one row per link.
/// Advocates without links produce a single row with a NULL name.
const ADVOCATE_JOIN_SELECT: &str =
    "SELECT a.id, a.first_name, a.last_name, a.city, a.degree,
            a.years_of_experience, a.phone_number, a.created_at, s.name
     FROM advocates a
     LEFT JOIN advocate_specialties l ON l.advocate_id = a.id
     LEFT JOIN specialties s ON s.id = l.specialty_id";

fn map_join_row(row: &Row<'_>) -> rusqlite::Result<AdvocateSpecialtyRow> {
    Ok(AdvocateSpecialtyRow {
        id: row.get(0)?,
        fields: AdvocateFields {
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            city: row.get(3)?,
            degree: row.get(4)?,
            years_of_experience: row.get(5)?,
            phone_number: row.get(6)?,
        },
        created_at: parse_timestamp(row.get::<_, Option<String>>(7)?),
        specialty_name: row.get(8)?,
    })
}

/// Fold flat join rows into one advocate per id.
///
/// Advocates appear in first-seen order; each advocate's specialties keep
/// the order of the rows they came from.
pub fn group_advocate_rows<I>(rows: I) -> Vec<Advocate>
where
    I: IntoIterator<Item = AdvocateSpecialtyRow>,
{
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut advocates: Vec<Advocate> = Vec::new();

    for row in rows {
        let slot = match index.entry(row.id) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                advocates.push(Advocate::from_fields(
                    row.id,
                    row.fields,
                    Vec::new(),
                    row.created_at,
                ));
                *e.insert(advocates.len() - 1)
            }
        };

        if let Some(name) = row.specialty_name {
            advocates[slot].specialties.push(name);
        }
    }

    advocates
}

/// Every advocate with its specialties, ordered by id.
pub fn list_advocates(conn: &Connection) -> Result<Vec<Advocate>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "{ADVOCATE_JOIN_SELECT} ORDER BY a.id ASC, l.rowid ASC"
    ))?;

    let rows = stmt
        .query_map([], map_join_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(group_advocate_rows(rows))
}

pub fn get_advocate(conn: &Connection, id: i64) -> Result<Option<Advocate>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "{ADVOCATE_JOIN_SELECT} WHERE a.id = ?1 ORDER BY l.rowid ASC"
    ))?;

    let rows = stmt
        .query_map(params![id], map_join_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(group_advocate_rows(rows).into_iter().next())
}

/// Link an advocate to the named specialties. Unknown names are skipped.
/// Returns the number of link rows written.
pub(crate) fn link_specialties(
    conn: &Connection,
    advocate_id: i64,
    specialty_names: &[String],
) -> Result<usize, DatabaseError> {
    if specialty_names.is_empty() {
        return Ok(0);
    }

    let (specialty_ids, unmatched) = resolve_specialty_ids(conn, specialty_names)?;
    if !unmatched.is_empty() {
        tracing::warn!(
            advocate_id,
            unmatched = ?unmatched,
            "Unknown specialty names not linked"
        );
    }

    let mut stmt = conn.prepare(
        "INSERT INTO advocate_specialties (advocate_id, specialty_id) VALUES (?1, ?2)",
    )?;
    for specialty_id in &specialty_ids {
        stmt.execute(params![advocate_id, specialty_id])?;
    }

    Ok(specialty_ids.len())
}

/// Insert an advocate and its specialty links in one transaction.
///
/// The returned record echoes `specialty_names` as requested, including
/// names that matched no specialty.
pub fn create_advocate(
    conn: &Connection,
    fields: AdvocateFields,
    specialty_names: &[String],
) -> Result<Advocate, DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let (id, created_at) = tx.query_row(
        "INSERT INTO advocates (first_name, last_name, city, degree, years_of_experience, phone_number)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING id, created_at",
        params![
            fields.first_name,
            fields.last_name,
            fields.city,
            fields.degree,
            fields.years_of_experience,
            fields.phone_number,
        ],
        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?)),
    )?;

    let linked = link_specialties(&tx, id, specialty_names)?;
    tx.commit()?;

    tracing::info!(advocate_id = id, linked, "Advocate created");

    Ok(Advocate::from_fields(
        id,
        fields,
        specialty_names.to_vec(),
        parse_timestamp(created_at),
    ))
}

/// Overwrite an advocate's fields and replace all of its specialty links
/// in one transaction. Nothing changes if the id is unknown.
pub fn update_advocate(
    conn: &Connection,
    id: i64,
    fields: AdvocateFields,
    specialty_names: &[String],
) -> Result<Advocate, DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let created_at = tx
        .query_row(
            "UPDATE advocates
             SET first_name = ?1, last_name = ?2, city = ?3, degree = ?4,
                 years_of_experience = ?5, phone_number = ?6
             WHERE id = ?7
             RETURNING created_at",
            params![
                fields.first_name,
                fields.last_name,
                fields.city,
                fields.degree,
                fields.years_of_experience,
                fields.phone_number,
                id,
            ],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .ok_or_else(|| DatabaseError::NotFound {
            entity_type: "advocate".into(),
            id: id.to_string(),
        })?;

    tx.execute(
        "DELETE FROM advocate_specialties WHERE advocate_id = ?1",
        params![id],
    )?;
    let linked = link_specialties(&tx, id, specialty_names)?;
    tx.commit()?;

    tracing::info!(advocate_id = id, linked, "Advocate updated");

    Ok(Advocate::from_fields(
        id,
        fields,
        specialty_names.to_vec(),
        parse_timestamp(created_at),
    ))
}

/// Delete an advocate. Its links go with it via `ON DELETE CASCADE`.
/// Returns `false` if no row had that id.
pub fn delete_advocate(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let deleted = conn.execute("DELETE FROM advocates WHERE id = ?1", params![id])?;
    if deleted > 0 {
        tracing::info!(advocate_id = id, "Advocate deleted");
    }
    Ok(deleted > 0)
}
