use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{info, warn};

use crate::error::{HpoError, Result};
use crate::file_io::read_obo_file;
use crate::structs::Term;
use crate::term_store::TermStore;
use crate::utils::generate_progress_bar_of_length_and_message;
use crate::TermID;

pub const HPO_TABLE: &str = "hpo";
pub const TERM_COLUMNS: [&str; 5] = ["id", "name", "def", "alt_id", "is_a"];
const LIST_SEPARATOR: &str = ";";

/// Term store backed by the `hpo` table written by [`load_obo_into_db`].
pub struct SqliteTermStore {
    conn: Connection,
}

impl SqliteTermStore {
    pub fn open(path: &Path) -> Result<SqliteTermStore> {
        if !path.is_file() {
            return Err(HpoError::MissingDatabase(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        SqliteTermStore::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<SqliteTermStore> {
        let columns = get_table_columns(&conn)?;
        if columns.is_empty() {
            return Err(HpoError::Schema(format!("table {HPO_TABLE} not found")));
        }
        if columns != TERM_COLUMNS {
            return Err(HpoError::Schema(format!(
                "table {HPO_TABLE} has columns {columns:?}, expected {TERM_COLUMNS:?}"
            )));
        }
        Ok(SqliteTermStore { conn })
    }

    pub fn count(&self) -> Result<usize> {
        let query = format!("SELECT COUNT(*) FROM {HPO_TABLE}");
        let count: i64 = self.conn.query_row(&query, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl TermStore for SqliteTermStore {
    fn lookup(&self, term_id: &str) -> Result<Term> {
        let query = format!("SELECT {} FROM {HPO_TABLE} WHERE id = ?1", TERM_COLUMNS.join(", "));
        let mut stmt = self.conn.prepare_cached(&query)?;
        stmt.query_row(params![term_id], row_to_term)
            .optional()?
            .ok_or_else(|| HpoError::NotFound(term_id.to_string()))
    }
}

pub fn get_table_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({HPO_TABLE})"))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    let columns: std::result::Result<Vec<_>, _> = rows.collect();
    Ok(columns?)
}

/// Parses an OBO file and replaces the `hpo` table in `db_path` with its terms.
/// Returns the number of distinct terms written.
pub fn load_obo_into_db(obo_path: &Path, db_path: &Path) -> Result<usize> {
    info!(obo = %obo_path.display(), db = %db_path.display(), "loading ontology");
    let terms = read_obo_file(obo_path)?;
    let mut conn = Connection::open(db_path)?;
    let written = write_terms(&mut conn, &terms)?;
    info!(terms = written, "ontology loaded");
    Ok(written)
}

/// Recreates the `hpo` table and writes `terms` in one transaction; nothing
/// is kept if any insert fails.
pub fn write_terms(conn: &mut Connection, terms: &[Term]) -> Result<usize> {
    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {HPO_TABLE};
         CREATE TABLE {HPO_TABLE}(id text, name text, def text, alt_id text, is_a text,
                                  PRIMARY KEY(id, name));"
    ))?;

    let progress_bar =
        generate_progress_bar_of_length_and_message(terms.len() as u64, "Writing terms:");
    let mut written = 0;
    {
        let mut delete = tx.prepare(&format!("DELETE FROM {HPO_TABLE} WHERE id = ?1"))?;
        let mut insert = tx.prepare(&format!(
            "INSERT INTO {HPO_TABLE} VALUES (?1, ?2, ?3, ?4, ?5)"
        ))?;
        for term in terms {
            if delete.execute(params![term.id])? > 0 {
                warn!(id = %term.id, "duplicate term id, overwriting previous row");
            } else {
                written += 1;
            }
            insert.execute(params![
                term.id,
                term.name,
                term.def,
                join_list(&term.alt_ids),
                join_list(&term.parents),
            ])?;
            progress_bar.inc(1);
        }
    }
    progress_bar.finish();
    tx.commit()?;
    Ok(written)
}

fn row_to_term(row: &Row) -> rusqlite::Result<Term> {
    Ok(Term {
        id: row.get("id")?,
        name: row.get("name")?,
        def: row.get("def")?,
        alt_ids: split_list(row.get("alt_id")?),
        parents: split_list(row.get("is_a")?),
    })
}

fn join_list(values: &[TermID]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(LIST_SEPARATOR))
    }
}

fn split_list(value: Option<String>) -> Vec<TermID> {
    match value {
        Some(joined) => joined
            .split(LIST_SEPARATOR)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect(),
        None => Vec::new(),
    }
}
