//! Persistence gateway — straight-line statements over a shared connection.
//!
//! No transactions span multiple calls. Word de-duplication is advisory:
//! `save_word` looks up (content, lang) before inserting, so two concurrent
//! identical requests can race and create duplicate rows. Accepted behavior,
//! not an invariant.

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Dialog, NewDialog, NewWord, Word};

/// Unconditional insert. Returns the store-assigned id.
pub fn insert_dialog(conn: &Connection, dialog: &NewDialog) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO dialogs (lang, content) VALUES (?1, ?2)",
        params![dialog.lang, dialog.content],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_dialog(conn: &Connection, id: i64) -> Result<Option<Dialog>, DatabaseError> {
    let dialog = conn
        .query_row(
            "SELECT id, lang, content FROM dialogs WHERE id = ?1",
            params![id],
            |row| {
                Ok(Dialog {
                    id: row.get(0)?,
                    lang: row.get(1)?,
                    content: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(dialog)
}

/// Look up a word id by its (content, lang) natural key.
pub fn find_word(conn: &Connection, content: &str, lang: &str) -> Result<Option<i64>, DatabaseError> {
    let id = conn
        .query_row(
            "SELECT id FROM words WHERE content = ?1 AND lang = ?2",
            params![content, lang],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// Insert a word unless one with the same (content, lang) already exists,
/// in which case the existing id is returned and no row is created.
pub fn save_word(conn: &Connection, word: &NewWord) -> Result<i64, DatabaseError> {
    if let Some(id) = find_word(conn, &word.content, &word.lang)? {
        return Ok(id);
    }
    conn.execute(
        "INSERT INTO words (lang, content, translation) VALUES (?1, ?2, ?3)",
        params![word.lang, word.content, word.translation],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Record a dialog-word association. Duplicate pairs are a no-op.
pub fn link_dialog_word(conn: &Connection, dialog_id: i64, word_id: i64) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT OR IGNORE INTO dialog_words (dialog_id, word_id) VALUES (?1, ?2)",
        params![dialog_id, word_id],
    )?;
    Ok(())
}

/// All words linked to a dialog, in insertion order.
pub fn words_for_dialog(conn: &Connection, dialog_id: i64) -> Result<Vec<Word>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT w.id, w.lang, w.content, w.translation
         FROM words w
         JOIN dialog_words dw ON dw.word_id = w.id
         WHERE dw.dialog_id = ?1
         ORDER BY w.id ASC",
    )?;

    let rows = stmt.query_map(params![dialog_id], |row| {
        Ok(Word {
            id: row.get(0)?,
            lang: row.get(1)?,
            content: row.get(2)?,
            translation: row.get(3)?,
        })
    })?;

    let mut words = Vec::new();
    for row in rows {
        words.push(row?);
    }
    Ok(words)
}
