//! CSV session store: the persistence adapter for session files.
//!
//! One flat directory holds one CSV file per saved session. Saving
//! denormalizes price-book figures into every row as of that moment;
//! loading replaces the ledger in full, re-learns vocabulary from the
//! columns, and restores price-book entries when the numeric columns are
//! present. A load that fails to parse leaves the session untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{PosError, Result};
use crate::order::SessionRow;
use crate::session::Session;

/// Directory-scoped store for session CSV files.
///
/// Names are supplied by the caller (typically `YYYY-MM-DD-N`); the store
/// neither enforces uniqueness nor prevents overwrite. Last write wins.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path for a session name (without the `.csv` suffix).
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", name))
    }

    /// Write the session to `<dir>/<name>.csv`.
    ///
    /// Every row carries sale price, cost, and profit resolved from the
    /// price book by that row's item code at save time. Refuses to write
    /// an empty session. The file is written to a temp path first and
    /// swapped into place.
    pub fn save(&self, name: &str, session: &Session) -> Result<PathBuf> {
        if session.ledger().is_empty() {
            return Err(PosError::EmptySession);
        }
        fs::create_dir_all(&self.dir)?;

        let destination = self.path_for(name);
        let temp_path = self.dir.join(format!(".{}.csv.tmp", name));
        let mut writer = csv::Writer::from_path(&temp_path)?;
        for record in session.ledger().records() {
            writer.serialize(SessionRow::denormalize(record, session.price_book()))?;
        }
        writer.flush()?;
        drop(writer);

        replace_file(&temp_path, &destination)?;
        Ok(destination)
    }

    /// Load `<dir>/<name>.csv` into the session, replacing the ledger.
    ///
    /// The whole file is parsed before any state changes, so a malformed
    /// file surfaces as an error with the session left at its pre-load
    /// values. Returns the number of records loaded.
    pub fn load(&self, name: &str, session: &mut Session) -> Result<usize> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(PosError::NotFound(format!(
                "session file {}",
                path.display()
            )));
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows: Vec<SessionRow> = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }

        let mut prices = Vec::new();
        for row in &rows {
            if row.price.is_some() || row.cost.is_some() {
                // Hand-edited negatives clamp to zero rather than failing
                // the load.
                prices.push((
                    row.item_code.clone(),
                    row.cost.unwrap_or(0).max(0) as u64,
                    row.price.unwrap_or(0).max(0) as u64,
                ));
            }
        }
        let records = rows.into_iter().map(SessionRow::into_record).collect();

        session.restore(records, prices);
        Ok(session.ledger().len())
    }

    /// Saved session names (without `.csv`), sorted descending.
    ///
    /// Names are date-prefixed by convention, so descending order reads as
    /// most recent first. A missing directory lists as empty.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("csv") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort_by(|a, b| b.cmp(a));
        Ok(names)
    }

    /// Suggested name for the next save on a given date: `YYYY-MM-DD-N`,
    /// where N is one past the number of sessions already saved that day.
    pub fn next_session_name(&self, date: NaiveDate) -> Result<String> {
        let prefix = date.format("%Y-%m-%d").to_string();
        let existing = self
            .list()?
            .iter()
            .filter(|name| name.starts_with(&prefix))
            .count();
        Ok(format!("{}-{}", prefix, existing + 1))
    }
}

/// Swap a freshly written temp file into place.
///
/// Some platforms fail `fs::rename` when the target exists; in that case
/// the target is removed and the rename retried. The temp file is cleaned
/// up if the retry also fails.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(first) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        if let Err(second) = fs::rename(temp_path, destination) {
            let _ = fs::remove_file(temp_path);
            return Err(io::Error::new(
                second.kind(),
                format!("atomic rename failed (first: {}, retry: {})", first, second),
            ));
        }
    }
    Ok(())
}
