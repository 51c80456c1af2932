use crate::error::{ContentError, ContentErrorExt};
use folio_database::Database;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use surrealdb::types::SurrealValue;
use tracing::{debug, instrument};

const DEFINE_SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS content SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS text ON content TYPE string;
";

const SEED: &str = "INSERT IGNORE INTO content $rows";

const UPSERT: &str = "
    BEGIN TRANSACTION;
    INSERT INTO content $rows ON DUPLICATE KEY UPDATE text = $input.text;
    COMMIT TRANSACTION;
";

const SELECT_ALL: &str = "SELECT id.id() AS name, text FROM content";

/// One row as written: the key becomes the record id.
#[derive(Debug, SurrealValue)]
struct ContentRecord {
    id: String,
    text: String,
}

#[derive(Debug, SurrealValue)]
struct ContentRow {
    name: String,
    text: String,
}

/// Durable string-to-string map holding the site copy.
///
/// Keys are record ids of the `content` table, so each key exists at most once. Keys are
/// never deleted: seeding inserts only what is missing and updates upsert.
#[derive(Debug, Clone)]
pub struct ContentStore {
    db: Database,
}

impl ContentStore {
    /// Wraps `db` and declares the content table if it does not exist yet.
    ///
    /// # Errors
    /// Returns [`ContentError::Storage`] if the schema statements fail.
    pub async fn open(db: Database) -> Result<Self, ContentError> {
        db.query(DEFINE_SCHEMA)
            .await
            .context("Defining content table")?
            .check()
            .map_err(surrealdb::Error::from)?;

        Ok(Self { db })
    }

    /// Inserts every default whose key is absent. Running it again changes nothing.
    ///
    /// # Errors
    /// Returns [`ContentError::Storage`] if the insert fails.
    #[instrument(skip_all, fields(defaults = defaults.len()))]
    pub async fn seed(&self, defaults: &[(&str, &str)]) -> Result<(), ContentError> {
        let rows: Vec<ContentRecord> = defaults
            .iter()
            .map(|(key, text)| ContentRecord { id: (*key).to_owned(), text: (*text).to_owned() })
            .collect();

        self.db
            .query(SEED)
            .bind(("rows", rows))
            .await
            .context("Seeding content")?
            .check()
            .map_err(surrealdb::Error::from)?;

        Ok(())
    }

    /// Every stored key with its value.
    ///
    /// # Errors
    /// Returns [`ContentError::Storage`] if the table cannot be read.
    pub async fn fetch_all(&self) -> Result<BTreeMap<String, String>, ContentError> {
        let rows = self
            .db
            .query(SELECT_ALL)
            .await
            .context("Loading content")?
            .take::<Vec<ContentRow>>(0)
            .context("Parsing content rows")?;

        Ok(rows.into_iter().map(|row| (row.name, row.text)).collect())
    }

    /// Upserts every pair in one transaction; values are stored as text.
    ///
    /// # Errors
    /// Returns [`ContentError::Validation`] for an empty key and [`ContentError::Storage`] if
    /// the transaction fails, in which case nothing from the batch is written.
    #[instrument(skip_all, fields(keys = values.len()))]
    pub async fn update(&self, values: &Map<String, Value>) -> Result<(), ContentError> {
        if values.is_empty() {
            return Ok(());
        }
        if values.keys().any(String::is_empty) {
            return Err(ContentError::Validation {
                message: "Content keys must not be empty".into(),
                context: None,
            });
        }

        let rows: Vec<ContentRecord> = values
            .iter()
            .map(|(key, value)| ContentRecord { id: key.clone(), text: coerce_value(value) })
            .collect();

        self.db
            .query(UPSERT)
            .bind(("rows", rows))
            .await
            .context("Updating content")?
            .check()
            .map_err(surrealdb::Error::from)?;

        debug!("Content batch committed");
        Ok(())
    }
}

/// Text stored for a JSON value: strings verbatim, everything else as compact JSON
/// (`42`, `true`, `null`, `["a",1]`).
#[must_use]
pub fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
