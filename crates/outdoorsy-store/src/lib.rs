//! Persistent SQLite store for customer/vehicle records
//!
//! One table, no primary key, no dedup: importing the same file twice
//! stores every row twice. The handle is created by the caller and passed
//! to every operation, so tests can use a throwaway in-memory store.

use std::path::Path;

use rusqlite::{params, CachedStatement, Connection, OpenFlags, Row};
use tracing::debug;

use outdoorsy_domain::repository::CustomerRepository;
use outdoorsy_domain::service::sort_by_vehicle_type;
use outdoorsy_types::{CustomerVehicleRecord, Error, Result, SortKey};

/// Database file name used when only a directory is given
pub const DEFAULT_DB_FILE: &str = "customers.db";

/// Name of the single table
pub const TABLE_NAME: &str = "customers";

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "customers" (
    "first_name"     TEXT,
    "last_name"      TEXT,
    "email"          TEXT,
    "vehicle_type"   TEXT,
    "vehicle_name"   TEXT,
    "vehicle_length" INTEGER
)"#;

const INSERT_SQL: &str = r#"INSERT INTO "customers" VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#;

const SELECT_BY_NAME_SQL: &str = r#"
SELECT first_name, last_name, email, vehicle_type, vehicle_name, vehicle_length
FROM "customers"
ORDER BY first_name, last_name ASC"#;

/// SQLite-backed record store
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database at `path`, creating the file if needed
    ///
    /// The parent directory must already exist.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| unavailable(path, e))?;
        debug!(path = %path.display(), "opened store");
        Ok(Self { conn })
    }

    /// Open an existing database without creating one
    ///
    /// A missing file means nothing was imported yet and is reported as
    /// [`Error::SchemaMissing`].
    pub fn open_existing(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!(path = %path.display(), "store file does not exist");
            return Err(Error::SchemaMissing);
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|e| unavailable(path, e))?;
        debug!(path = %path.display(), "opened existing store");
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage)?;
        Ok(Self { conn })
    }

    /// Check whether the customer table exists
    pub fn has_schema(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [TABLE_NAME],
                |row| row.get(0),
            )
            .map_err(storage)?;
        Ok(count > 0)
    }

    fn require_schema(&self) -> Result<()> {
        if self.has_schema()? {
            Ok(())
        } else {
            Err(Error::SchemaMissing)
        }
    }
}

impl CustomerRepository for Store {
    fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_TABLE_SQL).map_err(storage)?;
        debug!("ensured customer table exists");
        Ok(())
    }

    fn insert(&self, record: &CustomerVehicleRecord) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(INSERT_SQL).map_err(storage)?;
        execute_insert(&mut stmt, record).map_err(storage)?;
        Ok(())
    }

    fn insert_all(&self, records: &[CustomerVehicleRecord]) -> Result<usize> {
        // rolls back on drop if any insert fails
        let tx = self.conn.unchecked_transaction().map_err(storage)?;
        {
            let mut stmt = tx.prepare_cached(INSERT_SQL).map_err(storage)?;
            for record in records {
                execute_insert(&mut stmt, record).map_err(storage)?;
            }
        }
        tx.commit().map_err(storage)?;

        debug!(rows = records.len(), "inserted records");
        Ok(records.len())
    }

    fn query(&self, sort_key: SortKey) -> Result<Vec<CustomerVehicleRecord>> {
        self.require_schema()?;

        let mut stmt = self.conn.prepare(SELECT_BY_NAME_SQL).map_err(storage)?;
        let mut records = stmt
            .query_map([], record_from_row)
            .map_err(storage)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(storage)?;

        // the SQL already yields name order; vehicle type is re-sorted here
        // because it folds case, unlike the BINARY collation
        if sort_key == SortKey::ByVehicleType {
            sort_by_vehicle_type(&mut records);
        }

        debug!(rows = records.len(), sort = %sort_key, "queried records");
        Ok(records)
    }

    fn count(&self) -> Result<usize> {
        self.require_schema()?;
        let count: i64 = self
            .conn
            .query_row(r#"SELECT COUNT(*) FROM "customers""#, [], |row| row.get(0))
            .map_err(storage)?;
        Ok(count as usize)
    }
}

fn execute_insert(stmt: &mut CachedStatement<'_>, record: &CustomerVehicleRecord) -> rusqlite::Result<usize> {
    stmt.execute(params![
        record.first_name,
        record.last_name,
        record.email,
        record.vehicle_type,
        record.vehicle_name,
        record.vehicle_length,
    ])
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<CustomerVehicleRecord> {
    Ok(CustomerVehicleRecord {
        first_name: row.get(0)?,
        last_name: row.get(1)?,
        email: row.get(2)?,
        vehicle_type: row.get(3)?,
        vehicle_name: row.get(4)?,
        vehicle_length: row.get(5)?,
    })
}

fn storage(e: rusqlite::Error) -> Error {
    Error::Storage(e.to_string())
}

fn unavailable(path: &Path, e: rusqlite::Error) -> Error {
    Error::StorageUnavailable(format!("{}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(first: &str, last: &str, vehicle_type: &str, length: i64) -> CustomerVehicleRecord {
        CustomerVehicleRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first, last),
            vehicle_type: vehicle_type.to_string(),
            vehicle_name: format!("{}'s rig", first),
            vehicle_length: length,
        }
    }

    fn sample() -> Vec<CustomerVehicleRecord> {
        vec![
            record("Mary", "Smith", "suv", 18),
            record("Ann", "Zed", "RV", 32),
            record("Ann", "Baker", "SUV", 20),
            record("Zoe", "Adams", "Bicycle", 6),
        ]
    }

    #[test]
    fn test_create_schema_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        assert!(!store.has_schema().unwrap());
        store.create_schema().unwrap();
        store.create_schema().unwrap();
        assert!(store.has_schema().unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_query_without_schema() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(store.query(SortKey::ByName), Err(Error::SchemaMissing)));
        assert!(matches!(store.count(), Err(Error::SchemaMissing)));
    }

    #[test]
    fn test_query_by_name() {
        let store = Store::open_in_memory().unwrap();
        store.create_schema().unwrap();
        assert_eq!(store.insert_all(&sample()).unwrap(), 4);

        let rows = store.query(SortKey::ByName).unwrap();
        let names: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.first_name.as_str(), r.last_name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("Ann", "Baker"), ("Ann", "Zed"), ("Mary", "Smith"), ("Zoe", "Adams")]
        );
    }

    #[test]
    fn test_query_by_name_is_case_sensitive() {
        let store = Store::open_in_memory().unwrap();
        store.create_schema().unwrap();
        store
            .insert_all(&[
                record("bob", "Smith", "RV", 30),
                record("Bob", "Smith", "RV", 30),
                record("alice", "Jones", "RV", 30),
                record("Zed", "Young", "RV", 30),
            ])
            .unwrap();

        let rows = store.query(SortKey::ByName).unwrap();
        let firsts: Vec<&str> = rows.iter().map(|r| r.first_name.as_str()).collect();
        // BINARY collation: every uppercase letter sorts before lowercase
        assert_eq!(firsts, vec!["Bob", "Zed", "alice", "bob"]);

        // vehicle type order folds case, so the same rows keep name order on ties
        let rows = store.query(SortKey::ByVehicleType).unwrap();
        let firsts: Vec<&str> = rows.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(firsts, vec!["Bob", "Zed", "alice", "bob"]);
    }

    #[test]
    fn test_query_by_vehicle_type_groups_case_variants() {
        let store = Store::open_in_memory().unwrap();
        store.create_schema().unwrap();
        store.insert_all(&sample()).unwrap();

        let rows = store.query(SortKey::ByVehicleType).unwrap();
        let types: Vec<&str> = rows.iter().map(|r| r.vehicle_type.as_str()).collect();
        // ties keep name order: Ann Baker (SUV) before Mary Smith (suv)
        assert_eq!(types, vec!["Bicycle", "RV", "SUV", "suv"]);

        let mut by_name = store.query(SortKey::ByName).unwrap();
        let mut by_type = rows.clone();
        by_name.sort_by(|a, b| a.email.cmp(&b.email));
        by_type.sort_by(|a, b| a.email.cmp(&b.email));
        assert_eq!(by_name, by_type);
    }

    #[test]
    fn test_insert_has_no_dedup() {
        let store = Store::open_in_memory().unwrap();
        store.create_schema().unwrap();
        let r = record("Jane", "Doe", "SUV", 22);
        store.insert(&r).unwrap();
        store.insert(&r).unwrap();

        let rows = store.query(SortKey::ByName).unwrap();
        assert_eq!(rows, vec![r.clone(), r]);
    }

    #[test]
    fn test_insert_all_without_schema_writes_nothing() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(store.insert_all(&sample()), Err(Error::Storage(_))));
        assert!(!store.has_schema().unwrap());
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);

        {
            let store = Store::open(&path).unwrap();
            store.create_schema().unwrap();
            store.insert_all(&sample()).unwrap();
        }

        let store = Store::open_existing(&path).unwrap();
        assert_eq!(store.count().unwrap(), 4);
    }

    #[test]
    fn test_open_existing_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        assert!(matches!(Store::open_existing(&path), Err(Error::SchemaMissing)));
        assert!(!path.exists());
    }

    #[test]
    fn test_open_in_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join(DEFAULT_DB_FILE);
        assert!(matches!(Store::open(&path), Err(Error::StorageUnavailable(_))));
    }
}
