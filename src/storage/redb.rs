use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};

use super::{KvStore, StorageError};

const TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

fn storage_error(e: redb::Error) -> StorageError {
    StorageError::Storage(e.to_string())
}

/// On-disk store backed by an embedded redb database.
///
/// Every call runs in its own transaction. Internal helpers work in
/// `redb::Error` so each redb failure converts with `?`.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::create(path).map_err(storage_error)
    }

    fn create(path: &Path) -> Result<Self, redb::Error> {
        let db = Database::create(path)?;
        // Make sure the table exists so reads never see a missing table.
        let txn = db.begin_write()?;
        txn.open_table(TABLE)?;
        txn.commit()?;
        Ok(Self { db })
    }

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, redb::Error> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(TABLE)?;
        let value = table.get(key)?.map(|guard| guard.value().to_vec());
        Ok(value)
    }

    fn write(&self, key: &str, value: Option<&[u8]>) -> Result<(), redb::Error> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(TABLE)?;
            match value {
                Some(value) => {
                    table.insert(key, value)?;
                }
                None => {
                    table.remove(key)?;
                }
            }
        }
        txn.commit()?;
        Ok(())
    }
}

impl KvStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.read(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.write(key, Some(value)).map_err(storage_error)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.write(key, None).map_err(storage_error)
    }
}
