use tracing::debug;

use super::model::{Record, RecordId, Storage, StorageId};

/// Resolves a record by id. First match wins; ids are expected to be unique.
///
/// `None` is the not-found signal the navigation layer routes on.
pub fn find_record(records: &[Record], id: RecordId) -> Option<&Record> {
    let found = records.iter().find(|record| record.id == id);
    if found.is_none() {
        debug!(record_id = id, "record not found");
    }
    found
}

/// Resolves a storage inside a specific record.
///
/// A storage id that only exists under a different record is not found.
pub fn find_storage(
    records: &[Record],
    record_id: RecordId,
    storage_id: StorageId,
) -> Option<&Storage> {
    let storage = find_record(records, record_id)?.storage(storage_id);
    if storage.is_none() {
        debug!(record_id, storage_id, "storage not found in record");
    }
    storage
}
