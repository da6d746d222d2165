// Lookup rules over the ordered record sequence.
//
// Duplicate ids are allowed in the store. Every rule here resolves them the
// same way: the record that appears last in the sequence wins.

use crate::modules::items::core::record::Record;
use std::collections::HashMap;

/// Index the sequence by id and return the entry for `id`. Later records
/// overwrite earlier ones while the index is built.
pub fn find_by_id<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    let index: HashMap<&str, &Record> = records.iter().map(|r| (r.id.as_str(), r)).collect();
    index.get(id).copied()
}

/// Position of the last record carrying `id`. The whole sequence is scanned.
pub fn last_position(records: &[Record], id: &str) -> Option<usize> {
    let mut found = None;
    for (i, record) in records.iter().enumerate() {
        if record.id == id {
            found = Some(i);
        }
    }
    found
}
