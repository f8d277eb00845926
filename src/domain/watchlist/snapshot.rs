// Snapshot codec for the persistence slot.
//
// The whole collection is written as one JSON array, in list order.

use crate::domain::movie::MovieEntry;

pub fn encode_snapshot(entries: &[MovieEntry]) -> serde_json::Result<String> {
    serde_json::to_string(entries)
}

pub fn decode_snapshot(raw: &str) -> serde_json::Result<Vec<MovieEntry>> {
    serde_json::from_str(raw)
}
