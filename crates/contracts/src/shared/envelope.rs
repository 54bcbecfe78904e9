//! Response-envelope normalization.
//!
//! The backend usually wraps payloads in `{ "data": ... }`. Some routes
//! return the value bare, and at least one collection route returns a single
//! object instead of a one-element array. All unwrap/coerce logic lives here
//! so no screen reimplements it.

use serde::de::DeserializeOwned;
use serde_json::Value;

fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decode a collection response: unwrap the `data` envelope if present,
/// coerce a single bare object into a one-element list, and treat `null`
/// as empty.
pub fn decode_collection<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, serde_json::Error> {
    match unwrap_data(payload) {
        Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
        Value::Null => Ok(Vec::new()),
        single => serde_json::from_value::<T>(single).map(|record| vec![record]),
    }
}

/// Decode a single-record response, unwrapping the envelope if present.
pub fn decode_record<T: DeserializeOwned>(payload: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(unwrap_data(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Record {
        id: i64,
        title: String,
    }

    #[test]
    fn wrapped_array_decodes_every_element() {
        let payload = json!({ "data": [
            { "id": 1, "title": "A" },
            { "id": 2, "title": "B" },
        ]});
        let records: Vec<Record> = decode_collection(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "B");
    }

    #[test]
    fn bare_array_decodes_without_envelope() {
        let payload = json!([{ "id": 1, "title": "A" }]);
        let records: Vec<Record> = decode_collection(payload).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn single_bare_object_is_coerced_to_one_row() {
        let payload = json!({ "id": 1, "title": "X" });
        let records: Vec<Record> = decode_collection(payload).unwrap();
        assert_eq!(records, vec![Record { id: 1, title: "X".into() }]);
    }

    #[test]
    fn wrapped_single_object_is_coerced_to_one_row() {
        let payload = json!({ "data": { "id": 5, "title": "Solo" } });
        let records: Vec<Record> = decode_collection(payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 5);
    }

    #[test]
    fn null_data_is_empty() {
        let records: Vec<Record> = decode_collection(json!({ "data": null })).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn record_unwraps_envelope_and_accepts_bare() {
        let wrapped: Record = decode_record(json!({ "data": { "id": 9, "title": "W" } })).unwrap();
        assert_eq!(wrapped.id, 9);
        let bare: Record = decode_record(json!({ "id": 10, "title": "B" })).unwrap();
        assert_eq!(bare.id, 10);
    }
}
