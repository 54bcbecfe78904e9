//! String-keyed form state behind the generic create/edit form.

use crate::shared::descriptor::FieldSpec;
use std::collections::HashMap;

/// Current values of a form, keyed by descriptor field key.
///
/// Missing keys read as the empty string, so a freshly opened create form
/// needs no initialization pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(HashMap<&'static str, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &'static str, value: String) {
        self.0.insert(key, value);
    }

    /// Encode as a JSON object in descriptor field order, for entities
    /// updated with a plain JSON body.
    pub fn to_json(&self, fields: &[FieldSpec]) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for field in fields {
            map.insert(
                field.key.to_string(),
                serde_json::Value::String(self.get(field.key).to_string()),
            );
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::descriptor::FieldKind;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec {
            key: "title",
            label: "Title",
            placeholder: "",
            kind: FieldKind::Text,
            required: Some("Title is required"),
        },
        FieldSpec {
            key: "description",
            label: "Description",
            placeholder: "",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
    ];

    #[test]
    fn missing_keys_read_empty() {
        let values = FormValues::new();
        assert_eq!(values.get("title"), "");
    }

    #[test]
    fn to_json_covers_every_descriptor_field() {
        let mut values = FormValues::new();
        values.set("title", "Hello".into());
        let json = values.to_json(FIELDS);
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["description"], "");
    }
}
