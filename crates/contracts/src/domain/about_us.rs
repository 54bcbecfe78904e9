//! About Us: company profile blurbs (title, description, vision, mission).
//!
//! The backend sometimes answers the collection read with a single bare
//! object instead of an array; the envelope layer coerces it.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutUs {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub vision: String,
    pub mission: String,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "about_us",
    resource: "about-us",
    element_name: "About Info",
    list_name: "About Us",
    icon: "info",
    admin_list: true,
    admin_detail: false,
    update: UpdateStrategy::NativePut,
    columns: &[
        ColumnSpec { key: "title", label: "Title" },
        ColumnSpec { key: "description", label: "Description" },
        ColumnSpec { key: "vision", label: "Vision" },
        ColumnSpec { key: "mission", label: "Mission" },
    ],
    fields: &[
        FieldSpec {
            key: "title",
            label: "Title",
            placeholder: "Enter title",
            kind: FieldKind::Text,
            required: Some("Title is required"),
        },
        FieldSpec {
            key: "description",
            label: "Description",
            placeholder: "Enter description",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
        FieldSpec {
            key: "vision",
            label: "Vision",
            placeholder: "Enter company vision",
            kind: FieldKind::TextArea,
            required: Some("Vision is required"),
        },
        FieldSpec {
            key: "mission",
            label: "Mission",
            placeholder: "Enter company mission",
            kind: FieldKind::TextArea,
            required: Some("Mission is required"),
        },
    ],
    media: None,
    search_fields: &["title", "description", "vision", "mission"],
};

impl AdminResource for AboutUs {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "vision" => self.vision.clone(),
            "mission" => self.mission.clone(),
            _ => String::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("title", self.title.clone());
        values.set("description", self.description.clone());
        values.set("vision", self.vision.clone());
        values.set("mission", self.mission.clone());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::decode_collection;
    use serde_json::json;

    #[test]
    fn single_object_response_becomes_one_row() {
        let payload = json!({ "id": 1, "title": "X", "description": "d", "vision": "v", "mission": "m" });
        let rows: Vec<AboutUs> = decode_collection(payload).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "X");
    }

    #[test]
    fn form_round_trip_keeps_every_field() {
        let record = AboutUs {
            id: 3,
            title: "T".into(),
            description: "D".into(),
            vision: "V".into(),
            mission: "M".into(),
        };
        let values = record.to_form();
        assert_eq!(values.get("vision"), "V");
        assert_eq!(values.get("mission"), "M");
    }
}
