//! Job positions referenced across the site.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub position: String,
    pub description: String,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "position",
    resource: "positions",
    element_name: "Position",
    list_name: "Positions",
    icon: "id-badge",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::NativePut,
    columns: &[
        ColumnSpec { key: "position", label: "Position" },
        ColumnSpec { key: "description", label: "Description" },
    ],
    fields: &[
        FieldSpec {
            key: "position",
            label: "Position",
            placeholder: "Enter position name",
            kind: FieldKind::Text,
            required: Some("Position is required"),
        },
        FieldSpec {
            key: "description",
            label: "Description",
            placeholder: "Enter description",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
    ],
    media: None,
    search_fields: &["position", "description"],
};

impl AdminResource for Position {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.position.clone()
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "position" => self.position.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("position", self.position.clone());
        values.set("description", self.description.clone());
        values
    }
}
