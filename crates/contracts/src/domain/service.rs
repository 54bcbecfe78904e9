//! Services offered by the company, each with an optional icon image.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "service",
    resource: "services",
    element_name: "Service",
    list_name: "Services",
    icon: "briefcase",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::MethodOverride,
    columns: &[
        ColumnSpec { key: "name", label: "Name" },
        ColumnSpec { key: "description", label: "Description" },
    ],
    fields: &[
        FieldSpec {
            key: "name",
            label: "Name",
            placeholder: "Enter service name",
            kind: FieldKind::Text,
            required: Some("Name is required"),
        },
        FieldSpec {
            key: "description",
            label: "Description",
            placeholder: "Enter service description",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
    ],
    media: Some(MediaSpec {
        field: "icon",
        label: "Icon",
        required: None,
    }),
    search_fields: &["name", "description"],
};

impl AdminResource for Service {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn media_url(&self) -> Option<String> {
        self.icon_url.clone()
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name", self.name.clone());
        values.set("description", self.description.clone());
        values
    }
}
