//! Microdata options (structured-data snippets for SEO).
//!
//! Reads as well as mutations go through the admin prefix; the update is a
//! multipart POST with the `_method=PUT` marker even though there is no
//! media field, matching the deployed backend route.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicrodataOption {
    pub id: i64,
    pub name_title: String,
    pub description: String,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "microdata_option",
    resource: "microdata-options",
    element_name: "Microdata Option",
    list_name: "Microdata Options",
    icon: "settings",
    admin_list: true,
    admin_detail: true,
    update: UpdateStrategy::MethodOverride,
    columns: &[
        ColumnSpec { key: "name_title", label: "Name Title" },
        ColumnSpec { key: "description", label: "Description" },
    ],
    fields: &[
        FieldSpec {
            key: "name_title",
            label: "Name Title",
            placeholder: "Enter name title",
            kind: FieldKind::Text,
            required: Some("Name Title is required"),
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
    search_fields: &["name_title", "description"],
};

impl AdminResource for MicrodataOption {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name_title.clone()
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "name_title" => self.name_title.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name_title", self.name_title.clone());
        values.set("description", self.description.clone());
        values
    }
}
