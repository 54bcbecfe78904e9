//! Work-process steps. The only entity updated with a native PUT.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    pub id: i64,
    pub title: String,
    pub description_title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "process",
    resource: "process",
    element_name: "Process",
    list_name: "Processes",
    icon: "workflow",
    admin_list: false,
    admin_detail: true,
    update: UpdateStrategy::NativePut,
    columns: &[
        ColumnSpec { key: "title", label: "Title" },
        ColumnSpec { key: "description_title", label: "Description" },
    ],
    fields: &[
        FieldSpec {
            key: "title",
            label: "Title",
            placeholder: "Enter process title",
            kind: FieldKind::Text,
            required: Some("Title is required"),
        },
        FieldSpec {
            key: "description_title",
            label: "Description",
            placeholder: "Enter process description",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
    ],
    media: Some(MediaSpec {
        field: "icon",
        label: "Icon",
        required: None,
    }),
    search_fields: &["title", "description_title"],
};

impl AdminResource for Process {
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
            "description_title" => self.description_title.clone(),
            _ => String::new(),
        }
    }

    fn media_url(&self) -> Option<String> {
        self.icon_url.clone()
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("title", self.title.clone());
        values.set("description_title", self.description_title.clone());
        values
    }
}
