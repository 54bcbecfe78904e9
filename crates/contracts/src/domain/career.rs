//! Career highlights (title + description + illustration).

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "career",
    resource: "careers",
    element_name: "Career",
    list_name: "Careers",
    icon: "briefcase",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::MethodOverride,
    columns: &[
        ColumnSpec { key: "title", label: "Title" },
        ColumnSpec { key: "description", label: "Description" },
    ],
    fields: &[
        FieldSpec {
            key: "title",
            label: "Title",
            placeholder: "Enter career title",
            kind: FieldKind::Text,
            required: Some("Title is required"),
        },
        FieldSpec {
            key: "description",
            label: "Description",
            placeholder: "Enter career description",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
    ],
    media: Some(MediaSpec {
        field: "image",
        label: "Image",
        required: None,
    }),
    search_fields: &["title", "description"],
};

impl AdminResource for Career {
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
            _ => String::new(),
        }
    }

    fn media_url(&self) -> Option<String> {
        self.image_url.clone()
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("title", self.title.clone());
        values.set("description", self.description.clone());
        values
    }
}
