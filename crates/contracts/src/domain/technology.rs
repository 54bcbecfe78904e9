//! Technology logos displayed in the site's stack section.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub id: i64,
    pub name: String,
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
    key: "technology",
    resource: "technologies",
    element_name: "Technology",
    list_name: "Technologies",
    icon: "cpu",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::MethodOverride,
    columns: &[ColumnSpec { key: "name", label: "Name" }],
    fields: &[FieldSpec {
        key: "name",
        label: "Name",
        placeholder: "Enter technology name",
        kind: FieldKind::Text,
        required: Some("Name is required"),
    }],
    media: Some(MediaSpec {
        field: "image",
        label: "Image",
        required: None,
    }),
    search_fields: &["name"],
};

impl AdminResource for Technology {
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
            _ => String::new(),
        }
    }

    fn media_url(&self) -> Option<String> {
        self.image_url.clone()
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name", self.name.clone());
        values
    }
}
