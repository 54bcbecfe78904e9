//! Business lines; the icon is a CSS class name, not an upload.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessLine {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub title_business: String,
    pub description: String,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "business_line",
    resource: "business-lines",
    element_name: "Business Line",
    list_name: "Business Lines",
    icon: "layers",
    admin_list: false,
    admin_detail: true,
    update: UpdateStrategy::MethodOverride,
    columns: &[
        ColumnSpec { key: "title", label: "Title" },
        ColumnSpec { key: "title_business", label: "Business" },
        ColumnSpec { key: "icon", label: "Icon" },
        ColumnSpec { key: "description", label: "Description" },
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
            key: "title_business",
            label: "Title Business",
            placeholder: "Enter business title",
            kind: FieldKind::Text,
            required: Some("Title Business is required"),
        },
        FieldSpec {
            key: "icon",
            label: "Icon Class",
            placeholder: "e.g. fa-solid fa-gears",
            kind: FieldKind::Text,
            required: Some("Icon class is required"),
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
    search_fields: &["title", "title_business", "description"],
};

impl AdminResource for BusinessLine {
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
            "title_business" => self.title_business.clone(),
            "icon" => self.icon.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("title", self.title.clone());
        values.set("title_business", self.title_business.clone());
        values.set("icon", self.icon.clone());
        values.set("description", self.description.clone());
        values
    }
}
