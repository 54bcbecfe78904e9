//! Landing-page copy for individual services.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLandingPage {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub name_service: String,
    pub description: String,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "service_landing_page",
    resource: "services-landing-pages",
    element_name: "Service Landing Page",
    list_name: "Service Landing Pages",
    icon: "file-text",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::NativePut,
    columns: &[
        ColumnSpec { key: "title", label: "Title" },
        ColumnSpec { key: "name_service", label: "Service" },
        ColumnSpec { key: "description", label: "Description" },
    ],
    fields: &[
        FieldSpec {
            key: "name_service",
            label: "Service Name",
            placeholder: "Enter service name",
            kind: FieldKind::Text,
            required: Some("Service name is required"),
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
    search_fields: &["title", "name_service", "description"],
};

impl AdminResource for ServiceLandingPage {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name_service.clone()
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "title" => self.title.clone().unwrap_or_else(|| "-".to_string()),
            "name_service" => self.name_service.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name_service", self.name_service.clone());
        values.set("description", self.description.clone());
        values
    }
}
