//! Partner logos.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partnership {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "partnership",
    resource: "partnerships",
    element_name: "Partnership",
    list_name: "Partnerships",
    icon: "handshake",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::MethodOverride,
    columns: &[ColumnSpec { key: "name", label: "Name" }],
    fields: &[FieldSpec {
        key: "name",
        label: "Name",
        placeholder: "Enter partner name",
        kind: FieldKind::Text,
        required: Some("Name is required"),
    }],
    media: Some(MediaSpec {
        field: "logo",
        label: "Logo",
        required: None,
    }),
    search_fields: &["name"],
};

impl AdminResource for Partnership {
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
        self.logo_url.clone()
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name", self.name.clone());
        values
    }
}
