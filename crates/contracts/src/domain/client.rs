//! Client testimonials.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name_client: String,
    pub position_client: String,
    pub description_client: String,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "client",
    resource: "clients",
    element_name: "Client",
    list_name: "Clients",
    icon: "contact",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::NativePut,
    columns: &[
        ColumnSpec { key: "name_client", label: "Name" },
        ColumnSpec { key: "position_client", label: "Position" },
        ColumnSpec { key: "description_client", label: "Description" },
    ],
    fields: &[
        FieldSpec {
            key: "name_client",
            label: "Name",
            placeholder: "Enter client name",
            kind: FieldKind::Text,
            required: Some("Name is required"),
        },
        FieldSpec {
            key: "position_client",
            label: "Position",
            placeholder: "Enter client position",
            kind: FieldKind::Text,
            required: Some("Position is required"),
        },
        FieldSpec {
            key: "description_client",
            label: "Description",
            placeholder: "Enter testimonial",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
    ],
    media: None,
    search_fields: &["name_client", "position_client"],
};

impl AdminResource for Client {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name_client.clone()
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "name_client" => self.name_client.clone(),
            "position_client" => self.position_client.clone(),
            "description_client" => self.description_client.clone(),
            _ => String::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name_client", self.name_client.clone());
        values.set("position_client", self.position_client.clone());
        values.set("description_client", self.description_client.clone());
        values
    }
}
