//! Categories referenced by portfolio items.
//!
//! The resource segment keeps the backend's historical spelling
//! ("portofolio"); it is part of the wire contract.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "portfolio_category",
    resource: "portofolio-categories",
    element_name: "Portfolio Category",
    list_name: "Portfolio Categories",
    icon: "tag",
    admin_list: false,
    admin_detail: true,
    update: UpdateStrategy::NativePut,
    columns: &[
        ColumnSpec { key: "name", label: "Name" },
        ColumnSpec { key: "slug", label: "Slug" },
    ],
    fields: &[FieldSpec {
        key: "name",
        label: "Category Name",
        placeholder: "Enter category name",
        kind: FieldKind::Text,
        required: Some("Category name is required."),
    }],
    media: None,
    search_fields: &["name"],
};

impl AdminResource for PortfolioCategory {
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
            "slug" => self.slug.clone().unwrap_or_else(|| "-".to_string()),
            _ => String::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name", self.name.clone());
        values
    }
}
