//! Portfolio items. The only entity with a foreign key: each item
//! references a portfolio category, and the list response may embed the
//! resolved category object.

use crate::domain::portfolio_category::PortfolioCategory;
use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, SelectSource,
    UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i64,
    pub title: String,
    pub name_project: String,
    pub company_name: String,
    pub category_id: i64,
    /// Embedded by the collection read; absent on the single-record read.
    #[serde(default)]
    pub category: Option<PortfolioCategory>,
    #[serde(default)]
    pub image_portofolio: Option<String>,
    #[serde(default)]
    pub image_portofolio_url: Option<String>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "portfolio",
    resource: "portofolios",
    element_name: "Portfolio",
    list_name: "Portfolios",
    icon: "grid",
    admin_list: false,
    admin_detail: true,
    update: UpdateStrategy::MethodOverride,
    columns: &[
        ColumnSpec { key: "title", label: "Title" },
        ColumnSpec { key: "name_project", label: "Project" },
        ColumnSpec { key: "company_name", label: "Company" },
        ColumnSpec { key: "category", label: "Category" },
    ],
    fields: &[
        FieldSpec {
            key: "title",
            label: "Title",
            placeholder: "Enter portfolio title",
            kind: FieldKind::Text,
            required: Some("Title is required"),
        },
        FieldSpec {
            key: "name_project",
            label: "Project Name",
            placeholder: "Enter project name",
            kind: FieldKind::Text,
            required: Some("Project name is required"),
        },
        FieldSpec {
            key: "company_name",
            label: "Company Name",
            placeholder: "Enter company name",
            kind: FieldKind::Text,
            required: Some("Company name is required"),
        },
        FieldSpec {
            key: "category_id",
            label: "Category",
            placeholder: "Select a category",
            kind: FieldKind::Select(SelectSource {
                resource: "portofolio-categories",
                admin: true,
                label_field: "name",
            }),
            required: Some("Category is required"),
        },
    ],
    media: Some(MediaSpec {
        field: "image_portofolio",
        label: "Image",
        required: None,
    }),
    search_fields: &["title", "name_project", "company_name"],
};

impl AdminResource for Portfolio {
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
            "name_project" => self.name_project.clone(),
            "company_name" => self.company_name.clone(),
            "category" => self
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            "category_id" => self.category_id.to_string(),
            _ => String::new(),
        }
    }

    fn media_url(&self) -> Option<String> {
        self.image_portofolio_url.clone()
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("title", self.title.clone());
        values.set("name_project", self.name_project.clone());
        values.set("company_name", self.company_name.clone());
        values.set("category_id", self.category_id.to_string());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_category_feeds_the_list_cell() {
        let record: Portfolio = serde_json::from_value(json!({
            "id": 1, "title": "Site", "name_project": "P", "company_name": "Acme",
            "category_id": 4, "category": { "id": 4, "name": "Web" }
        }))
        .unwrap();
        assert_eq!(record.cell("category"), "Web");
    }

    #[test]
    fn missing_category_renders_dash_and_form_keeps_the_id() {
        let record: Portfolio = serde_json::from_value(json!({
            "id": 1, "title": "Site", "name_project": "P", "company_name": "Acme",
            "category_id": 4
        }))
        .unwrap();
        assert_eq!(record.cell("category"), "-");
        assert_eq!(record.to_form().get("category_id"), "4");
    }
}
