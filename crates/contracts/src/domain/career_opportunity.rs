//! Open positions listed on the careers page.
//!
//! Only title and description are mandatory; the remaining columns are
//! free-form copy the site renders verbatim.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerOpportunity {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "career_opportunity",
    resource: "career-opportunities",
    element_name: "Career Opportunity",
    list_name: "Career Opportunities",
    icon: "file-text",
    admin_list: false,
    admin_detail: false,
    update: UpdateStrategy::MethodOverride,
    columns: &[
        ColumnSpec { key: "title", label: "Title" },
        ColumnSpec { key: "description", label: "Description" },
        ColumnSpec { key: "requirements", label: "Requirements" },
        ColumnSpec { key: "location", label: "Location" },
    ],
    fields: &[
        FieldSpec {
            key: "title",
            label: "Title",
            placeholder: "Enter job title",
            kind: FieldKind::Text,
            required: Some("Title is required"),
        },
        FieldSpec {
            key: "description",
            label: "Description",
            placeholder: "Describe the role",
            kind: FieldKind::TextArea,
            required: Some("Description is required"),
        },
        FieldSpec {
            key: "requirements",
            label: "Requirements",
            placeholder: "List the requirements",
            kind: FieldKind::TextArea,
            required: None,
        },
        FieldSpec {
            key: "location",
            label: "Location",
            placeholder: "e.g. Jakarta / Remote",
            kind: FieldKind::Text,
            required: None,
        },
        FieldSpec {
            key: "employment_type",
            label: "Employment Type",
            placeholder: "e.g. Full-time",
            kind: FieldKind::Text,
            required: None,
        },
        FieldSpec {
            key: "salary_range",
            label: "Salary Range",
            placeholder: "e.g. $40k-$60k",
            kind: FieldKind::Text,
            required: None,
        },
    ],
    media: Some(MediaSpec {
        field: "image",
        label: "Image",
        required: None,
    }),
    search_fields: &["title", "description", "requirements"],
};

impl AdminResource for CareerOpportunity {
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
            "requirements" => self.requirements.clone(),
            "location" => self.location.clone(),
            "employment_type" => self.employment_type.clone(),
            "salary_range" => self.salary_range.clone(),
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
        values.set("requirements", self.requirements.clone());
        values.set("location", self.location.clone());
        values.set("employment_type", self.employment_type.clone());
        values.set("salary_range", self.salary_range.clone());
        values
    }
}
