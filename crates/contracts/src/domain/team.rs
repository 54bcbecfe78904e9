//! Team members shown on the marketing site, with an optional photo.

use crate::shared::descriptor::{
    AdminResource, ColumnSpec, FieldKind, FieldSpec, MediaSpec, ResourceDescriptor, UpdateStrategy,
};
use crate::shared::form::FormValues;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub position: String,
    /// Stored filename; never echoed back on update.
    #[serde(default)]
    pub photo: Option<String>,
    /// Resolved URL for display.
    #[serde(default)]
    pub photo_url: Option<String>,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "team",
    resource: "teams",
    element_name: "Team Member",
    list_name: "Team Members",
    icon: "users",
    admin_list: false,
    admin_detail: true,
    update: UpdateStrategy::MethodOverride,
    columns: &[
        ColumnSpec { key: "name", label: "Name" },
        ColumnSpec { key: "position", label: "Position" },
    ],
    fields: &[
        FieldSpec {
            key: "name",
            label: "Name",
            placeholder: "Enter team member name",
            kind: FieldKind::Text,
            required: Some("Name is required"),
        },
        FieldSpec {
            key: "position",
            label: "Position",
            placeholder: "Enter position",
            kind: FieldKind::Text,
            required: Some("Position is required"),
        },
    ],
    media: Some(MediaSpec {
        field: "photo",
        label: "Photo",
        required: None,
    }),
    search_fields: &["name", "position"],
};

impl AdminResource for TeamMember {
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
            "position" => self.position.clone(),
            _ => String::new(),
        }
    }

    fn media_url(&self) -> Option<String> {
        self.photo_url.clone()
    }

    fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("name", self.name.clone());
        values.set("position", self.position.clone());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_with_and_without_photo() {
        let with: TeamMember = serde_json::from_value(json!({
            "id": 1, "name": "Ann", "position": "CTO",
            "photo": "ann.png", "photo_url": "https://cdn/x/ann.png"
        }))
        .unwrap();
        assert_eq!(with.media_url().as_deref(), Some("https://cdn/x/ann.png"));

        let without: TeamMember =
            serde_json::from_value(json!({ "id": 2, "name": "Bob", "position": "Dev" })).unwrap();
        assert_eq!(without.media_url(), None);
    }
}
