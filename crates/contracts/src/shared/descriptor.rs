//! Declarative per-resource metadata driving the generic admin screens.
//!
//! All string fields are `'static` for zero-cost compile-time constants.
//! Each managed entity exposes exactly one `ResourceDescriptor` via its
//! `AdminResource` impl; the list view, the form, and the HTTP adapter are
//! driven entirely by this data.

use crate::shared::form::FormValues;
use serde::de::DeserializeOwned;

/// How an update call travels to the backend.
///
/// `MethodOverride` sends a multipart POST with an embedded `_method=PUT`
/// field; `NativePut` uses the real HTTP verb. Both hit the same admin path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    MethodOverride,
    NativePut,
}

/// Field name carrying the override marker in multipart update bodies.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// A column of the list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// Where a select field loads its options from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectSource {
    /// Backend resource segment, e.g. `portofolio-categories`.
    pub resource: &'static str,
    /// Read the options through the admin-prefixed path.
    pub admin: bool,
    /// Field of the option record used as the visible label.
    pub label_field: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Select(SelectSource),
}

/// One form field. `required` carries the exact message shown when the
/// trimmed value is empty on submit; `None` means optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: Option<&'static str>,
}

/// The media (image upload) slot of a form, when the entity has one.
///
/// `field` is the multipart part name for a freshly selected file; the
/// persisted value arrives from the backend as a separate `…_url` field on
/// the record and is never echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub required: Option<&'static str>,
}

/// Complete description of one managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Stable key used for tabs and the sidebar.
    pub key: &'static str,
    /// Backend path segment, e.g. `teams`.
    pub resource: &'static str,
    /// Singular display name ("Team Member").
    pub element_name: &'static str,
    /// Plural display name ("Team Members").
    pub list_name: &'static str,
    pub icon: &'static str,
    /// Collection read goes through `/admin/{resource}` instead of
    /// `/{resource}`. The backend exposes both inconsistently per entity;
    /// the divergence is preserved here as data.
    pub admin_list: bool,
    /// Same, for the single-record read.
    pub admin_detail: bool,
    pub update: UpdateStrategy,
    pub columns: &'static [ColumnSpec],
    pub fields: &'static [FieldSpec],
    pub media: Option<MediaSpec>,
    /// Column keys matched by the client-side search filter.
    pub search_fields: &'static [&'static str],
}

impl ResourceDescriptor {
    /// Path of the collection read, relative to the API root.
    pub fn collection_path(&self) -> String {
        if self.admin_list {
            format!("/admin/{}", self.resource)
        } else {
            format!("/{}", self.resource)
        }
    }

    /// Path of the single-record read.
    pub fn record_path(&self, id: i64) -> String {
        if self.admin_detail {
            format!("/admin/{}/{}", self.resource, id)
        } else {
            format!("/{}/{}", self.resource, id)
        }
    }

    /// Create always POSTs to the admin collection path.
    pub fn create_path(&self) -> String {
        format!("/admin/{}", self.resource)
    }

    /// Update and delete both address the admin record path.
    pub fn mutate_path(&self, id: i64) -> String {
        format!("/admin/{}/{}", self.resource, id)
    }
}

/// One content type managed by an admin screen.
///
/// Implementations are plain data: the record as the backend returns it,
/// plus accessors the generic screens need. The descriptor is the single
/// source of truth for endpoints, columns, and form layout.
pub trait AdminResource: DeserializeOwned + Clone + Send + Sync + 'static {
    fn descriptor() -> &'static ResourceDescriptor;

    /// Backend-assigned identifier; immutable, echoed back only in paths.
    fn id(&self) -> i64;

    /// Human-readable name shown in the delete confirmation.
    fn display_name(&self) -> String;

    /// Value of a list column / search field. Unknown keys yield "".
    fn cell(&self, column: &str) -> String;

    /// Persisted media URL, when the entity carries one.
    fn media_url(&self) -> Option<String> {
        None
    }

    /// Pre-populate the edit form from a fetched record.
    fn to_form(&self) -> FormValues;
}

#[cfg(test)]
mod tests {
    use super::*;

    const D_PUBLIC: ResourceDescriptor = ResourceDescriptor {
        key: "team",
        resource: "teams",
        element_name: "Team Member",
        list_name: "Team Members",
        icon: "users",
        admin_list: false,
        admin_detail: true,
        update: UpdateStrategy::MethodOverride,
        columns: &[],
        fields: &[],
        media: None,
        search_fields: &[],
    };

    const D_ADMIN: ResourceDescriptor = ResourceDescriptor {
        key: "about_us",
        resource: "about-us",
        element_name: "About Info",
        list_name: "About Us",
        icon: "info",
        admin_list: true,
        admin_detail: false,
        update: UpdateStrategy::NativePut,
        columns: &[],
        fields: &[],
        media: None,
        search_fields: &[],
    };

    #[test]
    fn collection_path_respects_admin_prefix() {
        assert_eq!(D_PUBLIC.collection_path(), "/teams");
        assert_eq!(D_ADMIN.collection_path(), "/admin/about-us");
    }

    #[test]
    fn record_path_respects_admin_prefix() {
        assert_eq!(D_PUBLIC.record_path(7), "/admin/teams/7");
        assert_eq!(D_ADMIN.record_path(7), "/about-us/7");
    }

    #[test]
    fn mutations_always_use_admin_paths() {
        assert_eq!(D_PUBLIC.create_path(), "/admin/teams");
        assert_eq!(D_PUBLIC.mutate_path(3), "/admin/teams/3");
        assert_eq!(D_ADMIN.create_path(), "/admin/about-us");
        assert_eq!(D_ADMIN.mutate_path(3), "/admin/about-us/3");
    }
}
