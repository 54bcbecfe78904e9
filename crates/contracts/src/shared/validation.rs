//! Synchronous pre-submit validation.
//!
//! Checks run in descriptor field order and short-circuit: the first
//! violated field's message is the one (and only one) shown. Media presence
//! counts either a freshly selected file or an existing preview.

use crate::shared::descriptor::ResourceDescriptor;
use crate::shared::form::FormValues;

/// Return the first required-field violation, or `None` when the form may
/// be submitted. Must be called before any network traffic.
pub fn first_violation(
    descriptor: &ResourceDescriptor,
    values: &FormValues,
    media_present: bool,
) -> Option<&'static str> {
    for field in descriptor.fields {
        if let Some(message) = field.required {
            if values.get(field.key).trim().is_empty() {
                return Some(message);
            }
        }
    }
    if let Some(media) = &descriptor.media {
        if let Some(message) = media.required {
            if !media_present {
                return Some(message);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::descriptor::{FieldKind, FieldSpec, MediaSpec, UpdateStrategy};

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        key: "about_us",
        resource: "about-us",
        element_name: "About Info",
        list_name: "About Us",
        icon: "info",
        admin_list: true,
        admin_detail: false,
        update: UpdateStrategy::NativePut,
        columns: &[],
        fields: &[
            FieldSpec {
                key: "title",
                label: "Title",
                placeholder: "",
                kind: FieldKind::Text,
                required: Some("Title is required"),
            },
            FieldSpec {
                key: "description",
                label: "Description",
                placeholder: "",
                kind: FieldKind::TextArea,
                required: Some("Description is required"),
            },
            FieldSpec {
                key: "vision",
                label: "Vision",
                placeholder: "",
                kind: FieldKind::TextArea,
                required: Some("Vision is required"),
            },
            FieldSpec {
                key: "mission",
                label: "Mission",
                placeholder: "",
                kind: FieldKind::TextArea,
                required: Some("Mission is required"),
            },
        ],
        media: None,
        search_fields: &[],
    };

    fn filled() -> FormValues {
        let mut values = FormValues::new();
        values.set("title", "T".into());
        values.set("description", "D".into());
        values.set("vision", "V".into());
        values.set("mission", "M".into());
        values
    }

    #[test]
    fn empty_form_reports_only_the_first_violation() {
        let values = FormValues::new();
        assert_eq!(
            first_violation(&DESCRIPTOR, &values, false),
            Some("Title is required")
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut values = filled();
        values.set("vision", "   ".into());
        assert_eq!(
            first_violation(&DESCRIPTOR, &values, false),
            Some("Vision is required")
        );
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(first_violation(&DESCRIPTOR, &filled(), false), None);
    }

    #[test]
    fn required_media_checks_after_text_fields() {
        let mut with_media = DESCRIPTOR;
        with_media.media = Some(MediaSpec {
            field: "image",
            label: "Image",
            required: Some("Image is required"),
        });
        assert_eq!(
            first_violation(&with_media, &filled(), false),
            Some("Image is required")
        );
        assert_eq!(first_violation(&with_media, &filled(), true), None);
    }
}
