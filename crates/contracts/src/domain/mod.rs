//! One module per managed content entity.
//!
//! Each module holds the record as the backend returns it plus its
//! `ResourceDescriptor`. Field names, endpoint segments, and the exact
//! required-field messages are part of the backend contract.

pub mod about_us;
pub mod business_line;
pub mod career;
pub mod career_opportunity;
pub mod client;
pub mod microdata_option;
pub mod partnership;
pub mod portfolio;
pub mod portfolio_category;
pub mod position;
pub mod process;
pub mod service;
pub mod service_landing_page;
pub mod team;
pub mod technology;

use crate::shared::descriptor::ResourceDescriptor;

/// Every descriptor, in sidebar order. The navigation shell and the
/// dashboard iterate this instead of hardcoding entity lists.
pub fn all_descriptors() -> &'static [&'static ResourceDescriptor] {
    static ALL: &[&ResourceDescriptor] = &[
        &about_us::DESCRIPTOR,
        &business_line::DESCRIPTOR,
        &microdata_option::DESCRIPTOR,
        &process::DESCRIPTOR,
        &team::DESCRIPTOR,
        &position::DESCRIPTOR,
        &client::DESCRIPTOR,
        &career::DESCRIPTOR,
        &career_opportunity::DESCRIPTOR,
        &portfolio::DESCRIPTOR,
        &portfolio_category::DESCRIPTOR,
        &partnership::DESCRIPTOR,
        &service::DESCRIPTOR,
        &service_landing_page::DESCRIPTOR,
        &technology::DESCRIPTOR,
    ];
    ALL
}

/// Look a descriptor up by its tab key.
pub fn descriptor_by_key(key: &str) -> Option<&'static ResourceDescriptor> {
    all_descriptors().iter().copied().find(|d| d.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_and_resources_are_unique() {
        let descriptors = all_descriptors();
        let keys: HashSet<_> = descriptors.iter().map(|d| d.key).collect();
        let resources: HashSet<_> = descriptors.iter().map(|d| d.resource).collect();
        assert_eq!(keys.len(), descriptors.len());
        assert_eq!(resources.len(), descriptors.len());
    }

    #[test]
    fn search_fields_are_known_columns_or_fields() {
        for d in all_descriptors() {
            for key in d.search_fields {
                let in_columns = d.columns.iter().any(|c| &c.key == key);
                let in_fields = d.fields.iter().any(|f| &f.key == key);
                assert!(
                    in_columns || in_fields,
                    "{}: search field {key} is not a column or field",
                    d.key
                );
            }
        }
    }

    #[test]
    fn lookup_by_key_round_trips() {
        assert_eq!(descriptor_by_key("team").unwrap().resource, "teams");
        assert!(descriptor_by_key("nope").is_none());
    }
}
