//! The generic Resource Admin Screen pair.
//!
//! Every managed entity gets the same list + form, driven by its
//! `ResourceDescriptor`; nothing entity-specific lives outside `contracts`.

pub mod form;
pub mod list;

pub use form::resource_form;
pub use list::resource_list;
