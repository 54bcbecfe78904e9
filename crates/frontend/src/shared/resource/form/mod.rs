//! Generic create/edit form.
//!
//! - `view_model.rs`: state and commands (load, validate, save)
//! - `view.rs`: the rendered form

mod view;
mod view_model;

pub use view::resource_form;
pub use view_model::{FormLoad, ResourceFormViewModel};
