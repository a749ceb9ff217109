//! Generic resource table screen
//!
//! `model` talks HTTP, `view_model` wraps the controller state from
//! `contracts::shared::resource_table` in a signal, and the views render
//! whatever the resource metadata describes.

mod delete_modal;
mod form_modal;
pub mod model;
pub mod view;
pub mod view_model;

pub use view::ResourceTablePage;
