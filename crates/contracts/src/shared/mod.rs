pub mod api_error;
pub mod draft;
pub mod metadata;
pub mod record;
pub mod resource_table;
pub mod search;
