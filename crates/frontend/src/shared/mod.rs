pub mod api_utils;
pub mod icons;
pub mod modal_frame;
pub mod page_frame;
pub mod page_standard;
pub mod resource_table;
