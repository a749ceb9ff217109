//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{tab key}--{category}` (e.g. `"a001_fertilizer--list"`) and a
//! `data-page-category` taken from the constants below.

/// Resource table screen
pub const PAGE_CAT_LIST: &str = "list";

/// Home / status overview
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration page
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Builds `"{key}--{category}"`
pub fn page_id(key: &str, category: &str) -> String {
    format!("{key}--{category}")
}

/// Validate that a page id matches the `{key}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((key, cat)) if !key.is_empty() && !cat.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("a001_fertilizer", PAGE_CAT_LIST);
        assert_eq!(id, "a001_fertilizer--list");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a001_fertilizer"));
        assert!(!is_valid_page_id("--list"));
    }
}
