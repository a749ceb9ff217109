//! Tab titles by tab key

use contracts::domain::ResourceKind;

/// Readable title for a tab key; resource tables use their metadata title.
/// Unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    if let Some(kind) = ResourceKind::from_key(key) {
        return kind.metadata().ui.title;
    }
    match key {
        "home" => "Home",
        "status" => "Data Status",
        "sys_users" => "Users",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a006_labor_cost"), "Labor Cost Data");
        assert_eq!(tab_label_for_key("sys_users"), "Users");
        assert_eq!(tab_label_for_key("something_else"), "something_else");
    }
}
