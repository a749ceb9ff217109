//! Tab content registry: maps a tab key to its view

use contracts::domain::ResourceKind;
use leptos::prelude::*;

use crate::dashboards::{HomeDashboard, StatusDashboard};
use crate::shared::resource_table::ResourceTablePage;
use crate::system::users::ui::list::UsersListPage;

/// Renders the content of the tab with `key`
pub fn render_tab_content(key: &str) -> AnyView {
    if let Some(kind) = ResourceKind::from_key(key) {
        return view! { <ResourceTablePage kind=kind /> }.into_any();
    }

    match key {
        "home" => view! { <HomeDashboard /> }.into_any(),
        "status" => view! { <StatusDashboard /> }.into_any(),
        "sys_users" => view! { <UsersListPage /> }.into_any(),
        unknown => {
            log::warn!("no view registered for tab '{}'", unknown);
            let message = format!("Unknown page: {}", unknown);
            view! { <div class="page page--placeholder">{message}</div> }.into_any()
        }
    }
}
