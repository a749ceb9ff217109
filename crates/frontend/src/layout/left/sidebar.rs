//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::domain::ResourceKind;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
    admin_only: bool,
}

fn item(id: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        id,
        label: tab_label_for_key(id),
        icon,
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "activity",
            items: vec![item("home", "home"), item("status", "activity")],
            admin_only: false,
        },
        MenuGroup {
            id: "survey_data",
            label: "Survey Data",
            icon: "database",
            items: ResourceKind::ALL
                .iter()
                .map(|kind| {
                    let meta = kind.metadata();
                    MenuItem {
                        id: meta.key,
                        label: meta.ui.title,
                        icon: meta.ui.icon.unwrap_or("database"),
                    }
                })
                .collect(),
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![item("sys_users", "users")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec!["dashboards", "survey_data"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let group_label = group.label;
                let group_icon = group.icon;
                let admin_only = group.admin_only;
                let items = StoredValue::new(group.items);

                view! {
                    <Show when=move || !admin_only || auth_state.with(|s| s.is_admin())>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|open| {
                                    if let Some(pos) = open.iter().position(|g| *g == group_id) {
                                        open.remove(pos);
                                    } else {
                                        open.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group_icon)}
                                <span>{group_label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|entry| {
                                    let MenuItem { id, label, icon: icon_name } = entry;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </Show>
                }
            }).collect_view()}
        </div>
    }
}
