use contracts::dashboards::d401_missing_data::RealTimeInfo;
use contracts::domain::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Landing page: data-quality summary and one tile per resource table
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let info: RwSignal<Option<RealTimeInfo>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_real_time_info().await {
                Ok(data) => {
                    info.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Failed to load data summary: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let summary = move || {
        info.get().map(|info| {
            let worst = match (info.worst_kind(), info.table_with_most_missing_data.clone()) {
                (Some(kind), _) => kind.metadata().ui.title.to_string(),
                (None, Some(table)) => table,
                (None, None) => "None".to_string(),
            };
            view! {
                <div class="dashboard-cards">
                    <div class="dashboard-card">
                        <div class="dashboard-card__label">"Total missing values"</div>
                        <div class="dashboard-card__value">{info.total_missing_data}</div>
                    </div>
                    <div class="dashboard-card">
                        <div class="dashboard-card__label">"Table with most missing data"</div>
                        <div class="dashboard-card__value">{worst}</div>
                    </div>
                    <div class="dashboard-card">
                        <div class="dashboard-card__label">"Missing in that table"</div>
                        <div class="dashboard-card__value">{info.max_missing_count}</div>
                    </div>
                </div>
            }
        })
    };

    let tiles = ResourceKind::ALL
        .into_iter()
        .map(|kind| {
            let meta = kind.metadata();
            view! {
                <button class="resource-tile" on:click=move |_| ctx.open_tab(meta.key, meta.ui.title)>
                    {icon(meta.ui.icon.unwrap_or("database"))}
                    <span>{meta.ui.title}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Survey Data Overview"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {summary}
                <h2 class="page__subtitle">"Reference tables"</h2>
                <div class="resource-tiles">{tiles}</div>
            </div>
        </PageFrame>
    }
}
