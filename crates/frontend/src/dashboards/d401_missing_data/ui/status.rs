use contracts::dashboards::d401_missing_data::MissingDataStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Missing values per table, worst first
#[component]
pub fn StatusDashboard() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let status: RwSignal<Option<MissingDataStatus>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_status().await {
                Ok(data) => {
                    status.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Failed to load status: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let grid = move || {
        status.with(|status| {
            status.as_ref().map(|status| {
                let total = status.total();
                let cards = status
                    .entries()
                    .into_iter()
                    .map(|entry| {
                        let title = entry.title().to_string();
                        let kind = entry.kind;
                        let class = if entry.total_missing == 0 {
                            "status-card status-card--ok"
                        } else {
                            "status-card status-card--warning"
                        };
                        view! {
                            <div
                                class=class
                                class:status-card--link=kind.is_some()
                                on:click=move |_| {
                                    if let Some(kind) = kind {
                                        ctx.open_tab(kind.key(), kind.metadata().ui.title);
                                    }
                                }
                            >
                                <div class="status-card__title">{title}</div>
                                <div class="status-card__value">{entry.total_missing}</div>
                                <div class="status-card__hint">"missing values"</div>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <p class="page__summary">{format!("{} missing values in total", total)}</p>
                    <div class="status-grid">{cards}</div>
                }
            })
        })
    };

    view! {
        <PageFrame page_id="status--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Data Status"</h1>
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
                <Show when=move || loading.get() && status.with(|s| s.is_none())>
                    <Spinner />
                </Show>
                {grid}
            </div>
        </PageFrame>
    }
}
