use contracts::domain::ResourceKind;
use contracts::shared::resource_table::{AlertKind, LoadState};
use leptos::prelude::*;
use thaw::*;

use super::delete_modal::DeleteConfirmModal;
use super::form_modal::ResourceFormModal;
use super::view_model::ResourceTableViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

/// Table screen for one resource kind: list, search, add/update/delete, ingest
#[component]
pub fn ResourceTablePage(kind: ResourceKind) -> impl IntoView {
    let vm = ResourceTableViewModel::new(kind);
    let meta = vm.meta();
    let state = vm.state;

    // fetch on mount
    Effect::new(move |_| {
        if state.with_untracked(|s| s.load == LoadState::NotLoaded) {
            vm.load();
        }
    });

    let search = RwSignal::new(String::new());
    Effect::new(move |_| vm.set_search(search.get()));

    let loading = Signal::derive(move || state.with(|s| s.in_flight.list));
    let ingesting = Signal::derive(move || state.with(|s| s.in_flight.ingest));

    let header_cells = meta
        .list_fields()
        .map(|field| {
            view! {
                <TableHeaderCell resizable=false min_width=120.0>
                    {field.ui.label}
                </TableHeaderCell>
            }
        })
        .collect_view();

    let rows = move || {
        state.with(|s| {
            s.visible_records()
                .into_iter()
                .map(|record| {
                    let for_update = record.clone();
                    let for_delete = record.clone();
                    let cells = meta
                        .list_fields()
                        .map(|field| {
                            let text = record.text(field.name);
                            view! {
                                <TableCell>
                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    view! {
                        <TableRow>
                            {cells}
                            <TableCell>
                                <Flex gap=FlexGap::Small>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.open_update(&for_update)
                                        attr:title="Update"
                                    >
                                        {icon("edit")}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.open_delete(&for_delete)
                                        attr:title="Delete"
                                    >
                                        {icon("trash")}
                                    </Button>
                                </Flex>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    let empty_text = format!("No {} found.", meta.ui.list_name.to_lowercase());
    let is_empty = move || {
        state.with(|s| s.load == LoadState::Loaded && s.visible_records().is_empty())
    };

    view! {
        <PageFrame page_id=page_id(meta.key, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {meta.ui.icon.map(icon)}
                    <h1 class="page__title">{meta.ui.title}</h1>
                    <Badge>{move || state.with(|s| s.records.len().to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_add()>
                        {icon("plus")}
                        {format!(" Add {}", meta.ui.element_name)}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.ingest()
                        disabled=ingesting
                    >
                        {icon("import")}
                        {move || if ingesting.get() { " Ingesting...".to_string() } else { format!(" Ingest {}", meta.ui.list_name) }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.with(|s| s.alert.clone()).map(|alert| {
                    let class = match alert.kind {
                        AlertKind::Success => "alert alert--success",
                        AlertKind::Danger => "alert alert--error",
                    };
                    view! {
                        <div class=class role="alert">
                            <span>{alert.message}</span>
                            <button class="alert__close" on:click=move |_| vm.dismiss_alert()>
                                {icon("x")}
                            </button>
                        </div>
                    }
                })}

                {move || match state.with(|s| s.load.clone()) {
                    LoadState::Failed(message) => Some(view! {
                        <div class="alert alert--error">{message}</div>
                    }),
                    _ => None,
                }}

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        {icon("search")}
                        <div style="flex: 1; max-width: 360px;">
                            <Input value=search placeholder=format!("Search {}...", meta.ui.list_name.to_lowercase()) />
                        </div>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {header_cells}
                                <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>

                    <Show when=move || loading.get() && state.with(|s| s.records.is_empty())>
                        <div class="table-placeholder"><Spinner /></div>
                    </Show>
                    <Show when=is_empty>
                        <div class="table-placeholder">{empty_text.clone()}</div>
                    </Show>
                </div>
            </div>

            <Show when=move || state.with(|s| s.modal_open)>
                <ResourceFormModal vm=vm />
            </Show>
            <Show when=move || state.with(|s| s.delete_modal_open)>
                <DeleteConfirmModal vm=vm />
            </Show>
        </PageFrame>
    }
}
