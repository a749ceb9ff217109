mod state;

use contracts::system::users::{CreateUserDto, CREDENTIAL_MAX_LENGTH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use state::create_state;

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(names) => {
                    state.update(|s| {
                        s.items = names;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::warn!("users: {}", e);
                    set_error.set(Some(format!("Failed to load users: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());
    Effect::new(move |_| {
        let query = search_signal.get();
        state.update(|s| s.search_query = query);
    });

    let deleting = Signal::derive(move || state.with(|s| s.deleting));

    let confirm_delete = move || {
        let Some(username) = state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::delete_user(username.clone()).await {
                Ok(()) => {
                    set_notice.set(Some(format!("User {} deleted.", username)));
                    load_data();
                }
                Err(e) => {
                    log::warn!("users: delete {} failed: {}", username, e);
                    set_error.set(Some(format!("Error deleting user: {}", e)));
                }
            }
            state.update(|s| s.finish_delete());
        });
    };

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>
                        {move || state.with(|s| s.items.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

                <CreateUserForm on_created=move |username: String| {
                    set_error.set(None);
                    set_notice.set(Some(format!("User {} created.", username)));
                    load_data();
                } />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        {icon("search")}
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search_signal placeholder="Username..." />
                        </div>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>"Username"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible())
                                key=|name| name.clone()
                                children=move |name: String| {
                                    let for_delete = name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| state.update(|s| s.ask_delete(for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || state.with(|s| s.pending_delete.clone()).map(|username| view! {
                <ModalFrame
                    on_close=Callback::new(move |_| state.update(|s| s.cancel_delete()))
                    locked=deleting
                    modal_class="modal--confirm"
                >
                    <div class="modal-header">
                        <h2 class="modal-title">"Confirm Delete"</h2>
                    </div>
                    <div class="modal-body">
                        <p>{format!("Are you sure you want to delete the user \"{}\"?", username)}</p>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.update(|s| s.cancel_delete())
                            disabled=deleting
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| confirm_delete()
                            disabled=deleting
                        >
                            {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                        </Button>
                    </div>
                </ModalFrame>
            })}
        </PageFrame>
    }
}

#[component]
fn CreateUserForm<F>(on_created: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy + Send + Sync,
{
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = CreateUserDto {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_user(&dto).await {
                Ok(()) => {
                    username.set(String::new());
                    password.set(String::new());
                    on_created(dto.username);
                }
                Err(e) => set_error.set(Some(format!("Error adding user: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("plus")}
                    <span class="filter-panel__title">"Add user"</span>
                </div>
            </div>
            <div class="filter-panel-content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="form__group">
                        <Label>"Username"</Label>
                        <Input
                            value=username
                            placeholder=format!("max {} characters", CREDENTIAL_MAX_LENGTH)
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Add user" }}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
