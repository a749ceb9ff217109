use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|state| state.is_admin())
            fallback=|| view! { <div class="access-denied">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
