use leptos::prelude::*;
use thaw::*;

use super::view_model::ResourceTableViewModel;
use crate::shared::modal_frame::ModalFrame;

/// Yes/no prompt for the selected record
#[component]
pub fn DeleteConfirmModal(vm: ResourceTableViewModel) -> impl IntoView {
    let state = vm.state;
    let deleting = Signal::derive(move || state.with(|s| s.in_flight.delete));
    let prompt = move || state.with(|s| s.delete_prompt().unwrap_or_default());

    view! {
        <ModalFrame on_close=Callback::new(move |_| vm.cancel_delete()) locked=deleting modal_class="modal--confirm">
            <div class="modal-header">
                <h2 class="modal-title">"Confirm Delete"</h2>
            </div>
            <div class="modal-body">
                <p>{prompt}</p>
            </div>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.cancel_delete()
                    disabled=deleting
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.confirm_delete()
                    disabled=deleting
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
