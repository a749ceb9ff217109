use contracts::shared::metadata::{FieldMetadata, FieldType};
use contracts::shared::resource_table::{AlertKind, FormMode};
use leptos::prelude::*;
use thaw::*;

use super::view_model::ResourceTableViewModel;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Add/update form rendered from the resource's field metadata
#[component]
pub fn ResourceFormModal(vm: ResourceTableViewModel) -> impl IntoView {
    let meta = vm.meta();
    let state = vm.state;
    let submitting = Signal::derive(move || state.with(|s| s.in_flight.submit.is_some()));
    let mode = move || state.with(|s| s.mode);

    let title = move || match mode() {
        FormMode::Add => format!("Add {}", meta.ui.element_name),
        FormMode::Update => format!("Update {}", meta.ui.element_name),
    };

    // the primary button and Enter both submit; a repeat while one is running is a no-op
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let fields = meta
        .form_fields()
        .map(|field| view! { <FormField vm=vm field=field /> })
        .collect_view();

    view! {
        <ModalFrame on_close=Callback::new(move |_| vm.cancel_form()) locked=submitting>
            <form on:submit=on_submit>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        button_type=ButtonType::Button
                        on_click=move |_| vm.cancel_form()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || {
                        state
                            .with(|s| s.alert.clone())
                            .filter(|a| a.kind == AlertKind::Danger)
                            .map(|a| view! { <div class="alert alert--error">{a.message}</div> })
                    }}
                    {fields}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        button_type=ButtonType::Button
                        on_click=move |_| vm.cancel_form()
                        disabled=submitting
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=submitting
                    >
                        {move || match (submitting.get(), mode()) {
                            (true, _) => "Saving...",
                            (false, FormMode::Add) => "Add",
                            (false, FormMode::Update) => "Update",
                        }}
                    </Button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn FormField(vm: ResourceTableViewModel, field: &'static FieldMetadata) -> impl IntoView {
    let state = vm.state;
    let name = field.name;
    let input_id = format!("field-{}", name);

    let value = move || state.with(|s| s.draft.get(name).to_string());
    let locked = move || state.with(|s| s.is_locked(name));
    let error = move || state.with(|s| s.field_error(name).map(str::to_string));
    let on_input = move |ev: leptos::ev::Event| vm.set_field(name, event_target_value(&ev));

    let input = match field.field_type {
        FieldType::Choice => {
            let options = field
                .enum_values
                .unwrap_or(&[])
                .iter()
                .map(|v| view! { <option value=*v>{*v}</option> })
                .collect_view();
            view! {
                <select
                    id=input_id.clone()
                    class="form__select"
                    prop:value=value
                    on:change=on_input
                    disabled=locked
                >
                    <option value="">{format!("Select {}", field.ui.label)}</option>
                    {options}
                </select>
            }
            .into_any()
        }
        FieldType::Number { step } => view! {
            <input
                id=input_id.clone()
                class="form__input"
                type="number"
                step=step
                placeholder=field.ui.placeholder.unwrap_or("")
                prop:value=value
                on:input=on_input
                disabled=locked
            />
        }
        .into_any(),
        FieldType::Text => view! {
            <input
                id=input_id.clone()
                class="form__input"
                type="text"
                placeholder=field.ui.placeholder.unwrap_or("")
                prop:value=value
                on:input=on_input
                disabled=locked
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error().is_some()>
            <label for=input_id>
                {field.ui.label}
                {field.validation.required.then_some(" *")}
            </label>
            {input}
            {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
