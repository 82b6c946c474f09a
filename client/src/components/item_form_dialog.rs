//! Edit / create dialog over the inventory draft.
//!
//! ARCHITECTURE
//! ============
//! Inputs write raw text straight into `InventoryState::edit_field`; the
//! draft does all coercion. Validation runs only when Save is pressed, in
//! the page's save flow.

use leptos::prelude::*;

#[cfg(test)]
#[path = "item_form_dialog_test.rs"]
mod item_form_dialog_test;

use crate::net::types::SUPPLY_TYPES;
use crate::state::form::{DraftField, FieldKind};
use crate::state::inventory::InventoryState;

/// Input widget used for a draft field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// `<input type=..>` with the given type attribute.
    Input(&'static str),
    Number { step: &'static str },
    TextArea,
    Select,
    Checkbox,
}

#[must_use]
pub fn control_for(field: DraftField) -> Control {
    match (field, field.kind()) {
        (DraftField::TypeOfSupply, _) => Control::Select,
        (DraftField::Description | DraftField::OtherNotes, _) => Control::TextArea,
        (DraftField::ExpiresOn, _) => Control::Input("date"),
        (DraftField::ImageUrl | DraftField::RelevantLink, _) => Control::Input("url"),
        (_, FieldKind::Integer) => Control::Number { step: "1" },
        (_, FieldKind::Real) => Control::Number { step: "0.01" },
        (_, FieldKind::Flag) => Control::Checkbox,
        (_, FieldKind::Text) => Control::Input("text"),
    }
}

/// Label text with a required marker.
#[must_use]
pub fn field_label(field: DraftField) -> String {
    if field.is_required() { format!("{} *", field.label()) } else { field.label().to_owned() }
}

#[component]
pub fn ItemFormDialog(
    inventory: RwSignal<InventoryState>,
    title: &'static str,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_save.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog dialog--item-form"
                on:click=move |ev| ev.stop_propagation()
                on:submit=on_submit
            >
                <h2 class="dialog__title">{title}</h2>
                <div class="dialog__grid">
                    {DraftField::ALL
                        .into_iter()
                        .map(|field| view! { <DraftInput field=field inventory=inventory/> })
                        .collect_view()}
                </div>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn DraftInput(field: DraftField, inventory: RwSignal<InventoryState>) -> impl IntoView {
    let value = move || inventory.with(|s| s.draft.display(field));
    let set = move |raw: String| inventory.update(|s| s.edit_field(field, &raw));
    let label = field_label(field);

    let control = match control_for(field) {
        Control::Select => view! {
            <select
                class="dialog__input"
                prop:value=value
                on:change=move |ev| set(event_target_value(&ev))
            >
                <option value="">"Select a type"</option>
                {SUPPLY_TYPES
                    .into_iter()
                    .map(|label| view! { <option value=label>{label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        Control::TextArea => view! {
            <textarea
                class="dialog__textarea"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        Control::Checkbox => view! {
            <input
                class="dialog__checkbox"
                type="checkbox"
                prop:checked=move || value() == "true"
                on:change=move |ev| set(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        Control::Number { step } => view! {
            <input
                class="dialog__input"
                type="number"
                min="0"
                step=step
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        Control::Input(kind) => view! {
            <input
                class="dialog__input"
                type=kind
                required=field.is_required()
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <label class="dialog__label" data-field=field.key()>
            {label}
            {control}
        </label>
    }
}
