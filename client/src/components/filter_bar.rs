//! Search box and facet selects above the inventory table.

use leptos::prelude::*;

use crate::net::types::SUPPLY_TYPES;
use crate::state::inventory::{ExpiryFilter, InventoryState, TypeFilter};

#[component]
pub fn FilterBar(inventory: RwSignal<InventoryState>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="search"
                placeholder="Search by name or type..."
                prop:value=move || inventory.with(|s| s.filter.search.clone())
                on:input=move |ev| inventory.update(|s| s.set_search(event_target_value(&ev)))
            />
            <select
                class="filter-bar__select"
                prop:value=move || inventory.with(|s| s.filter.expiry.as_str())
                on:change=move |ev| {
                    if let Ok(expiry) = event_target_value(&ev).parse::<ExpiryFilter>() {
                        inventory.update(|s| s.set_expiry_filter(expiry));
                    }
                }
            >
                {ExpiryFilter::ALL
                    .into_iter()
                    .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                    .collect_view()}
            </select>
            <select
                class="filter-bar__select"
                prop:value=move || inventory.with(|s| s.filter.supply_type.to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    inventory.update(|s| s.set_type_filter(TypeFilter::from_value(&value)));
                }
            >
                <option value="all">"All types"</option>
                {SUPPLY_TYPES
                    .into_iter()
                    .map(|label| view! { <option value=label>{label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
