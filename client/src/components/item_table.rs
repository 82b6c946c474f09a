//! Inventory table listing the filtered items.
//!
//! Clicking a row opens the detail dialog. The image link opens the image in
//! a new tab without selecting the row; non-web image URLs show the
//! placeholder instead.

use leptos::prelude::*;

use crate::net::types::SupplyItem;
use crate::state::inventory::InventoryState;
use crate::util::url::safe_image_src;

#[component]
pub fn ItemTable(inventory: RwSignal<InventoryState>) -> impl IntoView {
    let rows = move || inventory.with(|s| s.filtered.clone());

    view! {
        <Show
            when=move || inventory.with(|s| !s.filtered.is_empty())
            fallback=move || {
                view! {
                    <p class="item-table__empty">
                        {move || {
                            if inventory.with(|s| s.items.is_empty()) {
                                "No medical supplies yet."
                            } else {
                                "No items match the current filters."
                            }
                        }}
                    </p>
                }
            }
        >
            <table class="item-table">
                <thead>
                    <tr>
                        <th>"Image"</th>
                        <th>"Name"</th>
                        <th>"Status"</th>
                        <th>"Type"</th>
                        <th class="item-table__num">"Quantity"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|item| item.id.clone()
                        children=move |item| view! { <ItemRow item=item inventory=inventory/> }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn ItemRow(item: SupplyItem, inventory: RwSignal<InventoryState>) -> impl IntoView {
    let badge_class = if item.is_expired { "badge badge--expired" } else { "badge badge--active" };
    let status = item.status_label();
    let image_src = safe_image_src(&item.image_url).to_owned();
    let image_href = image_src.clone();
    let name = item.name.clone();
    let supply_type = item.type_of_supply.clone();
    let quantity = item.quantity;

    view! {
        <tr class="item-table__row" on:click=move |_| inventory.update(|s| s.select_item(item.clone()))>
            <td>
                <a
                    href=image_href
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <img class="item-table__thumb" src=image_src alt=name.clone()/>
                </a>
            </td>
            <td>{name}</td>
            <td>
                <span class=badge_class>{status}</span>
            </td>
            <td>{supply_type}</td>
            <td class="item-table__num">{quantity}</td>
        </tr>
    }
}
