//! Read-only dialog showing every field of one item.
//!
//! Links that are not web URLs render as plain text.

use leptos::prelude::*;

use crate::net::types::SupplyItem;
use crate::util::url::{safe_href, safe_image_src};

#[component]
pub fn ItemDetailDialog(item: SupplyItem, on_close: Callback<()>, on_edit: Callback<SupplyItem>) -> impl IntoView {
    let rows: Vec<(&'static str, String)> = vec![
        ("Description", item.description.clone()),
        ("Type of Supply", item.type_of_supply.clone()),
        ("Quantity", item.quantity.to_string()),
        ("Lot Number", item.lot_number.clone()),
        ("Expires On", item.expires_on.clone()),
        ("Company", item.company.clone()),
        ("Pallet Location", item.pallet_location.clone()),
        ("Cardboard Boxes per Pallet", item.cardboard_boxes_per_pallet.to_string()),
        ("Unit Boxes per Cardboard", item.unit_boxes_per_cardboard.to_string()),
        ("Units per Box", item.units_per_box.to_string()),
        ("Weight per Cardboard Box", format!("{} kg", item.weight_per_cardboard_box)),
        ("Dimensions of Cardboard Box", item.dimensions_cardboard_box.clone()),
        ("Cost per Unit Box", format!("${:.2}", item.cost_per_unit_box)),
        ("Cost per Cardboard Box", format!("${:.2}", item.cost_per_cardboard_box)),
    ];
    let badge_class = if item.is_expired { "badge badge--expired" } else { "badge badge--active" };
    let status = item.status_label();
    let link = (!item.relevant_link.is_empty()).then(|| item.relevant_link.clone());
    let notes = (!item.other_notes.is_empty()).then(|| item.other_notes.clone());
    let title = item.name.clone();
    let image_src = safe_image_src(&item.image_url).to_owned();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--item-detail" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2 class="dialog__title">{title.clone()}</h2>
                    <span class=badge_class>{status}</span>
                </header>
                <img class="dialog__image" src=image_src alt=title/>
                <dl class="detail-list">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }
                        })
                        .collect_view()}
                    {link
                        .map(|raw| {
                            let href = safe_href(&raw).map(str::to_owned);
                            let value = match href {
                                Some(href) => {
                                    view! {
                                        <a href=href target="_blank" rel="noopener noreferrer">
                                            {raw}
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => view! { <span>{raw}</span> }.into_any(),
                            };
                            view! {
                                <dt>"Relevant Link"</dt>
                                <dd>{value}</dd>
                            }
                        })}
                    {notes
                        .map(|text| {
                            view! {
                                <dt>"Other Notes"</dt>
                                <dd>{text}</dd>
                            }
                        })}
                </dl>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_edit.run(item.clone())>
                        "Edit"
                    </button>
                </div>
            </div>
        </div>
    }
}
