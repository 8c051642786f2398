//! Card Item Component
//!
//! Card inside a list column: title, description preview, rename, delete,
//! and the detail overlay.

use leptos::prelude::*;

use crate::components::{CardDetail, InlineEdit};
use crate::context::{spawn_action, BoardContext};
use crate::models::{Card, CardPatch};
use crate::store::description_preview;

#[component]
pub fn CardItem(card: Card) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let (id, list_id) = (card.id, card.list_id);
    let (detail_open, set_detail_open) = signal(false);

    let preview = description_preview(&card.description);
    let detail_card = StoredValue::new(card.clone());

    view! {
        <div class="card-item">
            <InlineEdit
                value=card.title
                class="card-title"
                on_save=move |title: String| spawn_action("rename card", ctx.update_card(id, CardPatch::title(title)))
            />

            {preview.map(|text| view! { <p class="card-preview">{text}</p> })}

            <div class="card-actions">
                <button class="details-btn" on:click=move |_| set_detail_open.set(true)>"Details"</button>
                <button
                    class="delete-btn"
                    on:click=move |_| spawn_action("delete card", ctx.delete_card(id, list_id))
                >
                    "Delete"
                </button>
            </div>

            {move || detail_open.get().then(|| view! {
                <CardDetail
                    card=detail_card.get_value()
                    on_close=move |_: ()| set_detail_open.set(false)
                />
            })}
        </div>
    }
}
