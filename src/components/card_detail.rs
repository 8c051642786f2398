//! Card Detail Component
//!
//! Overlay editing a card's title and description together.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{spawn_action, BoardContext};
use crate::models::{Card, CardPatch};
use crate::store::trimmed_non_empty;

/// Detail overlay
///
/// Save commits both fields in one write, shows "Saving..." while the write
/// is in flight, then closes and refreshes every list's cards. A title left
/// empty keeps the stored title.
///
/// # Arguments
/// * `card` - Card being edited
/// * `on_close` - Callback to hide the overlay
#[component]
pub fn CardDetail(
    card: Card,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let (id, list_id) = (card.id, card.list_id);

    let (title, set_title) = signal(card.title);
    let (description, set_description) = signal(card.description);
    let (saving, set_saving) = signal(false);

    let save = move |_: web_sys::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let patch = CardPatch {
            title: trimmed_non_empty(&title.get_untracked()),
            description: Some(description.get_untracked().trim().to_string()),
        };
        set_saving.set(true);

        spawn_local(async move {
            match commands::update_card(id, &patch).await {
                Ok(()) => {
                    on_close.run(());
                    spawn_action("reload cards", ctx.reload_cards());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CARD] Failed to save card {}: {}", id, e).into());
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="overlay" on:click=move |_| on_close.run(())>
            <div class="card-detail" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="6"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="card-detail-actions">
                    <button
                        class="delete-btn"
                        disabled=move || saving.get()
                        on:click=move |_| {
                            on_close.run(());
                            spawn_action("delete card", ctx.delete_card(id, list_id));
                        }
                    >
                        "Delete Card"
                    </button>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="save-btn" disabled=move || saving.get() on:click=save>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
