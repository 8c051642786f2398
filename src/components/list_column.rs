//! List Column Component
//!
//! One list of the open board with its cards and the card-add form.

use leptos::prelude::*;

use crate::components::{CardItem, InlineEdit, NewNameForm};
use crate::context::{spawn_action, BoardContext};
use crate::models::List;
use crate::store::BoardStateStoreFields;

#[component]
pub fn ListColumn(list: List) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let list_id = list.id;

    let cards = move || {
        ctx.store
            .cards()
            .with(|cards| cards.get(&list_id).cloned().unwrap_or_default())
    };

    view! {
        <div class="list-column">
            <div class="list-header">
                <InlineEdit
                    value=list.name
                    class="list-name"
                    on_save=move |name: String| spawn_action("rename list", ctx.rename_list(list_id, name))
                />
                <button
                    class="delete-btn"
                    on:click=move |_| spawn_action("delete list", ctx.delete_list(list_id))
                >
                    "Delete"
                </button>
            </div>

            <div class="card-stack">
                <For
                    each=cards
                    key=|card| (card.id, card.title.clone(), card.description.clone())
                    children=move |card| view! { <CardItem card=card /> }
                />
            </div>

            <NewNameForm
                class="new-card-form"
                placeholder="Add a card..."
                button_label="Add"
                on_submit=move |title: String| spawn_action("create card", ctx.create_card(list_id, title))
            />
        </div>
    }
}
