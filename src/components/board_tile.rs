//! Board Tile Component
//!
//! One board on the collection page: link to the board, inline rename, delete.

use leptos::prelude::*;

use crate::components::InlineEdit;
use crate::context::{AppContext, Page};
use crate::models::Board;

#[component]
pub fn BoardTile(
    board: Board,
    #[prop(into)] on_rename: Callback<(u32, String)>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = board.id;

    let open = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.open_board(id);
    };

    view! {
        <div class="board-tile">
            <InlineEdit
                value=board.name
                class="board-name"
                on_save=move |name: String| on_rename.run((id, name))
            />
            <div class="board-tile-actions">
                <a class="open-link" href=Page::Board(id).to_hash() on:click=open>"Open"</a>
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
            </div>
        </div>
    }
}
