//! Board List Component
//!
//! Board collection page: every board, newest first, plus the create form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BoardTile, NewNameForm};
use crate::context::spawn_action;
use crate::store::{self, BoardsState, BoardsStateStoreFields};

#[component]
pub fn BoardList() -> impl IntoView {
    let state = Store::new(BoardsState::default());

    // Load boards on mount
    spawn_action("load boards", async move {
        let boards = commands::list_boards().await?;
        web_sys::console::log_1(&format!("[BOARDS] Loaded {} boards", boards.len()).into());
        state.boards().set(boards);
        Ok(())
    });

    let create_board = move |name: String| {
        spawn_action("create board", async move {
            let board = commands::create_board(&name).await?;
            store::prepend_board(&mut state.boards().write(), board);
            Ok(())
        });
    };

    let rename_board = move |(id, name): (u32, String)| {
        spawn_action("rename board", async move {
            commands::rename_board(id, &name).await?;
            store::rename_board(&mut state.boards().write(), id, &name);
            Ok(())
        });
    };

    let delete_board = move |id: u32| {
        spawn_action("delete board", async move {
            commands::delete_board(id).await?;
            store::remove_board(&mut state.boards().write(), id);
            Ok(())
        });
    };

    view! {
        <section class="board-list">
            <h2>"Boards"</h2>

            <NewNameForm
                class="new-board-form"
                placeholder="New board name..."
                button_label="Create"
                on_submit=create_board
            />

            {move || if state.boards().with(|boards| boards.is_empty()) {
                view! { <p class="empty-hint">"No boards yet."</p> }.into_any()
            } else {
                view! {
                    <div class="board-grid">
                        <For
                            each=move || state.boards().get()
                            key=|board| (board.id, board.name.clone())
                            children=move |board| {
                                view! {
                                    <BoardTile
                                        board=board
                                        on_rename=rename_board
                                        on_delete=delete_board
                                    />
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </section>
    }
}
