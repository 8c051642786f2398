//! Kanban Frontend App
//!
//! Root component: header plus whichever page the location hash points at.

use leptos::prelude::*;

use crate::components::{BoardList, BoardPage};
use crate::context::{current_hash, AppContext, Page};

#[component]
pub fn App() -> impl IntoView {
    let page = signal(Page::from_hash(&current_hash()));
    let ctx = AppContext::new(page);

    // Provide context to all children
    provide_context(ctx);

    // Back/forward and hand-edited URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_from_hash());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 on:click=move |_| ctx.go_home()>"Kanban"</h1>
            </header>

            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Boards => view! { <BoardList /> }.into_any(),
                    Page::Board(id) => view! { <BoardPage board_id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
