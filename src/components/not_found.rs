//! Not Found Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Shown when a board or its lists cannot be loaded
#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="not-found">
            <h2>"Board not found"</h2>
            <a href="#/" class="back-link" on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ctx.go_home();
            }>
                "Back to boards"
            </a>
        </div>
    }
}
