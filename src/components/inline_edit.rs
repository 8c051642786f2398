//! Inline Edit Component
//!
//! Text that turns into a single-line input for renaming.

use leptos::prelude::*;

use crate::store::trimmed_non_empty;

/// Display text with an Edit button; editing shows an input with Save/Cancel.
///
/// Enter saves and Escape cancels. `on_save` only fires for a trimmed,
/// non-empty value that differs from the current one.
///
/// # Arguments
/// * `value` - Current text
/// * `class` - CSS class for the display text (e.g., "board-name" or "card-title")
/// * `on_save` - Callback receiving the new, trimmed text
#[component]
pub fn InlineEdit(
    value: String,
    #[prop(into)] class: String,
    #[prop(into)] on_save: Callback<String>,
) -> impl IntoView {
    let original = StoredValue::new(value);
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let start = move || {
        set_draft.set(original.get_value());
        set_editing.set(true);
    };

    let cancel = move || set_editing.set(false);

    let save = move || {
        if let Some(name) = trimmed_non_empty(&draft.get_untracked()) {
            if name != original.get_value() {
                on_save.run(name);
            }
        }
        set_editing.set(false);
    };

    view! {
        {move || if editing.get() {
            view! {
                <span class="inline-edit">
                    <input
                        type="text"
                        autofocus=true
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => save(),
                                "Escape" => cancel(),
                                _ => {}
                            }
                        }
                    />
                    <button class="save-btn" on:click=move |_| save()>"Save"</button>
                    <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                </span>
            }.into_any()
        } else {
            view! {
                <span class="inline-display">
                    <span class=class.clone()>{original.get_value()}</span>
                    <button class="edit-btn" on:click=move |_| start()>"Edit"</button>
                </span>
            }.into_any()
        }}
    }
}
