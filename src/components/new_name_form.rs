//! New Name Form Component
//!
//! One-field form used to create boards, lists and cards.

use leptos::prelude::*;

use crate::store::trimmed_non_empty;

#[component]
pub fn NewNameForm(
    #[prop(into)] class: String,
    placeholder: &'static str,
    button_label: &'static str,
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(name) = trimmed_non_empty(&text.get()) else { return; };
        set_text.set(String::new());
        on_submit.run(name);
    };

    view! {
        <form class=class on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit">{button_label}</button>
        </form>
    }
}
