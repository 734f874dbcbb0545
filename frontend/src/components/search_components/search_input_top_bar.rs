use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};
use gloo_timers::future::TimeoutFuture;

use common::search_const::DEBOUNCE_MS;
use crate::components::search_components::search_results_state::SearchResultsState;


/// Search-as-you-type box. Keystrokes are coalesced until the text has been
/// stable for `DEBOUNCE_MS`; Enter searches at once.
#[component]
pub fn SearchInputTopBar() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let original_query = search_results_state.query;
    let set_query = search_results_state.set_query;

    let mut modified_text = use_signal(|| original_query.read().free_text.clone());
    let mut debounce_generation = use_signal(|| 0_u64);
    let mut pending = use_signal(|| false);

    // when url changes (the read signal given to us), we need to update the signals, as they are not reset by navigation.
    // a pending edit wins over the url, or typed characters would be lost.
    use_effect(move || {
        let new_text = original_query.read().free_text.clone();
        if !*pending.peek() {
            modified_text.set(new_text);
        }
    });

    let query_has_changed = use_memo(move || *modified_text.read() != original_query.read().free_text);
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });

    let trigger_search = Callback::new(move |_: ()| {
        pending.set(false);
        let text = modified_text.peek().clone();
        let mut q = original_query.peek().clone();
        if q.free_text == text {
            return;
        }
        q.set_free_text(text);
        set_query.call(q);
    });

    let search_oninput = move |event: Event<FormData>| {
        modified_text.set(event.value());
        pending.set(true);
        let generation = *debounce_generation.peek() + 1;
        debounce_generation.set(generation);
        spawn(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if *debounce_generation.peek() == generation {
                trigger_search.call(());
            }
        });
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            // drop any pending debounced search
            let generation = *debounce_generation.peek() + 1;
            debounce_generation.set(generation);
            trigger_search.call(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 600px;
                margin-left: 24px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search.call(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search transcriptions (generated_text)...",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{modified_text}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
