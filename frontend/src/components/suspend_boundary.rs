//! Loading and failure handling around components that wait on a search.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

const SEARCHING_TEXT: &str = "Searching...";

/// While `children` are suspended on a pending search, show `loading_text`;
/// if they fail, the component error display takes their place.
#[component]
pub fn SuspendWrapper(
    #[props(default = SEARCHING_TEXT.to_string())] loading_text: String,
    children: Element,
) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: move |_: SuspenseContext| rsx! {
                LoadingIndicator { text: loading_text.clone() }
            },
            ComponentErrorBoundary { {children} }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = SEARCHING_TEXT.to_string())] text: String) -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 100%;
                min-height: 120px;
                font-size: 18px;
                font-weight: 300;
                color: rgb(75, 87, 112);
            ",
            "{text}"
        }
    }
}
