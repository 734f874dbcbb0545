use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use common::{
    result_presenter::{FacetGroup, FacetOption, facet_groups},
    search_config::SearchConfig,
};
use crate::components::search_components::search_results_state::SearchResultsState;


/// One filter block per configured facet, fed by the buckets of the latest
/// response.
#[component]
pub fn FacetSidePanel() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let groups = use_memo(move || {
        let search_result = search_results_state.search_result.read();
        let query = search_results_state.query.read();
        match search_result.as_ref() {
            Some(Some(Ok(response))) => facet_groups(response, &query, &SearchConfig::transcripts().facets),
            _ => Vec::new(),
        }
    });

    rsx! {
        div {
            id: "x-search-facets-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            for group in groups() {
                FacetBlock { key: "{group.field}", group }
            }
        }
    }
}

#[component]
fn FacetBlock(group: FacetGroup) -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let field = group.field.clone();
    let is_filtered = group.options.iter().any(|o| o.selected);
    let border_color = if is_filtered { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.2)" };

    rsx! {
        div {
            style: "
                background-color: white;
                border: 1px solid {border_color};
                border-radius: 10px;
                padding: 10px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h3 {
                    style: "font-size: 16px; font-weight: 500; margin: 4px; text-transform: uppercase; color: rgb(75, 87, 112);",
                    "{group.label}"
                }
                div { style: "flex: 1 1 auto;" }
                if is_filtered {
                    button {
                        style: "border: none; background: none; color: blue; cursor: pointer;",
                        onclick: move |_| {
                            let mut q = search_results_state.query.read().clone();
                            q.clear_facet(&field);
                            search_results_state.set_query.call(q);
                        },
                        "Clear"
                    }
                }
            }
            if group.options.is_empty() {
                div {
                    style: "color: rgba(0,0,0,0.5); margin: 4px;",
                    "No values"
                }
            }
            ul {
                for option in group.options.iter().cloned() {
                    li {
                        key: "{option.value}-{option.count}",
                        FacetCheckbox { facet_name: group.field.clone(), option }
                    }
                }
            }
        }
    }
}


#[component]
fn FacetCheckbox(facet_name: String, option: FacetOption) -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let FacetOption { value, count, selected } = option;
    let display_value = value.clone();
    rsx! {

        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 4px;
                align-items: center;
            ",
            onclick: move |_e| {
                let mut q = search_results_state.query.read().clone();
                q.toggle_facet(&facet_name, &value);
                search_results_state.set_query.call(q);
            },

            // FACET CHECKBOX
            if selected {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            // FACET NAME
            div {
                style: "
                    font-size: 16px;
                    line-height: 22px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{display_value}"
            }

            // FACET SPACER
            div { style: "flex: 1 1 auto;", }

            // FACET COUNT
            div {
                style: "
                    font-size: 16px;
                    line-height: 22px;
                    font-weight: 400;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{count}"
            }
        }
    }
}
