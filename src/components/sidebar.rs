use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dispatch;
use crate::state::AppState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_upload_click = move |_: web_sys::MouseEvent| {
        if let Some(input) = file_input_ref.get() {
            let el: &HtmlInputElement = input.as_ref();
            el.click();
        }
    };

    let on_file_input_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: HtmlInputElement = target.unchecked_into();
        let Some(file_list) = input.files() else {
            return;
        };
        dispatch::upload_files(state, file_list);
        // Reset the input so the same file can be re-uploaded
        input.set_value("");
    };

    let on_refresh = move |_: web_sys::MouseEvent| dispatch::refresh_listing(state);
    let on_close = move |_: web_sys::MouseEvent| state.sidebar_open.set(false);

    let sidebar_class = move || {
        if state.sidebar_open.get() {
            "sidebar open"
        } else {
            "sidebar"
        }
    };

    view! {
        <div class=sidebar_class>
            <div class="sidebar-header">
                <span class="sidebar-title">"Session files"</span>
                <button class="sidebar-btn" on:click=on_refresh>"Refresh"</button>
                <button class="sidebar-btn" on:click=on_upload_click>"Upload"</button>
                <button class="sidebar-close" on:click=on_close>"×"</button>
            </div>
            <input
                node_ref=file_input_ref
                type="file"
                multiple=true
                style="display:none"
                on:change=on_file_input_change
            />
            {move || {
                let count = state.upload_count.get();
                (count > 0)
                    .then(|| {
                        view! {
                            <div class="sidebar-uploading">
                                {format!(
                                    "Uploading {} file{}...",
                                    count,
                                    if count > 1 { "s" } else { "" },
                                )}
                            </div>
                        }
                    })
            }}
            {move || {
                if state.listing_loading.get() {
                    view! { <div class="sidebar-loading">"Loading directory..."</div> }.into_any()
                } else {
                    match state.listing.get() {
                        Some(listing) => {
                            let raw: Vec<String> =
                                listing.visible_raw().iter().map(|s| s.to_string()).collect();
                            view! {
                                <CategorySection title="Raw files" files=raw />
                                <CategorySection title="Extracted" files=listing.extracted.clone() />
                                <CategorySection title="PCA" files=listing.pca.clone() />
                                <CategorySection title="Models" files=listing.models.clone() />
                            }
                                .into_any()
                        }
                        None => {
                            view! { <div class="sidebar-empty">"No directory loaded"</div> }
                                .into_any()
                        }
                    }
                }
            }}
        </div>
    }
}

/// One selectable category list; the whole section is hidden when empty.
/// Clicking a file toggles it in the active operation's accumulator.
#[component]
fn CategorySection(title: &'static str, files: Vec<String>) -> impl IntoView {
    let state = expect_context::<AppState>();
    if files.is_empty() {
        return None;
    }

    Some(view! {
        <div class="file-category">
            <div class="file-category-title">{title}</div>
            {files
                .into_iter()
                .map(|path| {
                    let toggle_path = path.clone();
                    let shown = path.clone();
                    let selected = move || {
                        let op = state.active_op.get();
                        state.selection(op).with(|s| s.contains(&path))
                    };
                    view! {
                        <div
                            class=move || {
                                if selected() { "file-option selected" } else { "file-option" }
                            }
                            on:click=move |_| {
                                let op = state.active_op.get_untracked();
                                state
                                    .selection(op)
                                    .update(|s| {
                                        s.toggle(&toggle_path);
                                    });
                            }
                        >
                            {shown}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    })
}
