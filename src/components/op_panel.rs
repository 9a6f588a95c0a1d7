use burrow_core::Operation;
use leptos::prelude::*;

use crate::dispatch;
use crate::state::AppState;

/// Tab strip selecting the page's active operation. Exactly one panel is
/// visible at a time; the matching tab carries the active class.
#[component]
pub fn OpTabs(ops: &'static [Operation]) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="op-tabs">
            {ops.iter()
                .map(|&op| {
                    let is_active = move || state.active_op.get() == op;
                    view! {
                        <button
                            class=move || if is_active() { "op-tab active" } else { "op-tab" }
                            on:click=move |_| {
                                state.active_op.set(op);
                                if op == Operation::Extract {
                                    dispatch::refresh_listing(state);
                                }
                            }
                        >
                            {op.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Shared frame for one operation: its accumulator, the parameter region
/// passed as children, and the run button.
#[component]
pub fn OpPanel(op: Operation, children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();
    let selection = state.selection(op);

    let run_label = move || {
        let batch = match op {
            Operation::Extract => state.batch_extract.get(),
            Operation::LearnModel => state.model_scan.get(),
            _ => false,
        };
        if batch {
            op.batch_label()
        } else {
            op.label()
        }
    };

    view! {
        <div
            class="op-panel"
            style=move || if state.active_op.get() == op { "" } else { "display:none" }
        >
            <div class="op-selection">
                <div class="op-selection-title">"Selected files"</div>
                {move || {
                    let list = selection.get();
                    if list.is_empty() {
                        view! {
                            <div class="op-selection-empty">"Pick files in the sidebar"</div>
                        }
                            .into_any()
                    } else {
                        let items: Vec<_> = list
                            .entries()
                            .iter()
                            .map(|entry| {
                                let path = entry.path.clone();
                                let shown = entry.path.clone();
                                view! {
                                    <li id=entry.dom_id.clone() class="selected-file">
                                        <span class="selected-file-path">{shown}</span>
                                        <button
                                            class="selected-file-remove"
                                            on:click=move |ev: web_sys::MouseEvent| {
                                                ev.stop_propagation();
                                                selection.update(|s| {
                                                    s.remove(&path);
                                                });
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            })
                            .collect();
                        view! { <ul class="op-selection-list">{items}</ul> }.into_any()
                    }
                }}
            </div>
            {children()}
            <button class="run-btn" on:click=move |_| dispatch::run_operation(state, op)>
                {run_label}
            </button>
        </div>
    }
}
