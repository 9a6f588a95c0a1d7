use burrow_core::endpoints;
use leptos::prelude::*;

use crate::dispatch;
use crate::state::{AppState, GraphTab};

#[component]
pub fn VizPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <section class="page">
            <div class="page-actions">
                <button
                    class="action-btn"
                    on:click=move |_| {
                        dispatch::run_simple(
                            state,
                            endpoints::MAKE_CROWD_MOVIES,
                            "Crowd movies rendered",
                            false,
                        )
                    }
                >
                    "Make Crowd Movies"
                </button>
                <button class="action-btn" on:click=move |_| dispatch::generate_viz_index(state)>
                    "Generate Index"
                </button>
            </div>

            <div id="index-params" class="params">
                <div class="param-row">
                    <span class="param-label">"Index file"</span>
                    <input type="text" name="index-file" value="session-index.yaml" />
                </div>
                <div class="param-row">
                    <span class="param-label">"Sort by"</span>
                    <select name="sort-by">
                        <option value="group">"Group"</option>
                        <option value="session">"Session"</option>
                        <option value="subject">"Subject"</option>
                    </select>
                </div>
            </div>

            <div id="group-params" class="params">
                <div class="param-row">
                    <span class="param-label">"Group"</span>
                    <input type="text" name="group" placeholder="e.g. saline" />
                </div>
                <div class="param-row">
                    <span class="param-label">"Match key"</span>
                    <input type="text" name="key" value="SessionName" />
                </div>
                <div class="param-row">
                    <span class="param-label">"Match value"</span>
                    <input type="text" name="value" placeholder="session name" />
                </div>
                <button class="action-btn" on:click=move |_| dispatch::add_group(state)>
                    "Add Group"
                </button>
            </div>

            <div class="viz-tabs">
                {GraphTab::ALL
                    .iter()
                    .map(|&tab| {
                        let is_active = move || state.graph_tab.get() == tab;
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "viz-tab active" } else { "viz-tab" }
                                }
                                on:click=move |_| state.graph_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || {
                let (endpoint, label, button) = match state.graph_tab.get() {
                    GraphTab::Scalars => (
                        endpoints::PLOT_SCALAR_SUMMARY,
                        "Scalar summary plotted",
                        "Plot Scalar Summary",
                    ),
                    GraphTab::Transitions => (
                        endpoints::PLOT_TRANSITION_GRAPH,
                        "Transition graph plotted",
                        "Plot Transition Graph",
                    ),
                    GraphTab::Usages => (
                        endpoints::PLOT_USAGES,
                        "Usages plotted",
                        "Plot Usages",
                    ),
                };
                view! {
                    <div class="viz-panel">
                        <button
                            class="run-btn"
                            on:click=move |_| dispatch::run_simple(state, endpoint, label, false)
                        >
                            {button}
                        </button>
                    </div>
                }
            }}
        </section>
    }
}
