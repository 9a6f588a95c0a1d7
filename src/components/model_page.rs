use burrow_core::{endpoints, Operation};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dispatch;
use crate::state::{AppState, Page};

use super::op_panel::{OpPanel, OpTabs};

#[component]
pub fn ModelPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_scan_toggle = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: HtmlInputElement = target.unchecked_into();
        state.model_scan.set(input.checked());
    };

    view! {
        <section class="page">
            <OpTabs ops=Page::Model.operations() />

            <div class="page-actions">
                <label class="mode-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || state.model_scan.get()
                        on:change=on_scan_toggle
                    />
                    "Parameter scan"
                </label>
                <button
                    class="action-btn"
                    on:click=move |_| {
                        dispatch::run_simple(
                            state,
                            endpoints::AGGREGATE_MODELING_RESULTS,
                            "Modeling results aggregated",
                            true,
                        )
                    }
                >
                    "Aggregate Results"
                </button>
            </div>

            <OpPanel op=Operation::LearnModel>
                <div id="model-params" class="params">
                    <div class="param-row">
                        <span class="param-label">"Kappa"</span>
                        <input type="number" name="kappa" value="100000" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Iterations"</span>
                        <input type="number" name="num-iter" value="100" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Max states"</span>
                        <input type="number" name="max-states" value="100" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"PCs"</span>
                        <input type="number" name="npcs" value="10" />
                    </div>
                </div>
            </OpPanel>

            <OpPanel op=Operation::CountFrames>
                <div id="count-params" class="params"></div>
            </OpPanel>
        </section>
    }
}
