use burrow_core::{endpoints, Operation};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dispatch;
use crate::state::{AppState, Page};

use super::op_panel::{OpPanel, OpTabs};

#[component]
pub fn ExtractPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_batch_toggle = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: HtmlInputElement = target.unchecked_into();
        state.batch_extract.set(input.checked());
    };

    view! {
        <section class="page">
            <OpTabs ops=Page::Extract.operations() />

            <div class="page-actions">
                <label class="mode-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || state.batch_extract.get()
                        on:change=on_batch_toggle
                    />
                    "Batch mode"
                </label>
                <button class="action-btn" on:click=move |_| dispatch::generate_config(state)>
                    {move || {
                        if state.batch_extract.get() {
                            "Generate Gridsearch Config"
                        } else {
                            "Generate Config"
                        }
                    }}
                </button>
                {move || {
                    state
                        .batch_extract
                        .get()
                        .then(|| {
                            view! {
                                <button
                                    class="action-btn"
                                    on:click=move |_| {
                                        dispatch::run_simple(
                                            state,
                                            endpoints::AGGREGATE_EXTRACT_RESULTS,
                                            "Extraction results aggregated",
                                            true,
                                        )
                                    }
                                >
                                    "Aggregate Results"
                                </button>
                            }
                        })
                }}
                <button class="action-btn" on:click=move |_| state.flip_modal_open.set(true)>
                    "Flip Classifiers"
                </button>
            </div>

            <OpPanel op=Operation::Extract>
                <div id="extract-params" class="params">
                    <div class="param-row">
                        <span class="param-label">"Depth range (mm)"</span>
                        <input type="number" name="bg-roi-depth-range" value="650" />
                        <input type="number" name="bg-roi-depth-range" value="750" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Crop size (px)"</span>
                        <input type="number" name="crop-size" value="80" />
                        <input type="number" name="crop-size" value="80" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Frame rate"</span>
                        <input type="number" name="fps" value="30" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Flip classifier"</span>
                        <select name="flip-classifier">
                            <option value="">"None"</option>
                            <option value="adult-male-c57">"Adult male C57s"</option>
                            <option value="large-mice-with-fibers">"Large mice with fiber cables"</option>
                            <option value="mice-with-inscopix">"Mice with Inscopix cables"</option>
                        </select>
                    </div>
                </div>
            </OpPanel>

            <OpPanel op=Operation::FindRoi>
                <div id="roi-params" class="params">
                    <div class="param-row">
                        <span class="param-label">"Background index"</span>
                        <input type="number" name="bg-roi-index" value="0" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Dilate iterations"</span>
                        <input type="number" name="dilate-iterations" value="1" />
                    </div>
                </div>
            </OpPanel>

            <OpPanel op=Operation::CopySlice>
                <div id="slice-params" class="params">
                    <div class="param-row">
                        <span class="param-label">"Frame range"</span>
                        <input type="number" name="copy-slice" value="0" />
                        <input type="number" name="copy-slice" value="1000" />
                    </div>
                </div>
            </OpPanel>
        </section>
    }
}
