use burrow_core::{endpoints, Operation};
use leptos::prelude::*;

use crate::dispatch;
use crate::state::{AppState, Page};

use super::op_panel::{OpPanel, OpTabs};

#[component]
pub fn PcaPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <section class="page">
            <OpTabs ops=Page::Pca.operations() />

            <div class="page-actions">
                <button
                    class="action-btn"
                    on:click=move |_| {
                        dispatch::run_simple(
                            state,
                            endpoints::CLIP_PCA_SCORES,
                            "Scores clipped",
                            true,
                        )
                    }
                >
                    "Clip Scores"
                </button>
                <button
                    class="action-btn"
                    on:click=move |_| {
                        dispatch::run_simple(
                            state,
                            endpoints::COMPUTE_CHANGEPOINTS,
                            "Changepoints computed",
                            true,
                        )
                    }
                >
                    "Compute Changepoints"
                </button>
            </div>

            <OpPanel op=Operation::TrainPca>
                <div id="pca-train-params" class="params">
                    <div class="param-row">
                        <span class="param-label">"Components"</span>
                        <input type="number" name="num-components" value="10" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Gauss filter (space)"</span>
                        <input type="number" name="gaussfilter-space" value="1.5" />
                        <input type="number" name="gaussfilter-space" value="1" />
                    </div>
                    <div class="param-row">
                        <span class="param-label">"Missing data"</span>
                        <input type="checkbox" name="missing-data" />
                    </div>
                </div>
            </OpPanel>

            <OpPanel op=Operation::ApplyPca>
                <div id="pca-apply-params" class="params">
                    <div class="param-row">
                        <span class="param-label">"Output file"</span>
                        <input type="text" name="output-file" value="pca_scores" />
                    </div>
                </div>
            </OpPanel>
        </section>
    }
}
