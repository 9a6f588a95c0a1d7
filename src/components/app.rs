use leptos::prelude::*;

use crate::dispatch;
use crate::state::{AppState, Page};

use super::extract_page::ExtractPage;
use super::gallery::ResultsGallery;
use super::modal::{FlipModal, Lightbox};
use super::model_page::ModelPage;
use super::nav::PageNav;
use super::pca_page::PcaPage;
use super::sidebar::Sidebar;
use super::toast::ToastHost;
use super::viz_page::VizPage;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    // Probe the configured data directory once at startup.
    dispatch::check_local_dir(state);

    view! {
        <div class="app">
            <Sidebar />
            <MainArea />
            <ToastHost />
            <Lightbox />
            <FlipModal />
        </div>
    }
}

#[component]
fn MainArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="main">
            <PageNav />
            {move || match state.page.get() {
                Page::Extract => view! { <ExtractPage /> }.into_any(),
                Page::Pca => view! { <PcaPage /> }.into_any(),
                Page::Model => view! { <ModelPage /> }.into_any(),
                Page::Viz => view! { <VizPage /> }.into_any(),
            }}
            <ResultsGallery />
        </div>
    }
}
