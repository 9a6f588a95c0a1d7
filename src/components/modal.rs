use burrow_core::MediaKind;
use leptos::prelude::*;

use crate::dispatch;
use crate::state::AppState;

/// Full-size viewer for one gallery item. The overlay click closes it;
/// clicks on the content do not propagate.
#[component]
pub fn Lightbox() -> impl IntoView {
    let state = expect_context::<AppState>();
    let on_close = move |_: web_sys::MouseEvent| state.lightbox.set(None);
    let on_content_click = move |ev: web_sys::MouseEvent| ev.stop_propagation();

    view! {
        {move || {
            state
                .lightbox
                .get()
                .map(|item| {
                    let caption = item.path.clone();
                    let media = match item.kind {
                        MediaKind::Video => {
                            view! {
                                <video
                                    class="lightbox-media"
                                    src=item.path.clone()
                                    controls=true
                                    autoplay=true
                                ></video>
                            }
                                .into_any()
                        }
                        MediaKind::Image => {
                            view! { <img class="lightbox-media" src=item.path.clone() /> }
                                .into_any()
                        }
                    };
                    view! {
                        <div class="modal-overlay" on:click=on_close>
                            <div class="modal-content" on:click=on_content_click>
                                {media}
                                <div class="lightbox-caption">{caption}</div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

/// Downloadable flip-classifier files offered by the server.
const FLIP_FILES: &[(&str, &str)] = &[
    ("adult-male-c57", "Adult male C57s"),
    ("large-mice-with-fibers", "Large mice with fiber cables"),
    ("mice-with-inscopix", "Mice with Inscopix cables"),
];

#[component]
pub fn FlipModal() -> impl IntoView {
    let state = expect_context::<AppState>();
    let on_close = move |_: web_sys::MouseEvent| state.flip_modal_open.set(false);
    let on_content_click = move |ev: web_sys::MouseEvent| ev.stop_propagation();

    view! {
        {move || {
            state
                .flip_modal_open
                .get()
                .then(|| {
                    view! {
                        <div class="modal-overlay" on:click=on_close>
                            <div class="modal-content" on:click=on_content_click>
                                <div class="modal-header">
                                    <span class="modal-title">"Flip classifier files"</span>
                                    <button class="modal-close" on:click=on_close>"×"</button>
                                </div>
                                {FLIP_FILES
                                    .iter()
                                    .map(|&(flip_id, label)| {
                                        view! {
                                            <button
                                                class="flip-item"
                                                on:click=move |_| dispatch::download_flip(state, flip_id)
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })
        }}
    }
}
