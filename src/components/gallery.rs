use burrow_core::MediaKind;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::state::{AppState, GalleryItem};

#[component]
pub fn ResultsGallery() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        {move || {
            state
                .gallery
                .get()
                .map(|gallery| {
                    let title = gallery.title.clone();
                    let tiles: Vec<_> = gallery
                        .items
                        .iter()
                        .cloned()
                        .map(|item| view! { <GalleryTile item=item /> })
                        .collect();
                    view! {
                        <div class="gallery">
                            <div class="gallery-header">
                                <span class="gallery-title">{title}</span>
                                <button
                                    class="gallery-close"
                                    on:click=move |_| state.gallery.set(None)
                                >
                                    "×"
                                </button>
                            </div>
                            <div class="gallery-grid">{tiles}</div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn GalleryTile(item: GalleryItem) -> impl IntoView {
    let state = expect_context::<AppState>();
    let loaded = RwSignal::new(false);

    if item.kind == MediaKind::Image {
        // Probe offscreen; the visible src is only set once the bytes are in.
        match HtmlImageElement::new() {
            Ok(probe) => {
                let onload = Closure::once(move |_: web_sys::Event| loaded.set(true));
                probe.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();
                probe.set_src(&item.path);
            }
            Err(_) => loaded.set(true),
        }
    }

    let open_item = item.clone();
    let path = item.path.clone();
    let caption = item.path.clone();
    let kind = item.kind;

    view! {
        <div class="gallery-tile" on:click=move |_| state.lightbox.set(Some(open_item.clone()))>
            {move || {
                let path = path.clone();
                match kind {
                    MediaKind::Video => {
                        view! { <video class="tile-media" src=path muted=true></video> }.into_any()
                    }
                    MediaKind::Image if loaded.get() => {
                        view! { <img class="tile-media" src=path /> }.into_any()
                    }
                    MediaKind::Image => {
                        view! { <div class="tile-media tile-loading"></div> }.into_any()
                    }
                }
            }}
            <div class="tile-caption">{caption}</div>
        </div>
    }
}
