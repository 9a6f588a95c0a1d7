use leptos::prelude::*;

use crate::dispatch;
use crate::state::{AppState, Page};

#[component]
pub fn PageNav() -> impl IntoView {
    let state = expect_context::<AppState>();

    let open_sidebar = move |_: web_sys::MouseEvent| {
        let opening = !state.sidebar_open.get_untracked();
        state.sidebar_open.set(opening);
        if opening {
            dispatch::refresh_listing(state);
        }
    };

    view! {
        <div class="page-nav">
            {Page::ALL
                .iter()
                .map(|&page| {
                    let is_active = move || state.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| {
                                state.page.set(page);
                                if let Some(&first) = page.operations().first() {
                                    state.active_op.set(first);
                                }
                                // Opening the extract workflow re-reads the
                                // data directory, as the init step did.
                                if page == Page::Extract {
                                    dispatch::refresh_listing(state);
                                }
                            }
                        >
                            {page.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <button class="nav-link sidebar-toggle" on:click=open_sidebar>
                {move || if state.sidebar_open.get() { "Hide files" } else { "Browse files" }}
            </button>
        </div>
    }
}
