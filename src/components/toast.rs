use leptos::prelude::*;

use crate::state::{AppState, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="toast-host">
            {move || {
                state
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Error => "toast toast-error",
                            ToastKind::Info => "toast toast-info",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <span class="toast-text">{toast.text.clone()}</span>
                                <button
                                    class="toast-dismiss"
                                    on:click=move |_| state.dismiss_toast(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
