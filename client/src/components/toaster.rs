//! Top-right notification stack backed by the `Toasts` context.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastKind, Toasts};

/// Queue a notice and, in the browser, dismiss it after
/// [`TOAST_LIFETIME`](crate::state::toast::TOAST_LIFETIME).
pub fn notify(toasts: RwSignal<Toasts>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::toast::TOAST_LIFETIME).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Toasts>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "\u{2715}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
