//! Toaster Component
//!
//! Renders the toast queue; clicking a toast dismisses it.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = ctx.toasts;

    view! {
        <div class="toaster">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() on:click=move |_| toasts.dismiss(id)>
                            <strong class="toast-title">{toast.notice.title.clone()}</strong>
                            <p class="toast-message">{toast.notice.message.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
