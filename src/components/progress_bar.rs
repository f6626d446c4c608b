//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `value` percent
#[component]
pub fn ProgressBar(
    value: Signal<u32>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("progress {}", class)>
            <div
                class="progress-fill"
                style=move || format!("width: {}%;", value.get().min(100))
            />
        </div>
    }
}
