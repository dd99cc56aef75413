//! Drawing-board page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::easel_host::EaselHost;

#[component]
pub fn DrawPage() -> impl IntoView {
    view! {
        <Title text="Drawing board"/>
        <main class="draw-page">
            <h1>"Drawing board"</h1>
            <p class="draw-page__hint">
                "Draw with your mouse or finger. Everyone in the session sees your strokes."
            </p>
            <EaselHost/>
        </main>
    }
}
