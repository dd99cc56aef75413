//! Landing page linking the two experiment screens.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <h1>"Experiments"</h1>
            <ul class="home__list">
                <li>
                    <A href="/trade">"Double auction"</A>
                </li>
                <li>
                    <A href="/draw">"Drawing board"</A>
                </li>
            </ul>
        </main>
    }
}
