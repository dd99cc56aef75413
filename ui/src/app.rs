//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{draw::DrawPage, home::HomePage, trade::TradePage};

/// Root application component. Each page owns its own state; the router is
/// the only shared plumbing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Experiments"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("trade") view=TradePage/>
                <Route path=StaticSegment("draw") view=DrawPage/>
            </Routes>
        </Router>
    }
}
