use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/villa.css"/>
        <Title text="Anis Villa - Where nature embraces peace"/>
        <Meta name="description" content="A nature retreat in Da Nang: garden villas, spa, restaurant and tours"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/video") view=VideoPage/>
                </Routes>
            </main>
        </Router>
    }
}
