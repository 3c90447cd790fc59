//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{generation::GenerationState, history::HistoryState, ui::UiState, upload::UploadState};
use crate::util::config::{BACKEND_URL_META, BackendConfig};
use crate::util::dark_mode;
use crate::util::file_slot::FileSlot;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend URL provided by the host is written into a meta tag so the
/// hydrated client can read it back.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let backend = use_context::<BackendConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend.base_url().to_owned()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = use_context::<BackendConfig>().unwrap_or_else(BackendConfig::from_document);
    provide_context(backend);
    provide_context(FileSlot::new());

    // Provide reactive state contexts for all child components.
    let history = RwSignal::new(HistoryState::default());
    let upload = RwSignal::new(UploadState::default());
    let generation = RwSignal::new(GenerationState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(history);
    provide_context(upload);
    provide_context(generation);
    provide_context(ui);

    // Browser-only: effects do not run during SSR.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/outfit-stylizer.css"/>
        <Title text="Outfit Stylizer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
