//! Past sessions, newest first, each with its original and generated images.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::output_gallery::OutputGallery;
use crate::net::types::HistoryItem;
use crate::state::history::HistoryState;
use crate::util::config::BackendConfig;
use crate::util::time::format_created_at;

#[component]
pub fn HistoryList() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();

    view! {
        <section class="history">
            <h2 class="history__title">"History"</h2>
            <Show
                when=move || !history.with(HistoryState::is_loading)
                fallback=|| {
                    view! {
                        <div class="history__loading">
                            <div class="spinner"></div>
                            <p>"Loading history..."</p>
                        </div>
                    }
                }
            >
                {move || {
                    let state = history.get();
                    if state.is_empty() {
                        return view! {
                            <div class="history__empty">"No history found. Upload an image to get started!"</div>
                        }
                            .into_any();
                    }
                    state
                        .items()
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! { <HistorySession number=state.session_number(index) item=item.clone()/> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </Show>
        </section>
    }
}

#[component]
fn HistorySession(number: usize, item: HistoryItem) -> impl IntoView {
    let backend = expect_context::<BackendConfig>();
    let uploaded_src = backend.image_src(&item.uploaded);

    view! {
        <div class="history__session">
            <div class="history__session-header">
                <span class="history__session-number">{format!("Session {number}")}</span>
                <span class="history__session-time">{format_created_at(item.created_at)}</span>
            </div>
            <div class="history__session-body">
                <div class="history__original">
                    <img class="history__original-image" src=uploaded_src alt="Uploaded"/>
                    <span class="history__original-label">"Original"</span>
                </div>
                <OutputGallery images=item.results enable_download=true/>
            </div>
        </div>
    }
}
