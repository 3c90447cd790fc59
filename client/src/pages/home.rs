//! Home page: upload, generate, and browse past sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It fetches history once on mount, hands selected
//! files to the backend, shows the loading game while a request is pending,
//! and prepends successful results to the history store.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and otherwise invisible: a failed history fetch shows
//! an empty list, a failed submission leaves history untouched.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::history_list::HistoryList;
use crate::components::loading_game::LoadingGame;
use crate::components::upload_form::UploadForm;
use crate::net::api::{ApiError, build_history_item};
use crate::net::types::{HistoryItem, StylizedImage};
use crate::state::generation::{GenerationOutcome, GenerationState, Ticket};
use crate::state::history::HistoryState;
use crate::state::ui::ViewPhase;
use crate::state::upload::{SelectedImage, UploadState};
use crate::util::config::BackendConfig;
use crate::util::file_slot::{FileSlot, revoke_preview};

/// Apply the startup history fetch. Failures degrade to an empty list.
pub(crate) fn settle_history(history: &mut HistoryState, result: Result<Vec<HistoryItem>, ApiError>) {
    let items = result.unwrap_or_else(|e| {
        log::error!("failed to fetch history: {e}");
        Vec::new()
    });
    history.finish_loading(items);
}

/// Apply a styling result to the task and, on success, the history store.
///
/// Returns `true` when a new session was recorded. Results for stale or
/// abandoned tickets are dropped without touching either store.
pub(crate) fn settle_generation(
    history: &mut HistoryState,
    generation: &mut GenerationState,
    ticket: Ticket,
    uploaded: &str,
    result: Result<Vec<StylizedImage>, ApiError>,
    created_at: i64,
) -> bool {
    let outcome = match &result {
        Ok(images) => GenerationOutcome::Succeeded { images: images.len() },
        Err(e) => GenerationOutcome::Failed(e.to_string()),
    };
    if !generation.resolve(ticket, outcome) {
        log::debug!("discarding styling result for ticket {ticket}");
        return false;
    }
    match result {
        Ok(images) => {
            history.prepend(build_history_item(uploaded, images, created_at));
            true
        }
        Err(e) => {
            log::error!("upload failed: {e}");
            false
        }
    }
}

/// Store a new selection. Returns the displaced one when no session refers
/// to its preview, so the caller can release it.
pub(crate) fn replace_selection(
    upload: &mut UploadState,
    history: &HistoryState,
    image: SelectedImage,
) -> Option<SelectedImage> {
    upload
        .select(image)
        .filter(|old| !history.references_upload(&old.preview_url))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();
    let upload = expect_context::<RwSignal<UploadState>>();
    let generation = expect_context::<RwSignal<GenerationState>>();
    let backend = expect_context::<BackendConfig>();
    let file_slot = expect_context::<FileSlot>();

    let phase = Memo::new(move |_| upload.with(|u| generation.with(|g| ViewPhase::derive(u, g))));

    #[cfg(feature = "hydrate")]
    {
        if history.with_untracked(HistoryState::is_loading) {
            let base_url = backend.base_url().to_owned();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_history(&base_url).await;
                let _ = history.try_update(|h| settle_history(h, result));
            });
        }
    }

    on_cleanup(move || {
        let _ = generation.try_update(GenerationState::abandon);
    });

    let on_select = Callback::new(move |image: SelectedImage| {
        let released = history.with_untracked(|h| {
            let mut released = None;
            upload.update(|u| released = replace_selection(u, h, image));
            released
        });
        if let Some(old) = released {
            revoke_preview(&old);
        }
    });

    let on_generate = Callback::new(move |()| {
        let Some(uploaded) = upload.with_untracked(|u| u.preview_url().map(str::to_owned)) else {
            return;
        };
        let mut ticket = None;
        generation.update(|g| ticket = g.begin());
        let Some(ticket) = ticket else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_slot.current() else {
                generation.update(GenerationState::abandon);
                return;
            };
            let base_url = backend.base_url().to_owned();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_for_styling(&base_url, &file).await;
                let created_at = crate::util::time::now_ms();
                let _ = generation.try_update(|g| {
                    history.try_update(|h| settle_generation(h, g, ticket, &uploaded, result, created_at))
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, uploaded, file_slot, &backend);
        }
    });

    let preview_src = move || upload.with(|u| u.preview_url().unwrap_or_default().to_owned());

    view! {
        <div class="app">
            <Header/>
            <main class="app__main">
                <UploadForm on_select=on_select/>

                <Show when=move || phase.get().shows_preview()>
                    <div class="preview">
                        <img class="preview__image" src=preview_src alt="Uploaded outfit preview"/>
                    </div>
                    <button
                        class="btn btn--primary preview__generate"
                        on:click=move |_| on_generate.run(())
                        disabled=move || phase.get().is_generating()
                    >
                        "Generate Styles"
                    </button>
                </Show>

                <Show when=move || phase.get().is_generating()>
                    <LoadingGame/>
                </Show>

                <HistoryList/>
            </main>
        </div>
    }
}
