//! Top bar with the app title and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <div class="header__inner">
                <h1 class="header__title">"Outfit Stylizer"</h1>
                <button
                    class="btn header__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || dark_mode::toggle_icon(ui.get().dark_mode)}
                </button>
            </div>
        </header>
    }
}
