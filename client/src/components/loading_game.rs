//! Overlay shown while styles are generated: progress bar plus tic-tac-toe.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the home page only while a submission is pending. Each mount
//! starts a fresh game and a progress bar at 0%; neither reflects the real
//! request.

use leptos::prelude::*;

use crate::state::game::{CELL_COUNT, GameState, Player};
use crate::state::progress::LoadingProgress;

#[component]
pub fn LoadingGame() -> impl IntoView {
    let game = RwSignal::new(GameState::default());
    let progress = RwSignal::new(LoadingProgress::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    crate::state::progress::TICK_INTERVAL_MS,
                ))
                .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if progress.try_update(LoadingProgress::tick) != Some(true) {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let cells = (0..CELL_COUNT)
        .map(|index| {
            view! {
                <button
                    class="loading-game__cell"
                    on:click=move |_| {
                        game.update(|g| {
                            g.apply_move(index);
                        });
                    }
                >
                    {move || cell_symbol(game.with(|g| g.board().get(index)))}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="loading-game">
            <div class="loading-game__dialog">
                <h2 class="loading-game__title">"While we style your outfit..."</h2>

                <div class="loading-game__progress">
                    <div class="loading-game__bar">
                        <div class="loading-game__bar-fill" style=move || progress.get().width_style()></div>
                    </div>
                    <p class="loading-game__percent">
                        {move || format!("Processing: {}%", progress.get().percent())}
                    </p>
                </div>

                <div class="loading-game__board">{cells}</div>

                <p class="loading-game__status">{move || game.with(GameState::status_text)}</p>
                <button class="btn btn--primary loading-game__reset" on:click=move |_| game.update(GameState::reset)>
                    "Reset Game"
                </button>
            </div>
        </div>
    }
}

fn cell_symbol(cell: Option<Player>) -> &'static str {
    cell.map_or("", Player::symbol)
}
