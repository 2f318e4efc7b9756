use leptos::{either::Either, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::countdown::{CountdownState, Season};

const TICK_MS: u64 = 1000;
const PLACEHOLDER: &str = "--";

const DIGITS_CLASS: &str = "bg-gradient-to-b from-orange-500 to-orange-600 bg-clip-text text-4xl font-black tracking-tighter text-transparent sm:text-6xl md:text-7xl lg:text-8xl tabular-nums leading-none";

/// Digits to show, or `None` once the season has started. An unmeasured state
/// renders the same unit columns as a running clock.
fn digits(state: Option<CountdownState>) -> Option<[String; 4]> {
    match state {
        None => Some([(); 4].map(|_| PLACEHOLDER.to_string())),
        Some(CountdownState::Remaining(left)) => Some(left.padded()),
        Some(CountdownState::Expired) => None,
    }
}

#[component]
pub fn Countdown(season: Season) -> impl IntoView {
    // The target is local midnight of the visitor, which the server can't
    // know. Server render and hydration both start unmeasured.
    let (state, set_state) = signal(None::<CountdownState>);

    // runs on the client only, after hydration
    Effect::new(move |_| set_state.set(Some(season.time_left())));

    // use_interval_fn pauses itself when this scope is disposed, so the
    // timer never outlives the view.
    let Pausable { pause, .. } = use_interval_fn(
        move || set_state.set(Some(season.time_left())),
        TICK_MS,
    );

    // nothing left to count once the season has started
    Effect::new(move |_| {
        if state.get().is_some_and(|s| s.is_expired()) {
            pause();
        }
    });

    move || match digits(state.get()) {
        Some([days, hours, minutes, seconds]) => Either::Left(view! {
            <Unit value=days label="Days" />
            <Separator />
            <Unit value=hours label="Hours" />
            <Separator />
            <Unit value=minutes label="Minutes" />
            <Separator />
            <Unit value=seconds label="Seconds" />
        }),
        None => Either::Right(view! {
            <span class="text-4xl font-bold text-white">"SEASON STARTED"</span>
        }),
    }
}

#[component]
fn Unit(value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <span class=DIGITS_CLASS>{value}</span>
            <span class="mt-2 text-xs font-bold tracking-widest text-white uppercase sm:text-sm">
                {label}
            </span>
        </div>
    }
}

#[component]
fn Separator() -> impl IntoView {
    view! {
        <div class="flex items-center bg-gradient-to-b from-orange-500 to-orange-600 bg-clip-text pb-2 text-4xl leading-none font-black text-transparent sm:pb-4 sm:text-6xl md:text-7xl lg:text-8xl">
            ":"
        </div>
    }
}
