use leptos::prelude::*;
use leptos_meta::Title;

use crate::contact::{ModalState, RequestKind};
use crate::countdown::Season;

use super::contact::ContactModal;
use super::countdown::Countdown;
use super::teams::TeamMarquee;

const CLUB_HOME: &str = "https://calgarycbclub.com/";

#[component]
pub fn LandingPage() -> impl IntoView {
    let season = Season::current();
    let label = season.label;
    let modal = RwSignal::new(ModalState::default());
    let open = move |kind: RequestKind| modal.update(|m| m.open(kind));

    view! {
        <Title text="Coming Soon" />
        <div class="relative min-h-screen w-full overflow-hidden font-sans">
            <div class="absolute inset-0 z-0">
                <img
                    src="/background_img.png"
                    alt="Basketball Court Background"
                    class="h-full w-full object-cover object-center"
                />
                <div class="absolute inset-0 bg-[#020617]/60 mix-blend-multiply" />
                <div class="absolute inset-0 bg-gradient-to-t from-[#020617] via-transparent to-transparent" />
            </div>

            <div class="absolute top-6 left-6 z-20">
                <img src="/ccbc_logo.png" alt="CCBC Logo" class="h-16 w-auto sm:h-20" />
            </div>

            <div class="relative z-10 flex min-h-screen flex-col items-center justify-center px-4 text-center">
                <div class="mb-8 inline-flex items-center rounded-full border border-white/10 bg-white/5 px-4 py-1.5 backdrop-blur-sm">
                    <span class="mr-2 h-2 w-2 rounded-full bg-green-500 shadow-[0_0_8px_rgba(34,197,94,0.5)]" />
                    <span class="text-xs font-bold tracking-[0.2em] text-gray-300 uppercase">
                        {label}
                    </span>
                </div>

                <div class="mb-2 flex flex-col items-center leading-none">
                    <h1 class="text-4xl font-black tracking-tighter text-white sm:text-6xl md:text-7xl lg:text-8xl">
                        "COMING SOON"
                    </h1>
                    <div class="mt-4 flex items-start justify-center gap-2 sm:gap-4 md:gap-6">
                        <Countdown season />
                    </div>
                </div>

                <div class="mt-4 flex w-full max-w-xl flex-col items-center gap-4 rounded-2xl border border-white/10 bg-white/5 p-2 backdrop-blur-md sm:flex-row sm:p-3">
                    <a
                        href=CLUB_HOME
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden px-2 text-xs font-bold tracking-widest text-gray-400 uppercase transition-colors hover:text-white sm:block"
                    >
                        "CCBC home"
                    </a>
                    <div class="hidden h-8 w-px bg-white/10 sm:block" />
                    <button
                        type="button"
                        class="h-12 w-full rounded-md bg-gradient-to-r from-orange-500 to-orange-600 text-sm font-bold tracking-wider text-white hover:from-orange-400 hover:to-orange-500 sm:flex-1"
                        on:click=move |_| open(RequestKind::Join)
                    >
                        "MAKE OR JOIN TEAM"
                    </button>
                    <button
                        type="button"
                        class="h-12 w-full rounded-md border border-white/10 bg-white/5 text-sm font-bold tracking-wider text-white hover:bg-white/10 sm:flex-1"
                        on:click=move |_| open(RequestKind::Sponsor)
                    >
                        "SPONSOR LEAGUE"
                    </button>
                </div>

                <ContactModal modal />

                <TeamMarquee />
            </div>
        </div>
    }
}
