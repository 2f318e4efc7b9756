use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Team {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const TEAMS: [Team; 8] = [
    Team {
        name: "BBB",
        logo: "/team_logos/bbb.png",
    },
    Team {
        name: "Team Aegis",
        logo: "/team_logos/team-aegis.png",
    },
    Team {
        name: "Calgary Brothers",
        logo: "/team_logos/calgary-brothers.png",
    },
    Team {
        name: "Cash",
        logo: "/team_logos/cash.png",
    },
    Team {
        name: "Pinoy Finest",
        logo: "/team_logos/pinoy-finest.png",
    },
    Team {
        name: "South Pole",
        logo: "/team_logos/south-pole.png",
    },
    Team {
        name: "Team Korea",
        logo: "/team_logos/team-korea.png",
    },
    Team {
        name: "YYC Shooters",
        logo: "/team_logos/yyc-shooters.png",
    },
];

/// Team logos scrolling sideways. The list is rendered twice so the CSS
/// animation can loop without a visible seam.
#[component]
pub fn TeamMarquee() -> impl IntoView {
    view! {
        <div class="mt-8 w-full max-w-5xl overflow-hidden pause-on-hover">
            <div class="flex w-max animate-marquee gap-16">
                {TEAMS
                    .iter()
                    .chain(TEAMS.iter())
                    .map(|team| {
                        view! {
                            <div class="flex flex-col items-center gap-4">
                                <div class="relative h-20 w-20 overflow-hidden rounded-full border-2 border-white/10 bg-white/5 p-2 backdrop-blur-sm transition-transform hover:scale-110 sm:h-24 sm:w-24">
                                    <img
                                        src=team.logo
                                        alt=team.name
                                        class="h-full w-full object-contain"
                                    />
                                </div>
                                <span class="text-xs font-bold tracking-wider text-white uppercase sm:text-sm">
                                    {team.name}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
