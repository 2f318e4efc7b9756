mod contact;
mod countdown;
mod landing;
mod notifications;
mod teams;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use landing::LandingPage;
use notifications::{Notifications, Toasts};

pub use contact::send_contact_email;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/png" href="/ccbc_logo.png" />
                <link rel="stylesheet" id="leptos" href="/pkg/league-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-[#020617]">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    Notifications::provide();

    view! {
        <Title formatter=|title| format!("CCBC - {title}") />
        <Meta
            name="description"
            content="Calgary Chinese Basketball Club: the Asian League is coming back. Make or join a team, or sponsor the league."
        />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </main>
            <Toasts />
        </Router>
    }
}
