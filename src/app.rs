mod about;
mod articles;
mod contact;
mod decor;
mod footer;
mod hero;
mod projects;
mod services;
mod timeline;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::nav::NavState;
use crate::portfolio::{Icon, EDUCATION, EXPERIENCE};

use about::About;
use articles::Articles;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use services::Services;
use timeline::Timeline;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script src="/particles.js" defer></script>
                <MetaTags />
            </head>
            <body class="bg-[#0c1221] text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Leul.dev - {title}") />
        <Meta
            name="description"
            content="Flutter and MERN stack developer portfolio: projects, services, articles and contact."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The single page: every section, top to bottom.
#[component]
fn HomePage() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let page_class = move || {
        if nav.with(NavState::scroll_locked) {
            "relative h-screen overflow-hidden"
        } else {
            "relative"
        }
    };

    view! {
        <Title text="Portfolio" />
        <div class=page_class>
            <Hero nav />
            <About />
            <Services />
            <Projects />
            <Timeline
                id="education"
                eyebrow="Learning Journey"
                title="Education"
                icon=Icon::GraduationCap
                entries=&EDUCATION
            />
            <Timeline
                id="experience"
                eyebrow="Career Journey"
                title="Experience"
                icon=Icon::Briefcase
                entries=&EXPERIENCE
            />
            <Articles />
            <Contact />
            <Footer />
        </div>
    }
}
