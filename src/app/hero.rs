use leptos::prelude::*;

use super::decor::ParticleField;
use crate::effects::HERO_PARTICLES;
use crate::nav::{NavState, Section};
use crate::portfolio::{BRAND, HERO_SOCIALS};

fn scroll_to(anchor: &str) {
    if let Some(el) = document().get_element_by_id(anchor) {
        el.scroll_into_view();
    }
}

#[component]
pub fn Hero(nav: RwSignal<NavState>) -> impl IntoView {
    let go = move |section: Section| {
        let anchor = nav.try_update(|n| n.navigate(section));
        if let Some(anchor) = anchor {
            scroll_to(anchor);
        }
    };

    view! {
        <section id="home" class="relative min-h-screen overflow-hidden">
            <ParticleField id="particles-hero" config=HERO_PARTICLES />
            <div class="absolute -top-40 -left-40 w-96 h-96 bg-pink-500 rounded-full mix-blend-multiply blur-3xl opacity-40 animate-blob"></div>
            <div class="absolute top-40 right-40 w-96 h-96 bg-purple-500 rounded-full mix-blend-multiply blur-3xl opacity-40 animate-blob animation-delay-2000"></div>

            <nav class="sticky top-0 z-50 flex items-center justify-between px-6 md:px-12 py-5 backdrop-blur-lg animate-slide-down">
                <h1 class="text-3xl font-extrabold tracking-wide text-transparent bg-clip-text bg-gradient-to-r from-fuchsia-500 via-pink-500 to-yellow-400 cursor-pointer hover:scale-105 transition-transform">
                    {BRAND}
                </h1>
                <div class="hidden md:flex gap-10 text-lg font-medium text-gray-300">
                    {Section::NAVBAR
                        .into_iter()
                        .map(|section| {
                            let active = move || nav.with(|n| n.active() == section);
                            view! {
                                <button
                                    on:click=move |_| go(section)
                                    class="relative transition duration-300 hover:text-white"
                                    class:text-white=active
                                >
                                    {section.label()}
                                    <Show when=active>
                                        <span class="absolute -bottom-1 left-0 h-0.5 w-full bg-gradient-to-r from-pink-500 via-purple-500 to-yellow-400 rounded"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden text-3xl text-white"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.with(NavState::menu_open) { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || nav.with(NavState::menu_open)>
                <div class="fixed top-0 right-0 w-4/5 max-w-xs h-full bg-[#0c1221] backdrop-blur-lg border-l border-gray-700 z-50 px-8 py-16 space-y-10 animate-slide-in">
                    {Section::NAVBAR
                        .into_iter()
                        .map(|section| {
                            let class = move || {
                                if nav.with(|n| n.active() == section) {
                                    "block w-full text-left text-2xl font-semibold px-4 py-2 rounded transition-colors text-white bg-pink-600/20"
                                } else {
                                    "block w-full text-left text-2xl font-semibold px-4 py-2 rounded transition-colors text-gray-300 hover:bg-white/10"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| go(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <div class="relative z-10 flex flex-col md:flex-row items-center justify-center max-w-7xl px-6 md:px-12 py-28 mx-auto gap-16">
                <div class="flex-1 animate-fade-right">
                    <h1 class="text-5xl md:text-7xl font-extrabold leading-tight bg-gradient-to-r from-purple-400 via-pink-500 to-yellow-400 text-transparent bg-clip-text">
                        "Hey! I’m " <br />
                        <span class="underline decoration-yellow-400">"Leul"</span>
                        " "
                        <span class="inline-block animate-wave">"👋"</span>
                    </h1>
                    <p class="mt-6 text-2xl text-gray-200 max-w-xl font-medium">
                        "🚀 Flutter + MERN Stack Pro — I craft magical UIs that impress."
                    </p>
                    <a
                        href="#contact"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(Section::Contact);
                        }
                        class="inline-block mt-10 px-12 py-5 bg-gradient-to-r from-pink-500 via-purple-500 to-yellow-400 text-black text-xl font-bold rounded-full shadow-lg hover:scale-105 transition-transform"
                    >
                        "Let’s Connect ⚡"
                    </a>
                    <div class="flex mt-12 space-x-6">
                        {HERO_SOCIALS
                            .iter()
                            .map(|link| {
                                let icon = link.icon.class();
                                let target = if link.is_external() { "_blank" } else { "_self" };
                                view! {
                                    <a
                                        href=link.url
                                        target=target
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="text-2xl bg-white/10 p-3 rounded-full hover:bg-white/20 transition"
                                    >
                                        <i class=icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex-1 flex justify-center animate-zoom-in">
                    <img
                        src="/images/ai-robot.gif"
                        alt="Animated robot"
                        class="max-w-md w-full h-auto hover:scale-105 transition-transform duration-500"
                    />
                </div>
            </div>
        </section>
    }
}
