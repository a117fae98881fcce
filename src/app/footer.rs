use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::portfolio::{build_stamp, copyright, BRAND, FOOTER_SOCIALS};

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_stamp(env!("BUILD_TIME"));

    view! {
        <footer class="relative border-t border-white/10 bg-[#0a0f1c] px-6 py-12">
            <div class="max-w-6xl mx-auto flex flex-col items-center text-center gap-6">
                <h2 class="text-2xl md:text-3xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-pink-500 via-purple-500 to-yellow-400">
                    "Let's Build Something Great Together"
                </h2>
                <a
                    href="#contact"
                    class="px-8 py-3 rounded-full border border-pink-500 text-pink-400 hover:bg-pink-500 hover:text-black transition"
                >
                    "Get In Touch"
                </a>
                <div class="flex gap-5">
                    {FOOTER_SOCIALS
                        .iter()
                        .map(|link| {
                            let target = if link.is_external() { "_blank" } else { "_self" };
                            view! {
                                <a
                                    href=link.url
                                    target=target
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="text-xl text-gray-400 hover:text-white hover:-translate-y-1 transition"
                                >
                                    <i class=link.icon.class()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-gray-500">{BRAND} " · " {copyright(Utc::now().year())}</p>
                {built
                    .map(|stamp| {
                        view! { <p class="text-xs text-gray-600">"Built " {stamp}</p> }
                    })}
            </div>
        </footer>
    }
}
