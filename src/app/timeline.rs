use leptos::prelude::*;

use crate::portfolio::{timeline_side, Icon, TimelineEntry};

/// A vertical timeline of entries alternating either side of a spine.
#[component]
pub fn Timeline(
    id: &'static str,
    eyebrow: &'static str,
    title: &'static str,
    icon: Icon,
    entries: &'static [TimelineEntry],
) -> impl IntoView {
    view! {
        <section id=id class="relative min-h-screen px-6 py-20">
            <div class="max-w-5xl mx-auto relative">
                <h2 class="text-pink-500 text-sm font-semibold mb-2 uppercase tracking-wide">
                    {eyebrow}
                </h2>
                <h1 class="text-4xl md:text-5xl font-bold mb-12 relative inline-block heading-underline">
                    {title}
                </h1>
                <div class="absolute top-20 bottom-0 left-4 md:left-1/2 w-1 bg-gradient-to-b from-pink-500 to-purple-500/40 rounded-full"></div>
                <div class="relative flex flex-col gap-12 stagger">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let heading_id = format!("{id}-{i}-heading");
                            view! {
                                <article
                                    class=format!(
                                        "relative bg-[#001a4d]/50 backdrop-blur-md p-6 rounded-2xl border-l-4 border-pink-500 shadow-md md:w-1/2 transition-all duration-300 hover:-translate-y-1 hover:scale-[1.02] {}",
                                        timeline_side(i),
                                    )
                                    aria-labelledby=heading_id.clone()
                                >
                                    <span class="absolute -left-6 md:-left-7 top-6 w-5 h-5 bg-pink-500 rounded-full border-4 border-[#0c1221] animate-pulse-dot"></span>
                                    <div class="flex items-center mb-3 space-x-3">
                                        <i class=format!("{} text-2xl text-pink-500", icon.class()) aria-hidden="true"></i>
                                        <h3 id=heading_id.clone() class="text-xl font-bold text-white">
                                            {entry.heading}
                                        </h3>
                                    </div>
                                    <p class="text-pink-400 font-semibold mb-1">{entry.organisation}</p>
                                    <p class="text-gray-400 italic mb-4">{entry.period}</p>
                                    <p class="text-gray-300">{entry.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
