use leptos::prelude::*;
use leptos_use::{signal_debounced, use_window_scroll};

use crate::nav::{scroll_top_visible, SCROLL_DEBOUNCE_MS};
use crate::portfolio::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scroll_y = signal_debounced(scroll_y, SCROLL_DEBOUNCE_MS);
    let show_button = move || scroll_top_visible(scroll_y.get());

    view! {
        <section id="services" class="relative min-h-screen px-6 py-20 overflow-hidden">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-pink-500 text-sm font-semibold mb-2 uppercase tracking-wide">
                    "FEATURES"
                </h2>
                <h1 class="text-4xl md:text-5xl font-bold mb-12 relative inline-block heading-underline">
                    "What I Do"
                </h1>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 stagger">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            let title_id = format!("service-{i}-title");
                            view! {
                                <article
                                    class="group relative bg-[#001a4d]/50 backdrop-blur-lg p-6 rounded-2xl border border-pink-500/30 transition-all duration-300 shadow-lg hover:shadow-pink-500/30 hover:-translate-y-2 hover:scale-105"
                                    aria-labelledby=title_id.clone()
                                >
                                    <div class="mb-4">
                                        <i
                                            class=format!(
                                                "{} text-3xl text-pink-500 {}",
                                                service.icon.class(),
                                                service.hover,
                                            )
                                            aria-hidden="true"
                                        ></i>
                                    </div>
                                    <h3 id=title_id.clone() class="text-xl font-bold mb-2">
                                        {service.title}
                                    </h3>
                                    <p class="text-gray-300 leading-relaxed">{service.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=show_button>
                <button
                    on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                    class="fixed bottom-6 right-6 bg-pink-600 hover:bg-pink-700 text-white p-4 rounded-full shadow-xl z-50 focus:outline-none focus:ring-4 focus:ring-pink-400 transition-all duration-300 animate-bounce"
                    aria-label="Scroll to top"
                >
                    "↑"
                </button>
            </Show>
        </section>
    }
}
