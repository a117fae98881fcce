use leptos::prelude::*;

use crate::effects::{Blob, ParticleConfig};

/// Drifting colour blobs behind a section.
#[component]
pub fn Backdrop(
    blobs: &'static [Blob],
    #[prop(default = "opacity-40")] opacity: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("absolute inset-0 z-0 pointer-events-none {opacity}")>
            {blobs
                .iter()
                .map(|blob| {
                    view! {
                        <div
                            class=format!(
                                "absolute w-[50%] h-[50%] rounded-full blur-3xl animate-drift {}",
                                blob.class,
                            )
                            style=blob.style()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Mount point for a particle field; `public/particles.js` picks up the options.
#[component]
pub fn ParticleField(id: &'static str, config: ParticleConfig) -> impl IntoView {
    let options = config.to_json().unwrap_or_else(|e| {
        log::error!("couldn't serialize particle options for {id}: {e}");
        String::new()
    });
    view! { <div id=id class="absolute inset-0 z-0" data-particles=options></div> }
}
