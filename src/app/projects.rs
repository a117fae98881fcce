use leptos::prelude::*;

use super::decor::{Backdrop, ParticleField};
use crate::effects::{COOL_BLOBS, PROJECT_PARTICLES};
use crate::portfolio::{Icon, Project, PROJECTS};

#[component]
fn ProjectCard(index: usize, project: &'static Project) -> impl IntoView {
    let title_id = format!("project-{index}-title");
    view! {
        <div
            class="group relative overflow-hidden bg-[#001a4d]/40 backdrop-blur-xl p-6 rounded-3xl border border-pink-500/30 transition-all duration-500 shadow-xl hover:shadow-pink-500/50 hover:scale-105 cursor-pointer"
            aria-labelledby=title_id.clone()
        >
            <div class="absolute inset-0 opacity-0 group-hover:opacity-10 bg-gradient-to-br from-pink-500 via-purple-600 to-blue-500 animate-shimmer transition-all duration-700 rounded-3xl"></div>
            <div class="relative z-10">
                {project
                    .image
                    .map(|src| {
                        view! {
                            <div class="w-full h-40 mb-4 rounded-xl overflow-hidden border border-white/10">
                                <img
                                    src=src
                                    alt=format!("Preview of {}", project.title)
                                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                />
                            </div>
                        }
                    })}
                <h3 id=title_id.clone() class="text-2xl font-bold mb-4 relative pb-1 card-underline">
                    {project.title}
                </h3>
                <p class="text-gray-300 mb-4 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-pink-600/30 text-pink-200 text-xs font-semibold px-3 py-1 rounded-full select-none backdrop-blur-sm transition-all duration-300 group-hover:scale-105 group-hover:text-white">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-5 items-center mt-6">
                    {project
                        .github
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("{} GitHub Repo", project.title)
                                    class="text-pink-400 hover:text-pink-600 transition duration-300 transform hover:scale-110 text-2xl"
                                >
                                    <i class=Icon::Github.class()></i>
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("{} Live Demo", project.title)
                                    class="text-pink-400 hover:text-pink-600 transition duration-300 transform hover:scale-110 text-xl"
                                >
                                    <i class=Icon::ExternalLink.class()></i>
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="relative min-h-screen px-6 py-24 overflow-hidden">
            <ParticleField id="particles-projects" config=PROJECT_PARTICLES />
            <Backdrop blobs=&COOL_BLOBS />
            <div class="relative z-10 max-w-7xl mx-auto">
                <h2 class="text-pink-500 text-sm font-semibold mb-2 uppercase tracking-widest">
                    "Work"
                </h2>
                <h1 class="text-4xl md:text-5xl font-bold mb-12 relative inline-block heading-underline">
                    "Projects"
                </h1>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-10 stagger">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
