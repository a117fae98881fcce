use leptos::prelude::*;

use super::decor::{Backdrop, ParticleField};
use crate::effects::{ABOUT_PARTICLES, WARM_BLOBS};
use crate::portfolio::{marquee, CV_URL, PHOTO_URL};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id="about"
            class="relative min-h-screen flex flex-col items-center justify-center px-6 md:px-24 py-28 overflow-hidden"
        >
            <Backdrop blobs=&WARM_BLOBS />
            <ParticleField id="particles-about" config=ABOUT_PARTICLES />

            <div class="relative z-20 w-full max-w-7xl flex flex-col lg:flex-row items-center justify-between gap-16 lg:gap-24 reveal">
                <div class="flex-1 flex flex-col items-center lg:items-start text-center lg:text-left">
                    <h2 class="text-4xl md:text-6xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-purple-400 via-pink-500 to-yellow-400 mb-6">
                        "About Me"
                    </h2>
                    <h3 class="text-2xl md:text-4xl font-bold mb-4">"A Flutter & MERN Craftsman"</h3>
                    <p class="text-lg md:text-xl text-gray-300 max-w-xl mb-8">
                        "I craft immersive digital experiences with cutting-edge technology and innovative design. My passion lies in creating clean, elegant code that powers stunning UI and provides a seamless user experience."
                    </p>
                    <p class="text-lg md:text-xl text-gray-300 max-w-xl mb-12">
                        "With a focus on both mobile and web, I've had the privilege of working on projects that solve real-world problems and push the boundaries of what's possible."
                    </p>
                    <a
                        href=CV_URL
                        download="Leul_Resume.pdf"
                        class="mt-8 inline-block px-12 py-4 font-bold rounded-full bg-gradient-to-r from-pink-600 via-purple-600 to-blue-600 text-white shadow-xl hover:shadow-pink-500/80 hover:scale-105 transition transform duration-500"
                    >
                        "Download CV"
                    </a>
                </div>

                <div class="flex-1 flex justify-center lg:justify-end">
                    <div class="group relative w-72 h-80 md:w-[400px] md:h-[500px] rounded-[40px] overflow-hidden shadow-2xl gradient-frame">
                        <img
                            src=PHOTO_URL
                            alt="Leul Profile"
                            class="object-cover w-full h-full grayscale hover:grayscale-0 transition-all duration-700 ease-in-out cursor-pointer"
                            loading="lazy"
                            draggable="false"
                        />
                        <div class="absolute inset-0 pointer-events-none z-20 opacity-0 group-hover:opacity-100 transition-opacity duration-500 glitch-scan"></div>
                    </div>
                </div>
            </div>

            <div class="relative z-20 w-full max-w-7xl mt-20">
                <div class="w-full flex justify-center items-center py-8 rounded-3xl bg-white/5 backdrop-blur-md border border-white/10 shadow-lg overflow-hidden">
                    <div class="flex items-center space-x-6 lg:space-x-12 whitespace-nowrap animate-marquee">
                        {marquee()
                            .map(|skill| {
                                view! {
                                    <div class="flex flex-col items-center gap-2 p-2 group hover:scale-125 transition-transform">
                                        <div class="w-16 h-16 sm:w-20 sm:h-20 rounded-full flex items-center justify-center p-2 bg-white/5 backdrop-blur-sm border border-white/10">
                                            <i
                                                class=format!("{} text-4xl", skill.icon)
                                                style=format!("color: {}", skill.color)
                                            ></i>
                                        </div>
                                        <span class="text-xs font-semibold text-gray-400 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                                            {skill.title}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
