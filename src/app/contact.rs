use leptos::prelude::*;

use super::decor::Backdrop;
use crate::contact::ContactReply;
use crate::effects::WARM_BLOBS;
use crate::portfolio::{CONTACT_DETAILS, CONTACT_SOCIALS, OWNER};

/// Validates a contact form submission and hands it to the configured endpoint.
///
/// Validation failures come back as [`ContactReply::Rejected`] so the form can
/// show them; only delivery problems are server errors.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<ContactReply, ServerFnError> {
    use std::sync::Arc;

    use crate::config::SiteConfig;
    use crate::contact::{ContactEndpoint, ContactForm};

    let config = use_context::<SiteConfig>().unwrap_or_default();
    let endpoint = use_context::<Arc<dyn ContactEndpoint>>()
        .ok_or_else(|| ServerFnError::new("no contact endpoint configured"))?;

    let form = ContactForm {
        name,
        email,
        message,
    };
    match form.validate(config.max_message) {
        Ok(msg) => {
            endpoint.deliver(&msg).map_err(|e| {
                tracing::error!("contact delivery failed: {e}");
                ServerFnError::new(e.to_string())
            })?;
            Ok(ContactReply::Sent { name: msg.name })
        }
        Err(e) => {
            tracing::debug!("contact form rejected: {e}");
            Ok(ContactReply::Rejected(e.to_string()))
        }
    }
}

const FIELD_CLASS: &str = "w-full px-5 py-4 rounded-xl bg-white/5 border border-white/10 text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-pink-500 transition";

#[component]
fn Details() -> impl IntoView {
    view! {
        <div class="space-y-4 text-gray-300">
            {CONTACT_DETAILS
                .iter()
                .map(|detail| {
                    let icon = detail.icon.class();
                    let text = match detail.href {
                        Some(href) => {
                            view! {
                                <a href=href class="hover:text-pink-400 transition">
                                    {detail.text}
                                </a>
                            }
                                .into_any()
                        }
                        None => view! { <span>{detail.text}</span> }.into_any(),
                    };
                    view! {
                        <div class="flex items-center gap-3">
                            <i class=format!("{icon} text-pink-500 text-xl")></i>
                            {text}
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="flex gap-4 mt-8">
            {CONTACT_SOCIALS
                .iter()
                .map(|link| {
                    let target = if link.is_external() { "_blank" } else { "_self" };
                    view! {
                        <a
                            href=link.url
                            target=target
                            rel="noopener noreferrer"
                            aria-label=link.label
                            class="text-2xl bg-white/10 p-3 rounded-full hover:bg-white/20 hover:scale-110 transition"
                        >
                            <i class=link.icon.class()></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let pending = submit.pending();
    let reply = move || {
        submit.value().get().map(|result| match result {
            Ok(reply @ ContactReply::Sent { .. }) => {
                view! { <p class="text-green-400 animate-fade-up">{reply.text()}</p> }.into_any()
            }
            Ok(reply) => view! { <p class="text-yellow-400">{reply.text()}</p> }.into_any(),
            Err(e) => {
                log::error!("contact form failed: {e}");
                view! { <p class="text-red-400">"Something went wrong, please try again later."</p> }
                    .into_any()
            }
        })
    };

    view! {
        <section id="contact" class="relative min-h-screen px-6 py-20 overflow-hidden">
            <Backdrop blobs=&WARM_BLOBS />
            <div class="relative z-10 max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                <div class="animate-fade-right">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 heading-underline">"Let's Connect!"</h2>
                    <h3 class="text-2xl font-semibold text-pink-400">{OWNER}</h3>
                    <p class="text-lg text-gray-400 mb-6">"Flutter & Frontend Developer"</p>
                    <p class="text-gray-300 mb-8 max-w-md">
                        "Have a project in mind, a question, or just want to say hi? My inbox is always open."
                    </p>
                    <Details />
                </div>
                <ActionForm action=submit attr:class="space-y-5 p-8 rounded-2xl bg-white/5 border border-white/10 backdrop-blur-lg shadow-xl gradient-frame">
                    <input type="text" name="name" placeholder="Your Name" required class=FIELD_CLASS />
                    <input type="email" name="email" placeholder="Your Email" required class=FIELD_CLASS />
                    <textarea name="message" rows="5" placeholder="Your Message" required class=FIELD_CLASS></textarea>
                    <button
                        type="submit"
                        disabled=pending
                        class="w-full py-4 rounded-xl font-bold text-black bg-gradient-to-r from-pink-500 via-purple-500 to-yellow-400 hover:scale-[1.02] transition-transform disabled:opacity-60"
                    >
                        {move || if pending.get() { "SENDING..." } else { "SEND MESSAGE 🚀" }}
                    </button>
                    {reply}
                </ActionForm>
            </div>
        </section>
    }
}
