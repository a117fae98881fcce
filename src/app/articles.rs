use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};

use super::decor::Backdrop;
#[cfg(feature = "ssr")]
use crate::articles::catalog;
use crate::articles::{Article, ArticleNav, ArticleSummary, ArticleView};
use crate::effects::COOL_BLOBS;

#[server(input = GetUrl)]
pub async fn list_articles() -> Result<Vec<Article>, ServerFnError> {
    catalog()
        .map(<[Article]>::to_vec)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

const CALENDAR_PATH: &str = "M6 2a1 1 0 00-1 1v1H4a2 2 0 00-2 2v10a2 2 0 002 2h12a2 2 0 002-2V6a2 2 0 00-2-2h-1V3a1 1 0 10-2 0v1H7V3a1 1 0 00-1-1zm0 5a1 1 0 000 2h8a1 1 0 100-2H6z";
const TAG_PATH: &str = "M10.868 2.029a1.002 1.002 0 00-1.424 0L3.293 8.175a1 1 0 000 1.414l6.151 6.151a1 1 0 001.414 0l6.151-6.151a1 1 0 000-1.414L10.868 2.029zM10 5a2 2 0 100 4 2 2 0 000-4z";
const BACK_PATH: &str = "M9.707 16.707a1 1 0 01-1.414 0l-6-6a1 1 0 010-1.414l6-6a1 1 0 011.414 1.414L5.414 9H17a1 1 0 110 2H5.414l4.293 4.293a1 1 0 010 1.414z";

#[component]
fn Glyph(path: &'static str, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg">
            <path fill-rule="evenodd" d=path clip-rule="evenodd"></path>
        </svg>
    }
}

#[component]
fn DateAndTag(
    date: String,
    tag: String,
    #[prop(default = "w-3 h-3")] size: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <Glyph path=CALENDAR_PATH class=format!("{size} text-pink-500") />
            <span>{date}</span>
        </div>
        <div class="flex items-center gap-1">
            <Glyph path=TAG_PATH class=format!("{size} text-blue-500") />
            <span class="font-semibold text-blue-400">{tag}</span>
        </div>
    }
}

#[component]
fn ArticleList(cards: Vec<ArticleSummary>, on_select: Callback<u32>) -> impl IntoView {
    view! {
        <h1 class="text-4xl md:text-5xl font-bold mb-4 text-center relative inline-block heading-underline">
            "My Articles"
        </h1>
        <p class="text-gray-400 text-center mb-12 max-w-2xl mx-auto">
            "Insights, tutorials, and thoughts on web development, software engineering, and the tech industry."
        </p>
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 stagger">
            {cards
                .into_iter()
                .map(|card| {
                    let id = card.id;
                    view! {
                        <div
                            on:click=move |_| on_select.run(id)
                            class="group block text-left p-4 rounded-xl shadow-lg border border-white/10 transition-all duration-300 hover:scale-[1.03] hover:border-pink-500/50 hover:bg-white/5 cursor-pointer"
                        >
                            <div class="relative overflow-hidden rounded-lg mb-4">
                                <img
                                    src=card.image
                                    alt=card.title.clone()
                                    class="w-full h-48 object-cover rounded-lg transition-transform duration-300 group-hover:scale-[1.05]"
                                />
                            </div>
                            <div class="flex items-center space-x-2 text-sm text-gray-400 mb-2">
                                <DateAndTag date=card.date tag=card.tag />
                            </div>
                            <h3 class="text-xl font-bold text-white mb-2">{card.title}</h3>
                            <p class="text-gray-300">{card.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ArticleDetail(article: Article, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto text-left animate-fade-up">
            <button
                on:click=move |_| on_back.run(())
                class="mb-8 flex items-center gap-2 text-pink-500 hover:text-white transition-colors duration-300"
            >
                <Glyph path=BACK_PATH class="w-4 h-4" />
                <span>"Back to Articles"</span>
            </button>
            <img
                src=article.image
                alt=article.title.clone()
                class="w-full h-auto rounded-lg mb-8 shadow-xl"
            />
            <h1 class="text-4xl md:text-5xl font-bold mb-4 text-transparent bg-clip-text bg-gradient-to-r from-pink-500 to-purple-500">
                {article.title}
            </h1>
            <p class="text-xl text-gray-300 mb-4">{article.description}</p>
            <div class="flex items-center space-x-4 text-gray-400 mb-8">
                <DateAndTag date=article.date tag=article.tag size="w-4 h-4" />
            </div>
            <div class="prose prose-lg prose-invert text-gray-300" inner_html=article.content></div>
        </div>
    }
}

/// Switches between the article list and one article's detail.
#[component]
fn ArticleBrowser(articles: Vec<Article>) -> impl IntoView {
    let nav = RwSignal::new(ArticleNav::new(articles));

    let on_select = Callback::new(move |id: u32| {
        nav.update(|n| match n.select(id) {
            Ok(()) => log::debug!("showing article {id}"),
            Err(e) => log::warn!("{e}"),
        });
        if let Some(el) = document().get_element_by_id("blog") {
            el.scroll_into_view();
        }
    });
    let on_back = Callback::new(move |()| {
        nav.update(ArticleNav::clear);
        log::debug!("back to article list");
    });

    move || match nav.with(ArticleNav::view) {
        ArticleView::List(cards) => Either::Left(view! { <ArticleList cards on_select /> }),
        ArticleView::Detail(article) => Either::Right(view! { <ArticleDetail article on_back /> }),
    }
}

#[component]
pub fn Articles() -> impl IntoView {
    let articles = Resource::new(|| (), |_| list_articles());

    view! {
        <section id="blog" class="relative min-h-screen px-6 py-20 overflow-hidden">
            <Backdrop blobs=&COOL_BLOBS />
            <div class="relative z-10 max-w-7xl mx-auto text-center">
                <Suspense fallback=move || {
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            <div class="loading-skeleton h-72 rounded-xl"></div>
                            <div class="loading-skeleton h-72 rounded-xl"></div>
                            <div class="loading-skeleton h-72 rounded-xl"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match articles.await {
                            Ok(list) => Either::Left(view! { <ArticleBrowser articles=list /> }),
                            Err(e) => {
                                Either::Right(
                                    view! {
                                        <p class="text-red-400">
                                            "Couldn't load articles: " {e.to_string()}
                                        </p>
                                    },
                                )
                            }
                        }
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            id: 7,
            title: "Shipping Leptos".to_string(),
            date: "March 3, 2025".to_string(),
            tag: "Rust".to_string(),
            description: "Lead paragraph for the article".to_string(),
            image: "/images/leptos.png".to_string(),
            content: "<p>Body with <code>code</code></p>".to_string(),
        }
    }

    #[test]
    fn test_detail_renders_every_field() {
        let html = Owner::new().with(|| {
            let on_back = Callback::new(|()| {});
            view! { <ArticleDetail article=article() on_back /> }.to_html()
        });
        for field in [
            "Shipping Leptos",
            "March 3, 2025",
            "Rust",
            "Lead paragraph for the article",
            "/images/leptos.png",
            "<p>Body with <code>code</code></p>",
        ] {
            assert!(html.contains(field), "{field:?} missing from {html}");
        }
    }

    #[test]
    fn test_list_renders_cards_without_body() {
        let html = Owner::new().with(|| {
            let on_select = Callback::new(|_: u32| {});
            view! { <ArticleList cards=vec![article().summary()] on_select /> }.to_html()
        });
        for field in [
            "Shipping Leptos",
            "March 3, 2025",
            "Rust",
            "Lead paragraph for the article",
            "/images/leptos.png",
        ] {
            assert!(html.contains(field), "{field:?} missing from {html}");
        }
        assert!(!html.contains("Body with"));
    }
}
