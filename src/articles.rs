use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use std::sync::LazyLock;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

/// Format of [`Article::date`], e.g. "July 25, 2024".
pub const DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Embed)]
#[folder = "articles"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
static CATALOG: LazyLock<Result<Vec<Article>, ArticleError>> = LazyLock::new(load_catalog);

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    id: u32,
    title: String,
    date: String,
    tag: String,
    description: String,
    image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub tag: String,
    pub description: String,
    pub image: String,
    /// Rendered HTML, inserted into the page verbatim.
    pub content: String,
}

impl Article {
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id,
            title: self.title.clone(),
            date: self.date.clone(),
            tag: self.tag.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }
}

/// Card-sized view of an [`Article`] used by the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub tag: String,
    pub description: String,
    pub image: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArticleError {
    #[error("article {0} not found")]
    NotFound(u32),
    #[error("couldn't parse article {0}")]
    Parse(String),
    #[error("duplicate article id {0}")]
    DuplicateId(u32),
    #[error("couldn't highlight code block")]
    Highlight,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn parse_article(name: &str, raw: &str) -> Result<Article, ArticleError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(raw)
        .ok_or_else(|| ArticleError::Parse(name.to_string()))?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let events = highlight(parser)?;

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, events.into_iter());

    let fm = parsed.data;
    Ok(Article {
        id: fm.id,
        title: fm.title,
        date: fm.date,
        tag: fm.tag,
        description: fm.description,
        image: fm.image,
        content: html_output,
    })
}

/// Parses `(file name, bytes)` pairs into articles ordered by id.
#[cfg(any(feature = "ssr", feature = "rss"))]
fn collect_catalog<'a, I>(files: I) -> Result<Vec<Article>, ArticleError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut articles = files
        .into_iter()
        .filter(|(name, _)| name.ends_with(".md"))
        .map(|(name, data)| {
            let raw = std::str::from_utf8(data).map_err(|_| ArticleError::Parse(name.to_string()))?;
            parse_article(name, raw)
        })
        .collect::<Result<Vec<_>, _>>()?;
    articles.sort_by_key(|a| a.id);
    if let Some(dup) = articles.windows(2).find(|w| w[0].id == w[1].id) {
        return Err(ArticleError::DuplicateId(dup[0].id));
    }
    Ok(articles)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn load_catalog() -> Result<Vec<Article>, ArticleError> {
    let files = Assets::iter()
        .map(|name| {
            Assets::get(&name)
                .map(|file| (name.to_string(), file.data.into_owned()))
                .ok_or_else(|| ArticleError::Parse(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let articles = collect_catalog(
        files
            .iter()
            .map(|(name, data)| (name.as_str(), data.as_slice())),
    )?;
    #[cfg(feature = "ssr")]
    tracing::info!(count = articles.len(), "loaded article catalog");
    Ok(articles)
}

/// The full, immutable set of articles, parsed on first use.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn catalog() -> Result<&'static [Article], ArticleError> {
    CATALOG.as_ref().map(Vec::as_slice).map_err(|e| e.clone())
}

/// Articles ordered newest first, for feeds.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn newest_first() -> Result<Vec<Article>, ArticleError> {
    let mut articles = catalog()?.to_vec();
    articles.sort_by(|a, b| b.published().cmp(&a.published()));
    Ok(articles)
}

/// What the article section should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleView {
    List(Vec<ArticleSummary>),
    Detail(Article),
}

/// List/detail selection over a fixed set of articles.
///
/// Starts in the list view. [`ArticleNav::select`] moves to the detail view of
/// one article and [`ArticleNav::clear`] returns to the list. The collection is
/// never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleNav {
    articles: Vec<Article>,
    selected: Option<usize>,
}

impl ArticleNav {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            selected: None,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn selected(&self) -> Option<&Article> {
        self.selected.map(|i| &self.articles[i])
    }

    pub fn is_detail(&self) -> bool {
        self.selected.is_some()
    }

    /// Shows the detail view of the article with `id`.
    ///
    /// Ids outside the collection are rejected and leave the state untouched.
    pub fn select(&mut self, id: u32) -> Result<(), ArticleError> {
        let index = self
            .articles
            .iter()
            .position(|a| a.id == id)
            .ok_or(ArticleError::NotFound(id))?;
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn view(&self) -> ArticleView {
        match self.selected() {
            Some(article) => ArticleView::Detail(article.clone()),
            None => ArticleView::List(self.articles.iter().map(Article::summary).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn article(id: u32, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            date: "July 25, 2024".to_string(),
            tag: format!("tag-{id}"),
            description: format!("About {title}"),
            image: format!("/images/{id}.png"),
            content: format!("<p>{title} body</p>"),
        }
    }

    fn three() -> Vec<Article> {
        vec![
            article(1, "First"),
            article(2, "Second"),
            article(3, "Third"),
        ]
    }

    #[test]
    fn test_initial_state_is_list() {
        let nav = ArticleNav::new(three());
        assert!(!nav.is_detail());
        assert!(nav.selected().is_none());
        assert!(matches!(nav.view(), ArticleView::List(_)));
    }

    #[test]
    fn test_three_articles_render_three_distinct_cards() {
        let nav = ArticleNav::new(three());
        let ArticleView::List(cards) = nav.view() else {
            panic!("expected list view");
        };
        assert_eq!(cards.len(), 3);
        let titles = cards.iter().map(|c| c.title.as_str()).collect::<HashSet<_>>();
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn test_select_shows_matching_detail() {
        let articles = three();
        for a in &articles {
            let mut nav = ArticleNav::new(articles.clone());
            nav.select(a.id).unwrap();
            assert_eq!(nav.view(), ArticleView::Detail(a.clone()));
        }
    }

    #[test]
    fn test_clear_restores_full_list() {
        let articles = three();
        let mut nav = ArticleNav::new(articles.clone());
        let before = nav.view();
        nav.select(2).unwrap();
        nav.clear();
        assert!(!nav.is_detail());
        assert_eq!(nav.view(), before);
        let ArticleView::List(cards) = nav.view() else {
            panic!("expected list view");
        };
        let ids = cards.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = ArticleNav::new(three());
        once.select(3).unwrap();
        let mut twice = ArticleNav::new(three());
        twice.select(3).unwrap();
        twice.select(3).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.selected().map(|a| a.id), Some(3));
    }

    #[test]
    fn test_select_clear_select_shows_second() {
        let mut nav = ArticleNav::new(three());
        nav.select(1).unwrap();
        nav.clear();
        nav.select(2).unwrap();
        match nav.view() {
            ArticleView::Detail(a) => assert_eq!(a, article(2, "Second")),
            ArticleView::List(_) => panic!("expected detail view"),
        }
    }

    #[test]
    fn test_select_from_detail_switches_article() {
        let mut nav = ArticleNav::new(three());
        nav.select(1).unwrap();
        nav.select(3).unwrap();
        assert_eq!(nav.selected().map(|a| a.title.as_str()), Some("Third"));
    }

    #[test]
    fn test_unknown_id_leaves_state_unchanged() {
        let mut nav = ArticleNav::new(three());
        assert_eq!(nav.select(42), Err(ArticleError::NotFound(42)));
        assert!(!nav.is_detail());

        nav.select(2).unwrap();
        assert!(nav.select(0).is_err());
        assert_eq!(nav.selected().map(|a| a.id), Some(2));
    }

    #[test]
    fn test_summary_copies_card_fields() {
        let a = article(7, "Seventh");
        let s = a.summary();
        assert_eq!(s.id, 7);
        assert_eq!(s.title, a.title);
        assert_eq!(s.date, a.date);
        assert_eq!(s.tag, a.tag);
        assert_eq!(s.description, a.description);
        assert_eq!(s.image, a.image);
    }

    #[test]
    fn test_published_date_parsing() {
        let mut a = article(1, "Dated");
        assert_eq!(a.published(), NaiveDate::from_ymd_opt(2024, 7, 25));
        a.date = "October 1, 2024".to_string();
        assert_eq!(a.published(), NaiveDate::from_ymd_opt(2024, 10, 1));
        a.date = "sometime".to_string();
        assert_eq!(a.published(), None);
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_catalog_loads_embedded_articles() {
        let articles = catalog().expect("embedded articles should parse");
        assert_eq!(articles.len(), 6);
        let ids = articles.iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(articles.iter().all(|a| a.published().is_some()));
        assert_eq!(articles[0].title, "The Rise of Full-Stack Development");
        assert!(articles[0].content.contains("<strong>MongoDB</strong>"));
        assert!(!articles[0].content.contains("---"));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_code_fences_are_highlighted() {
        let git = catalog()
            .unwrap()
            .iter()
            .find(|a| a.id == 5)
            .expect("git article should exist");
        assert!(git.content.contains("<pre style="));
        assert!(!git.content.contains("<code class=\"language-bash\">"));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_newest_first_ordering() {
        let articles = newest_first().unwrap();
        assert_eq!(articles.first().map(|a| a.id), Some(6));
        assert_eq!(articles.last().map(|a| a.id), Some(1));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_parse_article_rejects_missing_front_matter() {
        let err = parse_article("broken.md", "no front matter here").unwrap_err();
        assert_eq!(err, ArticleError::Parse("broken.md".to_string()));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    fn source(id: u32) -> String {
        format!(
            "---\nid: {id}\ntitle: Post {id}\ndate: July 25, 2024\ntag: Tools\ndescription: d\nimage: /i.png\n---\nBody {id}\n"
        )
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_collect_catalog_sorts_and_skips_other_files() {
        let (two, one) = (source(2), source(1));
        let articles = collect_catalog([
            ("b.md", two.as_bytes()),
            ("notes.txt", b"\xff".as_slice()),
            ("a.md", one.as_bytes()),
        ])
        .unwrap();
        assert_eq!(articles.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_collect_catalog_rejects_duplicate_ids() {
        let (first, second) = (source(3), source(3));
        let err = collect_catalog([("a.md", first.as_bytes()), ("b.md", second.as_bytes())])
            .unwrap_err();
        assert_eq!(err, ArticleError::DuplicateId(3));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_collect_catalog_rejects_invalid_utf8() {
        let err = collect_catalog([("bad.md", b"\xff\xfe".as_slice())]).unwrap_err();
        assert_eq!(err, ArticleError::Parse("bad.md".to_string()));
    }
}
