use chrono::{NaiveTime, TimeZone, Utc};
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
};

use crate::articles::Article;
use crate::config::SiteConfig;
use crate::portfolio::{OWNER, OWNER_EMAIL};

pub const FEED_TITLE: &str = "Leul.dev Articles";
pub const FEED_DESCRIPTION: &str =
    "Insights, tutorials, and thoughts on web development, software engineering, and the tech industry.";

fn item(article: &Article, config: &SiteConfig) -> Item {
    // Articles have no page of their own; they open from the blog section.
    let link = config.url("#blog");
    let guid = GuidBuilder::default()
        .value(format!("{}/articles/{}", config.site_url, article.id))
        .permalink(false)
        .build();
    let pub_date = article
        .published()
        .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)).to_rfc2822());
    ItemBuilder::default()
        .title(article.title.clone())
        .description(article.description.clone())
        .author(format!("{OWNER_EMAIL} ({OWNER})"))
        .categories(vec![CategoryBuilder::default()
            .name(article.tag.clone())
            .build()])
        .pub_date(pub_date)
        .link(link)
        .guid(guid)
        .build()
}

/// Builds the feed channel. Items keep the order of `articles`.
pub fn build_channel(articles: &[Article], config: &SiteConfig) -> Channel {
    let items = articles
        .iter()
        .map(|a| item(a, config))
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(config.url("rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(FEED_TITLE)
        .description(FEED_DESCRIPTION)
        .link(config.url("#blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u32, date: &str) -> Article {
        Article {
            id,
            title: format!("Article {id}"),
            date: date.to_string(),
            tag: "Tools".to_string(),
            description: "desc".to_string(),
            image: "/img.png".to_string(),
            content: "<p>body</p>".to_string(),
        }
    }

    #[test]
    fn test_channel_items() {
        let config = SiteConfig::default();
        let channel = build_channel(
            &[article(2, "October 1, 2024"), article(1, "not a date")],
            &config,
        );
        assert_eq!(channel.title(), FEED_TITLE);
        assert_eq!(channel.link(), "https://leul.dev/#blog");
        assert_eq!(channel.items().len(), 2);

        let first = &channel.items()[0];
        assert_eq!(first.title(), Some("Article 2"));
        assert_eq!(first.link(), Some("https://leul.dev/#blog"));
        assert_eq!(
            first.guid().map(|g| g.value()),
            Some("https://leul.dev/articles/2")
        );
        let published = first
            .pub_date()
            .map(chrono::DateTime::parse_from_rfc2822)
            .expect("pub date should be set")
            .unwrap();
        assert_eq!(published.date_naive().to_string(), "2024-10-01");
        assert_eq!(first.categories()[0].name(), "Tools");
        assert_eq!(
            first.author(),
            Some("Leulseyoum103@gmail.com (Leulseyoum)")
        );

        assert_eq!(channel.items()[1].pub_date(), None);
    }

    #[test]
    fn test_atom_self_link() {
        let channel = build_channel(&[], &SiteConfig::default());
        let atom = channel.atom_ext().expect("atom extension should be set");
        assert_eq!(atom.links()[0].href(), "https://leul.dev/rss.xml");
        assert_eq!(atom.links()[0].rel(), "self");
    }
}
