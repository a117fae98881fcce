use std::fs::File;

use portfolio_site::articles::newest_first;
use portfolio_site::config::SiteConfig;
use portfolio_site::rss::build_channel;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env()?;
    let articles = newest_first()?;
    let channel = build_channel(&articles, &config);

    let file = File::create(&config.feed_path)?;
    channel.pretty_write_to(file, b' ', 2)?;
    println!(
        "wrote {} articles to {}",
        articles.len(),
        config.feed_path.display()
    );
    Ok(())
}
