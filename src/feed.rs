//! RSS feed generation.
//!
//! Emits a minimal RSS 2.0 document: a fixed channel (title, link,
//! description from `[site]` config) with one item per page summary
//! carrying title and link only - no guid, pubDate or description. Items
//! mirror search-index order.
//!
//! Built with the [rss](https://docs.rs/rss) crate, which escapes reserved
//! XML characters; titles containing `&`, `<` or `>` produce well-formed
//! documents instead of corrupting the feed.

use crate::config::SiteInfo;
use crate::types::PageSummary;
use rss::{ChannelBuilder, Item, ItemBuilder};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the feed document for the given summaries.
pub fn render(summaries: &[PageSummary], site: &SiteInfo) -> String {
    let items: Vec<Item> = summaries
        .iter()
        .map(|summary| {
            ItemBuilder::default()
                .title(Some(summary.title.clone()))
                .link(Some(summary.url.clone()))
                .build()
        })
        .collect();

    let channel = ChannelBuilder::default()
        .title(&site.title)
        .link(&site.link)
        .description(&site.description)
        .items(items)
        .build();

    channel.to_string()
}

/// Write the feed to `path`, overwriting any existing file.
pub fn write_feed(
    summaries: &[PageSummary],
    site: &SiteInfo,
    path: &Path,
) -> Result<(), FeedError> {
    fs::write(path, render(summaries, site))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str, url: &str) -> PageSummary {
        PageSummary {
            title: title.to_string(),
            url: url.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn one_item_per_summary() {
        let summaries = vec![summary("Intro", "intro.html"), summary("Setup", "guide/setup.html")];
        let xml = render(&summaries, &SiteInfo::default());

        assert_eq!(xml.matches("<item>").count(), 2);
        assert!(xml.contains("<title>Intro</title>"));
        assert!(xml.contains("<link>guide/setup.html</link>"));
    }

    #[test]
    fn channel_metadata_from_config() {
        let site = SiteInfo {
            title: "My Docs".to_string(),
            link: "https://docs.example.com/".to_string(),
            description: "Docs updates".to_string(),
        };
        let xml = render(&[], &site);

        assert!(xml.contains("<title>My Docs</title>"));
        assert!(xml.contains("<link>https://docs.example.com/</link>"));
        assert!(xml.contains("<description>Docs updates</description>"));
        assert!(xml.contains("<rss version=\"2.0\""));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let summaries = vec![summary("Tips & <Tricks>", "tips.html")];
        let xml = render(&summaries, &SiteInfo::default());

        assert!(!xml.contains("Tips & <Tricks>"));
        assert!(xml.contains("&amp;"));
    }

    #[test]
    fn items_have_no_dates_or_guids() {
        let summaries = vec![summary("Intro", "intro.html")];
        let xml = render(&summaries, &SiteInfo::default());

        assert!(!xml.contains("<pubDate>"));
        assert!(!xml.contains("<guid"));
    }

    #[test]
    fn items_follow_summary_order() {
        let summaries = vec![summary("Later", "z.html"), summary("Earlier", "a.html")];
        let xml = render(&summaries, &SiteInfo::default());

        assert!(xml.find("z.html").unwrap() < xml.find("a.html").unwrap());
    }
}
