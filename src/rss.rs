use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::blog::PostMeta;
use crate::site::SITE;

pub const FEED_PATH: &str = "/rss.xml";

pub fn build_channel(posts: Vec<PostMeta>) -> Channel {
    let items = posts
        .into_iter()
        .map(|p| {
            let link = SITE.url(&p.href());
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(p.title)
                .description(p.excerpt)
                .author(format!("{} ({})", SITE.email, p.author))
                .categories(
                    p.tags
                        .into_iter()
                        .map(|t| rss::Category {
                            name: t,
                            domain: None,
                        })
                        .collect::<Vec<_>>(),
                )
                .pub_date(p.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(SITE.url(FEED_PATH));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(SITE.blog_title)
        .description(SITE.blog_description)
        .link(SITE.url("/blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::get_meta;

    #[test]
    fn test_channel_lists_every_post() {
        let posts = get_meta().expect("embedded posts should parse");
        let count = posts.len();
        let channel = build_channel(posts);
        assert_eq!(channel.items().len(), count);
        assert_eq!(channel.link(), "https://ivanpetrov.dev/blog");
        let first = &channel.items()[0];
        assert!(first
            .link()
            .is_some_and(|l| l.starts_with("https://ivanpetrov.dev/blog/")));
        assert!(!first.categories().is_empty());
    }
}
