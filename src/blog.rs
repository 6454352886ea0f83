use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, OnceLock};
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;
use crate::filter::{contains_ignore_case, TagFilter, Tagged};

/// Rendered posts by slug. Misses are never stored, so the key set is bounded
/// by the embedded posts.
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);
pub static GLOBAL_META_CACHE: OnceLock<Vec<PostMeta>> = OnceLock::new();

pub const BLOG_TAGS: [&str; 6] = [
    "C#",
    ".NET",
    "Azure",
    "Architecture",
    "Performance",
    "Best Practices",
];

pub const NO_MATCHES_MESSAGE: &str =
    "No articles found. Try a different search term or pick another tag.";

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    excerpt: String,
    author: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl PostMeta {
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

impl Tagged for PostMeta {
    type Tag = String;

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Tag selection plus free-text search over title and excerpt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogQuery {
    pub tag: TagFilter<String>,
    pub search: String,
}

impl BlogQuery {
    pub fn matches(&self, post: &PostMeta) -> bool {
        let search = self.search.as_str();
        self.tag.admits(post.tags())
            && (contains_ignore_case(&post.title, search)
                || contains_ignore_case(&post.excerpt, search))
    }

    pub fn apply<'a>(&self, posts: &'a [PostMeta]) -> Vec<&'a PostMeta> {
        posts.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse blog post {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub content: String,
}

fn slug_of(file_name: &str) -> &str {
    file_name.strip_suffix(".md").unwrap_or(file_name)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn read_asset(file_name: &str) -> Result<String, BlogError> {
    let content = Assets::get(file_name).ok_or(BlogError::NotFound)?;
    String::from_utf8(content.data.into()).map_err(|_| BlogError::ParseError(file_name.to_string()))
}

/// Splits a post into metadata and its Markdown body.
#[cfg(any(feature = "ssr", feature = "rss"))]
fn parse_post(file_name: &str, content: &str) -> Result<(PostMeta, String), BlogError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| BlogError::ParseError(file_name.to_string()))?;
    let fm = parsed.data;
    let meta = PostMeta {
        slug: slug_of(file_name).to_string(),
        title: fm.title,
        excerpt: fm.excerpt,
        author: fm.author,
        date: fm.date,
        tags: fm.tags,
        image: fm.image,
    };
    Ok((meta, parsed.content))
}

/// All posts, newest first. Ties fall back to slug order so the listing is
/// stable.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn get_meta() -> Result<Vec<PostMeta>, BlogError> {
    if let Some(posts) = GLOBAL_META_CACHE.get() {
        return Ok(posts.clone());
    }
    let mut posts = Assets::iter()
        .filter(|s| s.ends_with(".md"))
        .map(|s| {
            let content = read_asset(&s)?;
            parse_post(&s, &content).map(|(meta, _)| meta)
        })
        .collect::<Result<Vec<PostMeta>, BlogError>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    let _ = GLOBAL_META_CACHE.set(posts.clone());
    Ok(posts)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn render_post(slug: &str) -> Result<Post, BlogError> {
    let file_name = format!("{slug}.md");
    let content = read_asset(&file_name)?;
    let (meta, body) = parse_post(&file_name, &content)?;

    let parser = Parser::new_ext(&body, Options::all());
    let parser = highlight(parser);

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    Ok(Post {
        meta,
        content: html_output,
    })
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn get_post(slug: &str) -> Result<Post, BlogError> {
    let cache = &*GLOBAL_POST_CACHE;
    if let Some(post) = cache.get(slug) {
        return Ok(post.value().clone());
    }
    match render_post(slug) {
        Ok(post) => {
            cache.insert(slug.to_string(), post.clone());
            Ok(post)
        }
        Err(BlogError::NotFound) => Err(BlogError::NotFound),
        Err(err) => {
            log::warn!("{err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta(slug: &str, title: &str, excerpt: &str, tags: &[&str]) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            author: "Ivan Petrov".to_string(),
            date: Utc.with_ymd_and_hms(2023, 5, 15, 0, 0, 0).unwrap(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            image: None,
        }
    }

    fn sample() -> Vec<PostMeta> {
        vec![
            meta(
                "perf",
                "Optimizing ASP.NET Core performance",
                "Ways to speed up web apps",
                &["C#", ".NET", "Performance"],
            ),
            meta(
                "micro",
                "Microservices on .NET",
                "A practical guide to scalable services",
                &[".NET", "Architecture"],
            ),
            meta(
                "cicd",
                "Deploying to Azure with CI/CD",
                "Continuous delivery for .NET apps",
                &[".NET", "Azure"],
            ),
        ]
    }

    fn slugs(posts: &[&PostMeta]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_default_query_matches_all() {
        let posts = sample();
        assert_eq!(
            slugs(&BlogQuery::default().apply(&posts)),
            vec!["perf", "micro", "cicd"]
        );
    }

    #[test]
    fn test_tag_and_search_combine() {
        let posts = sample();
        let query = BlogQuery {
            tag: TagFilter::Only(".NET".to_string()),
            search: "SCALABLE".to_string(),
        };
        assert_eq!(slugs(&query.apply(&posts)), vec!["micro"]);
    }

    #[test]
    fn test_search_hits_title_or_excerpt() {
        let posts = sample();
        let by_title = BlogQuery {
            search: "azure".to_string(),
            ..Default::default()
        };
        assert_eq!(slugs(&by_title.apply(&posts)), vec!["cicd"]);
        let by_excerpt = BlogQuery {
            search: "web apps".to_string(),
            ..Default::default()
        };
        assert_eq!(slugs(&by_excerpt.apply(&posts)), vec!["perf"]);
    }

    #[test]
    fn test_search_term_is_matched_verbatim() {
        let posts = sample();
        let exact = BlogQuery {
            search: "scalable services".to_string(),
            ..Default::default()
        };
        assert_eq!(slugs(&exact.apply(&posts)), vec!["micro"]);
        let padded = BlogQuery {
            search: "scalable services ".to_string(),
            ..Default::default()
        };
        assert!(padded.apply(&posts).is_empty());
    }

    #[test]
    fn test_unmatched_tag_is_empty() {
        let posts = sample();
        let query = BlogQuery {
            tag: TagFilter::Only("Best Practices".to_string()),
            search: String::new(),
        };
        assert!(query.apply(&posts).is_empty());
    }

    #[test]
    fn test_display_date_and_href() {
        let post = meta("perf", "t", "e", &[]);
        assert_eq!(post.display_date(), "May 15, 2023");
        assert_eq!(post.href(), "/blog/perf");
    }

    #[test]
    fn test_slug_of() {
        assert_eq!(slug_of("entity-framework-core-tips.md"), "entity-framework-core-tips");
        assert_eq!(slug_of("README"), "README");
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_parse_post_front_matter() {
        let content = "---\ntitle: Hello\nexcerpt: Short intro\nauthor: Ivan Petrov\ndate: 2023-03-17T00:00:00Z\ntags: [\"C#\", \".NET\"]\n---\n# Body\n";
        let (meta, body) = parse_post("hello.md", content).expect("should parse");
        assert_eq!(meta.slug, "hello");
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.tags, vec!["C#", ".NET"]);
        assert!(meta.image.is_none());
        assert!(body.contains("# Body"));
        assert!(!body.contains("title:"));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_embedded_posts_newest_first() {
        let posts = get_meta().expect("embedded posts should parse");
        assert_eq!(posts.len(), 5);
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));
        for post in &posts {
            assert!(post
                .tags
                .iter()
                .all(|t| BLOG_TAGS.contains(&t.as_str())));
        }
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_get_post_renders_and_caches() {
        let post = get_post("entity-framework-core-tips").expect("post should exist");
        assert!(post.content.contains("<h2"));
        assert!(GLOBAL_POST_CACHE.contains_key("entity-framework-core-tips"));
        assert_eq!(get_post("no-such-post"), Err(BlogError::NotFound));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_unknown_slugs_are_not_cached() {
        for i in 0..100 {
            let slug = format!("missing-post-{i}");
            assert_eq!(get_post(&slug), Err(BlogError::NotFound));
            assert!(!GLOBAL_POST_CACHE.contains_key(&slug));
        }
        assert!(GLOBAL_POST_CACHE.iter().all(|e| !e.key().starts_with("missing-post-")));
    }
}
