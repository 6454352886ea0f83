use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

use super::{
    components::{Badge, PageHeading, TagButton},
    set_not_found_status,
};
#[cfg(feature = "ssr")]
use crate::blog::{get_meta, get_post};
use crate::{
    blog::{
        BlogQuery, Post, PostMeta, BLOG_TAGS, GLOBAL_META_CACHE, GLOBAL_POST_CACHE,
        NO_MATCHES_MESSAGE,
    },
    filter::TagFilter,
};

#[component]
pub fn BlogWrapper() -> impl IntoView {
    view! {
        <div class="pt-32 pb-20 px-4">
            <div class="container max-w-7xl mx-auto">
                <Outlet />
            </div>
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn get_posts_server() -> Result<Vec<PostMeta>, ServerFnError> {
    get_meta().map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let query_map = use_query_map();
    let query = RwSignal::new(BlogQuery {
        search: query_map.with_untracked(|q| q.get("q").unwrap_or_default()),
        ..Default::default()
    });

    // the navbar can submit a new term while this page is mounted
    Effect::watch(
        move || query_map.with(|q| q.get("q")),
        move |term, _, _| {
            if let Some(term) = term {
                query.update(|q| q.search = term.clone());
            }
        },
        false,
    );

    let posts = Resource::new(
        || (),
        |_| async move {
            if let Some(posts) = GLOBAL_META_CACHE.get() {
                return posts.clone();
            }
            let posts = get_posts_server().await.unwrap_or_else(|e| {
                log::error!("couldn't load posts: {e}");
                Vec::new()
            });
            // the server side fills this cache itself
            #[cfg(feature = "hydrate")]
            if !posts.is_empty() {
                let _ = GLOBAL_META_CACHE.set(posts.clone());
            }
            posts
        },
    );

    view! {
        <Title text="Blog" />
        <PageHeading
            title="Blog"
            subtitle="Articles on .NET, C#, cloud architecture and performance."
            centered=true
        />
        <div class="flex flex-col md:flex-row gap-6 mb-10 items-center justify-between">
            <div class="flex flex-wrap gap-2">
                <TagButton
                    label="All articles"
                    active=Signal::derive(move || query.with(|q| q.tag == TagFilter::All))
                    on_select=move || query.update(|q| q.tag = TagFilter::All)
                />
                {BLOG_TAGS
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <TagButton
                                label=tag
                                active=Signal::derive(move || {
                                    query.with(|q| q.tag.is_selected(&tag.to_string()))
                                })
                                on_select=move || {
                                    query.update(|q| q.tag = TagFilter::Only(tag.to_string()))
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <input
                type="search"
                placeholder="Search articles..."
                class="w-full md:w-72 px-4 py-2 rounded-full bg-white/5 border border-white/10 focus:outline-none focus:border-neon-blue transition-colors"
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
            />
        </div>
        <Transition fallback=move || {
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <div class="glass-card h-64 animate-pulse"></div>
                    <div class="glass-card h-64 animate-pulse"></div>
                    <div class="glass-card h-64 animate-pulse"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let posts = posts.await;
                view! { <PostGrid posts query=query.into() /> }
            })}
        </Transition>
    }
}

#[component]
fn PostGrid(posts: Vec<PostMeta>, query: Signal<BlogQuery>) -> impl IntoView {
    move || {
        let visible = query.with(|q| q.apply(&posts).into_iter().cloned().collect::<Vec<_>>());
        if visible.is_empty() {
            Either::Left(
                view! { <p class="text-center text-gray-400 py-20">{NO_MATCHES_MESSAGE}</p> },
            )
        } else {
            Either::Right(view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {visible.into_iter().map(|post| view! { <PostCard post /> }).collect_view()}
                </div>
            })
        }
    }
}

#[component]
fn PostCard(post: PostMeta) -> impl IntoView {
    let href = post.href();
    let date = post.display_date();
    view! {
        <article class="glass-card overflow-hidden flex flex-col animate-fade-in">
            {post
                .image
                .map(|src| {
                    view! {
                        <img src=src alt=post.title.clone() class="w-full h-48 object-cover" />
                    }
                })}
            <div class="p-6 flex flex-col flex-1">
                <div class="flex items-center justify-between text-sm text-gray-400 mb-3">
                    <span>{date}</span>
                    <span>{post.author}</span>
                </div>
                <h2 class="text-xl font-bold mb-3">
                    <A href=href.clone() attr:class="hover:text-neon-blue transition-colors">
                        {post.title}
                    </A>
                </h2>
                <p class="text-gray-300 mb-4 flex-1">{post.excerpt}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {post.tags.into_iter().map(|tag| view! { <Badge text=tag /> }).collect_view()}
                </div>
                <A href=href attr:class="text-neon-blue hover:underline text-sm">
                    "Read more →"
                </A>
            </div>
        </article>
    }
}

#[server(input = GetUrl)]
pub async fn get_post_server(slug: String) -> Result<Post, ServerFnError> {
    get_post(&slug).map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());
    let post = Resource::new(slug, |slug| async move {
        let cache = &*GLOBAL_POST_CACHE;
        if let Some(post) = cache.get(&slug) {
            return Some(post.value().clone());
        }
        let post = get_post_server(slug.clone()).await.ok();
        if let Some(post) = &post {
            cache.insert(slug, post.clone());
        }
        post
    });

    view! {
        <Suspense fallback=|| view! { <div class="glass-card h-96 animate-pulse"></div> }>
            {move || Suspend::new(async move {
                match post.await {
                    Some(post) => Either::Left(view! { <Article post /> }),
                    None => Either::Right(view! { <ArticleNotFound /> }),
                }
            })}
        </Suspense>
    }
}

#[component]
fn Article(post: Post) -> impl IntoView {
    let Post { meta, content } = post;
    let date = meta.display_date();
    view! {
        <Title text=meta.title.clone() />
        <article class="max-w-3xl mx-auto animate-fade-in">
            <A href="/blog" attr:class="text-neon-blue hover:underline text-sm">
                "← All articles"
            </A>
            <h1 class="text-4xl md:text-5xl font-bold mt-6 mb-4">{meta.title}</h1>
            <div class="flex flex-wrap items-center gap-4 text-sm text-gray-400 mb-8">
                <span>{meta.author}</span>
                <span>{date}</span>
                <div class="flex flex-wrap gap-2">
                    {meta.tags.into_iter().map(|tag| view! { <Badge text=tag /> }).collect_view()}
                </div>
            </div>
            <div class="prose prose-invert max-w-none" inner_html=content></div>
        </article>
    }
}

#[component]
fn ArticleNotFound() -> impl IntoView {
    set_not_found_status();
    view! {
        <Title text="Article not found" />
        <div class="text-center py-20">
            <h1 class="text-3xl font-bold mb-4">"Article not found"</h1>
            <A href="/blog" attr:class="text-neon-blue hover:underline">
                "Back to the blog"
            </A>
        </div>
    }
}
