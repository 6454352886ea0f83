mod blog;
mod components;
mod contact;
mod homepage;
mod metrics;
mod navbar;
mod portfolio;
mod resume;
mod tech_stack;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::SITE;
use blog::{BlogHome, BlogPage, BlogWrapper};
use contact::ContactPage;
use homepage::HomePage;
use navbar::Navbar;
use portfolio::PortfolioPage;
use resume::ResumePage;
use toast::{Notifier, Toaster};

pub use toast::use_notifier;

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title=SITE.blog_title
                    href="/rss.xml"
                />
                <MetaTags />
            </head>
            <body class="bg-dark text-white font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    Notifier::provide();

    view! {
        <Title formatter=|title| format!("{title} | {}", SITE.owner) />

        <Router>
            <div class="particles-background" aria-hidden="true"></div>
            <Navbar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <ParentRoute path=path!("/blog") view=BlogWrapper>
                        <Route path=path!("") view=BlogHome />
                        <Route path=path!(":slug") view=BlogPage />
                    </ParentRoute>
                    <Route path=path!("/resume") view=ResumePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
            <Toaster />
        </Router>
    }
}

/// Marks the server response as 404. No-op in the browser.
pub fn set_not_found_status() {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    set_not_found_status();
    view! {
        <Title text="Page not found" />
        <div class="pt-32 pb-20 text-center px-4">
            <h1 class="text-5xl font-bold font-mono neon-text-blue mb-4">"404"</h1>
            <p class="text-xl text-gray-300 mb-8">"Page not found."</p>
            <A href="/" attr:class="text-neon-blue hover:underline">
                "Back to the home page"
            </A>
        </div>
    }
}

fn build_year() -> &'static str {
    BUILD_TIME.split('-').next().unwrap_or_default()
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 py-8 mt-auto">
            <div class="container max-w-7xl mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-gray-400">
                <p>{format!("© {} {}. All rights reserved.", build_year(), SITE.owner)}</p>
                <div class="flex gap-4">
                    {SITE
                        .socials
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-neon-blue transition-colors"
                                >
                                    {s.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="/rss.xml" target="_blank" class="hover:text-neon-blue transition-colors">
                        "RSS"
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_is_numeric() {
        let year = build_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}
