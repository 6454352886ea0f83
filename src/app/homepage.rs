use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{components::Badge, metrics::Metrics, tech_stack::TechStack};
use crate::site::SITE;

const HERO_BADGES: [&str; 5] = ["C#", ".NET 8", "ASP.NET Core", "Azure", "Microservices"];

const HERO_SNIPPET: &str = r#"public class Developer
{
    public string Name => "Ivan Petrov";
    public string[] Stack => new[] { "C#", ".NET", "Azure" };

    public async Task<Solution> SolveAsync(Problem problem)
    {
        var design = await Architect(problem);
        return await Deliver(design);
    }
}"#;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <TechStack />
        <Metrics />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center pt-24 pb-16 px-4">
            <div class="container max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="animate-fade-in">
                    <span class="inline-block px-3 py-1 mb-6 text-sm rounded-full bg-neon-blue/10 text-neon-blue border border-neon-blue/30">
                        {SITE.role}
                    </span>
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 leading-tight">
                        "Building reliable "
                        <span class="neon-text-blue">".NET"</span>
                        " systems that "
                        <span class="neon-text-green">"scale"</span>
                    </h1>
                    <p class="text-xl text-gray-300 mb-8 max-w-xl">
                        "I'm " {SITE.owner}
                        ". I design and build high-load web services, cloud-native architectures and developer tooling in C#."
                    </p>
                    <div class="flex flex-wrap gap-4 mb-8">
                        <A
                            href="/portfolio"
                            attr:class="px-6 py-3 rounded-md bg-neon-blue text-black font-medium hover:shadow-neon-blue transition-all"
                        >
                            "View projects"
                        </A>
                        <A
                            href="/contact"
                            attr:class="px-6 py-3 rounded-md border border-neon-blue text-neon-blue hover:bg-neon-blue/10 transition-all"
                        >
                            "Get in touch"
                        </A>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {HERO_BADGES.into_iter().map(|b| view! { <Badge text=b /> }).collect_view()}
                    </div>
                </div>
                <div class="hidden lg:block animate-float">
                    <pre class="code-block text-sm">
                        <code>{HERO_SNIPPET}</code>
                    </pre>
                </div>
            </div>
        </section>
    }
}
