use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Badge, PageHeading, TagButton};
use crate::{
    filter::TagFilter,
    portfolio::{filter_projects, Project, ProjectTag},
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (filter, set_filter) = signal(TagFilter::<ProjectTag>::All);

    view! {
        <Title text="Portfolio" />
        <div class="pt-32 pb-20 px-4">
            <div class="container max-w-7xl mx-auto">
                <PageHeading
                    title="Portfolio"
                    subtitle="Selected projects: production systems, libraries and tools built with C# and .NET."
                />
                <div class="flex flex-wrap gap-2 mb-10">
                    <TagButton
                        label="All projects"
                        active=Signal::derive(move || filter.get() == TagFilter::All)
                        on_select=move || set_filter.set(TagFilter::All)
                    />
                    {ProjectTag::ALL
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <TagButton
                                    label=tag.label()
                                    active=Signal::derive(move || filter.with(|f| f.is_selected(&tag)))
                                    on_select=move || set_filter.set(TagFilter::Only(tag))
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter
                            .with(filter_projects)
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="glass-card overflow-hidden flex flex-col animate-fade-in">
            <img src=project.image alt=project.title class="w-full h-48 object-cover" />
            <div class="p-6 flex flex-col flex-1">
                <h2 class="text-xl font-bold mb-3">{project.title}</h2>
                <p class="text-gray-300 mb-4 flex-1">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project.tags.iter().map(|t| view! { <Badge text=t.label() /> }).collect_view()}
                </div>
                <div class="flex gap-4 text-sm">
                    {project
                        .link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-neon-blue hover:underline"
                                >
                                    "Live demo"
                                </a>
                            }
                        })}
                    {project
                        .github_link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-300 hover:text-white"
                                >
                                    "Source code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
