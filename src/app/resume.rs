use leptos::prelude::*;
use leptos_meta::Title;

use super::{components::Badge, toast::use_notifier};
use crate::{
    notify::Notification,
    profile::{EducationItem, TimelineItem, CAREER, EDUCATION, INTERESTS, SKILLS, SPOKEN_LANGUAGES},
    site::SITE,
};

const PDF_UNAVAILABLE: &str = "PDF export is not available yet";

#[component]
pub fn ResumePage() -> impl IntoView {
    let notifier = use_notifier();
    view! {
        <Title text="Résumé" />
        <div class="pt-32 pb-20 px-4">
            <div class="container max-w-5xl mx-auto">
                <div class="flex flex-col md:flex-row md:items-end justify-between gap-6 mb-12">
                    <div>
                        <h1 class="text-4xl md:text-5xl font-bold mb-4">"Résumé"</h1>
                        <p class="text-xl text-gray-300">{SITE.role}</p>
                    </div>
                    <button
                        class="px-6 py-3 rounded-md border border-neon-blue text-neon-blue hover:bg-neon-blue/10 transition-all"
                        on:click=move |_| notifier.notify(Notification::info(PDF_UNAVAILABLE))
                    >
                        "Download PDF"
                    </button>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <Sidebar />
                    <Experience />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="space-y-6">
            <section class="glass-card p-6">
                <h2 class="text-2xl font-bold mb-4">{SITE.owner}</h2>
                <ul class="space-y-2 text-sm text-gray-300">
                    <li>{SITE.location}</li>
                    <li>
                        <a href=format!("mailto:{}", SITE.email) class="hover:text-neon-blue">
                            {SITE.email}
                        </a>
                    </li>
                    <li>
                        <a href=SITE.phone_href class="hover:text-neon-blue">
                            {SITE.phone}
                        </a>
                    </li>
                    <li>
                        <a
                            href=SITE.base_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-neon-blue"
                        >
                            {SITE.domain}
                        </a>
                    </li>
                </ul>
            </section>
            <section class="glass-card p-6">
                <h3 class="text-lg font-bold mb-4 border-b border-white/10 pb-2">"Skills"</h3>
                <div class="space-y-4">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div>
                                    <h4 class="text-sm text-gray-400 mb-2">{group.title}</h4>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <span
                                                        class="px-2 py-1 text-xs rounded-md bg-white/5"
                                                        title=format!("{}%", s.level)
                                                    >
                                                        {s.name}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="glass-card p-6">
                <h3 class="text-lg font-bold mb-2 border-b border-white/10 pb-2">"Languages"</h3>
                <p class="text-sm text-gray-300 mb-4">{SPOKEN_LANGUAGES}</p>
                <h3 class="text-lg font-bold mb-2 border-b border-white/10 pb-2">"Interests"</h3>
                <p class="text-sm text-gray-300">{INTERESTS}</p>
            </section>
        </aside>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <div class="lg:col-span-2 space-y-10">
            <section>
                <h3 class="text-2xl font-bold mb-6">"Experience"</h3>
                <ol class="relative border-l border-neon-blue/30 space-y-8">
                    {CAREER.iter().map(|item| view! { <CareerEntry item /> }).collect_view()}
                </ol>
            </section>
            <section>
                <h3 class="text-2xl font-bold mb-6">"Education"</h3>
                <ol class="relative border-l border-neon-green/30 space-y-6">
                    {EDUCATION.iter().map(|item| view! { <EducationEntry item /> }).collect_view()}
                </ol>
            </section>
        </div>
    }
}

#[component]
fn CareerEntry(item: &'static TimelineItem) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute -left-1.5 mt-2 w-3 h-3 rounded-full bg-neon-blue"></span>
            <div class="flex flex-wrap items-baseline justify-between gap-2 mb-1">
                <h4 class="text-lg font-bold">{item.position}</h4>
                <span class="text-sm font-mono text-gray-400">{item.period}</span>
            </div>
            <p class="text-neon-blue mb-2">{item.company}</p>
            <p class="text-gray-300 mb-3">{item.description}</p>
            <div class="flex flex-wrap gap-2">
                {item.technologies.iter().map(|t| view! { <Badge text=*t /> }).collect_view()}
            </div>
        </li>
    }
}

#[component]
fn EducationEntry(item: &'static EducationItem) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute -left-1.5 mt-2 w-3 h-3 rounded-full bg-neon-green"></span>
            <span class="text-sm font-mono text-gray-400">{item.period}</span>
            <h4 class="text-lg font-bold">{item.degree}</h4>
            <p class="text-gray-300">{item.institution}</p>
        </li>
    }
}
