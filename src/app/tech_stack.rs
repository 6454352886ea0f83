use leptos::prelude::*;

use super::components::TagButton;
use crate::profile::{technologies_in, Category, Technology};

#[component]
pub fn TechStack() -> impl IntoView {
    let (category, set_category) = signal(Category::default());

    view! {
        <section class="py-20 px-4">
            <div class="container max-w-7xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-4">"Tech stack"</h2>
                <p class="text-gray-300 text-center mb-10 max-w-2xl mx-auto">
                    "Tools and technologies I use every day."
                </p>
                <div class="flex flex-wrap justify-center gap-2 mb-10">
                    {Category::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <TagButton
                                    label=c.label()
                                    active=Signal::derive(move || category.get() == c)
                                    on_select=move || set_category.set(c)
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">
                    {move || {
                        technologies_in(category.get())
                            .into_iter()
                            .map(|tech| view! { <TechCard tech /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechCard(tech: &'static Technology) -> impl IntoView {
    view! {
        <div class="glass-card p-4 flex flex-col items-center text-center animate-fade-in">
            <div class=format!(
                "w-12 h-12 rounded-lg flex items-center justify-center text-xl font-bold mb-3 {}",
                tech.swatch,
            )>{tech.initial().to_string()}</div>
            <span class="font-medium mb-2">{tech.name}</span>
            <div class="flex gap-1">
                {tech
                    .level_dots()
                    .into_iter()
                    .map(|filled| {
                        let class = if filled {
                            "w-2 h-2 rounded-full bg-neon-blue"
                        } else {
                            "w-2 h-2 rounded-full bg-white/10"
                        };
                        view! { <span class=class></span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
