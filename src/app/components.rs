use leptos::prelude::*;

/// Pill-shaped filter button used by the tag and category selectors.
#[component]
pub fn TagButton(
    #[prop(into)] label: String,
    active: Signal<bool>,
    #[prop(default = "bg-neon-blue")] active_class: &'static str,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if active.get() {
                    format!("px-4 py-2 rounded-full text-sm transition-all text-white {active_class}")
                } else {
                    "px-4 py-2 rounded-full text-sm transition-all bg-white/5 hover:bg-white/10"
                        .to_string()
                }
            }
            on:click=move |_| on_select()
        >
            {label}
        </button>
    }
}

#[component]
pub fn Badge(#[prop(into)] text: String) -> impl IntoView {
    view! { <span class="inline-block px-2 py-1 text-xs bg-white/5 rounded-md">{text}</span> }
}

#[component]
pub fn PageHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    let class = if centered { "mb-10 text-center" } else { "mb-12" };
    view! {
        <div class=class>
            <h1 class="text-4xl md:text-5xl font-bold mb-4">{title}</h1>
            <p class="text-xl text-gray-300 max-w-3xl" class:mx-auto=centered>
                {subtitle}
            </p>
        </div>
    }
}
