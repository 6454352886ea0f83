use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    components::*,
    hooks::{use_location, use_navigate},
    NavigateOptions,
};
use leptos_use::use_window_scroll;

use crate::nav::{is_active, search_href, NavState, EXTRA_NAV, MAIN_NAV};

#[component]
pub fn Navbar() -> impl IntoView {
    let state = RwSignal::new(NavState::default());
    let (search, set_search) = signal(String::new());
    let pathname = use_location().pathname;
    let navigate = StoredValue::new_local(use_navigate());

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        state.update(|s| s.scrolled_to(y));
    });

    Effect::watch(
        move || pathname.get(),
        move |_, _, _| state.update(NavState::navigated),
        false,
    );

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let href = search_href(&search.get_untracked());
        set_search.set(String::new());
        navigate.with_value(|nav| nav(&href, NavigateOptions::default()));
    };

    let nav_link = move |label: &'static str, href: &'static str| {
        let active = move || is_active(&pathname.get(), href);
        view! {
            <A
                href=href
                attr:class=move || {
                    if active() {
                        "px-4 py-2 rounded-md relative text-neon-blue"
                    } else {
                        "px-4 py-2 rounded-md relative hover:bg-white/5"
                    }
                }
            >
                <span>{label}</span>
                <Show when=active>
                    <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-1.5 h-1.5 rounded-full bg-neon-blue animate-pulse-glow" />
                </Show>
            </A>
        }
    };

    view! {
        <header class=move || {
            if state.with(|s| s.scrolled) {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-black/80 backdrop-blur-md py-2 shadow-lg"
            } else {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="text-2xl font-mono font-bold neon-text-blue">
                        "SENIOR"
                        <span class="text-white">".CS"</span>
                    </A>

                    <nav class="hidden md:flex items-center space-x-1">
                        {MAIN_NAV.iter().map(|item| nav_link(item.label, item.href)).collect_view()}
                        <div class="relative">
                            <button
                                class="px-4 py-2 rounded-md flex items-center space-x-1 transition-colors hover:bg-white/5"
                                on:click=move |_| state.update(NavState::toggle_dropdown)
                            >
                                <span>"More"</span>
                                <span class="text-xs">"▾"</span>
                            </button>
                            <Show when=move || state.with(|s| s.dropdown_open)>
                                <div class="absolute top-full right-0 mt-1 w-48 bg-black/90 backdrop-blur-md rounded-md shadow-lg border border-white/10 py-1 z-50">
                                    {EXTRA_NAV
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <a
                                                    href=item.href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="block px-4 py-2 text-sm hover:bg-white/5"
                                                    on:click=move |_| state.update(NavState::toggle_dropdown)
                                                >
                                                    {item.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    </nav>

                    <form class="hidden md:block relative" on:submit=on_search>
                        <div class=move || {
                            if state.with(|s| s.search_open) {
                                "flex items-center transition-all duration-200 bg-white/10 rounded-full pl-3 pr-1"
                            } else {
                                "flex items-center transition-all duration-200"
                            }
                        }>
                            <input
                                type="text"
                                placeholder="Search..."
                                prop:value=move || search.get()
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                                class=move || {
                                    if state.with(|s| s.search_open) {
                                        "bg-transparent outline-none text-sm transition-all duration-200 w-48 opacity-100"
                                    } else {
                                        "bg-transparent outline-none text-sm transition-all duration-200 w-0 opacity-0"
                                    }
                                }
                            />
                            <button
                                type="button"
                                class="p-2 rounded-full hover:bg-white/5"
                                aria-label="Search"
                                on:click=move |_| state.update(NavState::toggle_search)
                            >
                                "⌕"
                            </button>
                        </div>
                    </form>

                    <button
                        class="md:hidden p-2"
                        aria-label="Menu"
                        on:click=move |_| state.update(NavState::toggle_menu)
                    >
                        "☰"
                    </button>
                </div>

                <Show when=move || state.with(|s| s.menu_open)>
                    <div class="md:hidden py-4 border-t border-white/10 mt-2">
                        <nav class="flex flex-col space-y-1">
                            {MAIN_NAV
                                .iter()
                                .map(|item| {
                                    let href = item.href;
                                    view! {
                                        <A
                                            href=href
                                            attr:class=move || {
                                                if is_active(&pathname.get(), href) {
                                                    "px-4 py-2 rounded-md bg-neon-blue/10 text-neon-blue"
                                                } else {
                                                    "px-4 py-2 rounded-md hover:bg-white/5"
                                                }
                                            }
                                        >
                                            {item.label}
                                        </A>
                                    }
                                })
                                .collect_view()}
                            {EXTRA_NAV
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-4 py-2 rounded-md hover:bg-white/5"
                                        >
                                            {item.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <form class="px-4 py-2" on:submit=on_search>
                                <div class="flex items-center bg-white/10 rounded-full pl-3 pr-1">
                                    <input
                                        type="text"
                                        placeholder="Search..."
                                        prop:value=move || search.get()
                                        on:input=move |ev| set_search.set(event_target_value(&ev))
                                        class="bg-transparent outline-none text-sm flex-1"
                                    />
                                    <button type="submit" class="p-2 rounded-full hover:bg-white/5">
                                        "⌕"
                                    </button>
                                </div>
                            </form>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}
