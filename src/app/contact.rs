use leptos::{either::Either, ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use super::{components::PageHeading, toast::use_notifier};
use crate::{
    contact::{
        delivery_notification, simulate_delivery, ContactForm, Field, SubmitOutcome,
        SUBMIT_DELAY,
    },
    site::SITE,
};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="pt-32 pb-20 px-4">
            <div class="container max-w-7xl mx-auto">
                <PageHeading
                    title="Contact"
                    subtitle="Have a project in mind or a question about .NET? Send me a message."
                />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <ContactInfo />
                    <div class="lg:col-span-2">
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <aside class="glass-card p-6 space-y-6">
            <div>
                <h2 class="text-xl font-bold mb-4">"Contact details"</h2>
                <ul class="space-y-3 text-gray-300">
                    <li>
                        <span class="block text-sm text-gray-400">"Email"</span>
                        <a href=format!("mailto:{}", SITE.email) class="hover:text-neon-blue">
                            {SITE.email}
                        </a>
                    </li>
                    <li>
                        <span class="block text-sm text-gray-400">"Phone"</span>
                        <a href=SITE.phone_href class="hover:text-neon-blue">
                            {SITE.phone}
                        </a>
                    </li>
                    <li>
                        <span class="block text-sm text-gray-400">"Location"</span>
                        {SITE.location}
                    </li>
                </ul>
            </div>
            <div>
                <h2 class="text-xl font-bold mb-4">"Elsewhere"</h2>
                <div class="flex flex-wrap gap-3">
                    {SITE
                        .socials
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-2 rounded-md bg-white/5 hover:bg-white/10 text-sm transition-colors"
                                >
                                    {s.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </aside>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let notifier = use_notifier();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut outcome = SubmitOutcome::Ignored;
        form.update(|f| outcome = f.submit());
        match outcome {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Rejected(notification) => notifier.notify(notification),
            SubmitOutcome::Accepted(submission) => set_timeout(
                move || {
                    let delivered = simulate_delivery(&submission);
                    let detached = delivery_notification(&delivered);
                    let settled = form.try_update(|f| match delivered {
                        Ok(()) => f.complete(),
                        Err(err) => f.fail(err),
                    });
                    // None: the page was left while the message was in flight
                    if let Some(notification) = settled.unwrap_or(Some(detached)) {
                        notifier.notify(notification);
                    }
                },
                SUBMIT_DELAY,
            ),
        }
    };

    view! {
        <form class="glass-card p-6 space-y-6" on:submit=on_submit>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField form field=Field::Name />
                <FormField form field=Field::Email />
            </div>
            <FormField form field=Field::Subject />
            <FormField form field=Field::Message />
            <button
                type="submit"
                class="w-full md:w-auto px-8 py-3 rounded-md bg-neon-blue text-black font-medium transition-all hover:shadow-neon-blue disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || form.with(ContactForm::is_busy)
            >
                {move || form.with(ContactForm::submit_label)}
            </button>
        </form>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let error = move || form.with(|f| f.error(field).map(str::to_string));
    let value = move || form.with(|f| f.value(field).to_string());
    let class = move || {
        if form.with(|f| f.errors().contains(field)) {
            "w-full px-4 py-3 rounded-md bg-white/5 border border-red-500 focus:outline-none"
        } else {
            "w-full px-4 py-3 rounded-md bg-white/5 border border-white/10 focus:outline-none focus:border-neon-blue transition-colors"
        }
    };
    let on_input =
        move |ev: leptos::ev::Event| form.update(|f| f.edit(field, event_target_value(&ev)));

    let control = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="6"
                placeholder=field.placeholder()
                class=class
                prop:value=value
                on:input=on_input
            ></textarea>
        }),
        _ => Either::Right(view! {
            <input
                type="text"
                id=field.id()
                name=field.id()
                inputmode=if field == Field::Email { "email" } else { "text" }
                placeholder=field.placeholder()
                class=class
                prop:value=value
                on:input=on_input
            />
        }),
    };

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium mb-2">
                {field.label()}
            </label>
            {control}
            <Show when=move || error().is_some()>
                <p class="mt-1 text-sm text-red-400">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
