use std::{cell::Cell, rc::Rc};

use leptos::{html::Div, leptos_dom::helpers::IntervalHandle, prelude::*};
use leptos_use::use_element_visibility;

use crate::profile::{CounterAnimation, Metric, COUNTER_FRAME, METRICS};

#[component]
pub fn Metrics() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="container max-w-7xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"In numbers"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {METRICS.iter().map(|metric| view! { <MetricCard metric /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn MetricCard(metric: &'static Metric) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let visible = use_element_visibility(node_ref);
    let (value, set_value) = signal(0u32);
    let started = StoredValue::new(false);
    let animation = CounterAnimation::new(metric.value);

    Effect::new(move |_| {
        if visible.get() && !started.get_value() {
            started.set_value(true);
            run_counter(animation, set_value);
        }
    });

    view! {
        <div node_ref=node_ref class="glass-card p-6 text-center">
            <div class=format!("w-12 h-12 mx-auto rounded-lg mb-4 {}", metric.swatch)></div>
            <div class="text-4xl font-bold font-mono neon-text-blue mb-2">
                {move || value.get()}
                {metric.suffix}
            </div>
            <h3 class="text-lg font-medium mb-1">{metric.label}</h3>
            <p class="text-sm text-gray-400">{metric.description}</p>
        </div>
    }
}

/// Ticks `set_value` towards the target once per frame, stopping itself at the end.
fn run_counter(animation: CounterAnimation, set_value: WriteSignal<u32>) {
    let frames = Cell::new(0u32);
    let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::default();
    let tick = {
        let handle = Rc::clone(&handle);
        move || {
            frames.set(frames.get() + 1);
            let elapsed = COUNTER_FRAME * frames.get();
            set_value.set(animation.value_at(elapsed));
            if animation.is_done(elapsed) {
                if let Some(h) = handle.take() {
                    h.clear();
                }
            }
        }
    };
    match set_interval_with_handle(tick, COUNTER_FRAME) {
        Ok(h) => handle.set(Some(h)),
        Err(e) => {
            log::warn!("couldn't start counter animation: {e:?}");
            set_value.set(animation.target);
        }
    }
}
