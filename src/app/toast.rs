use std::time::Duration;

use leptos::prelude::*;

use crate::notify::{Notification, NotificationKind, Notifications, Toast};

const TOAST_TTL: Duration = Duration::from_secs(4);

/// Handle to the page-wide notification queue.
#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<Notifications>);

impl Notifier {
    pub fn provide() -> Self {
        let notifier = Self(RwSignal::new(Notifications::new()));
        provide_context(notifier);
        notifier
    }

    pub fn notify(&self, notification: Notification) {
        let queue = self.0;
        let mut id = 0;
        queue.update(|q| id = q.push(notification));
        set_timeout(
            move || {
                queue.update(|q| {
                    q.dismiss(id);
                })
            },
            TOAST_TTL,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|q| {
            q.dismiss(id);
        });
    }

    fn toasts(&self) -> Vec<Toast> {
        self.0.with(|q| q.items().to_vec())
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "border-neon-green/40 text-neon-green",
        NotificationKind::Error => "border-red-500/40 text-red-400",
        NotificationKind::Info => "border-neon-blue/40 text-neon-blue",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80" aria-live="polite">
            {move || {
                notifier
                    .toasts()
                    .into_iter()
                    .map(|toast| {
                        let Toast { id, notification } = toast;
                        view! {
                            <div class=format!(
                                "flex items-start gap-3 p-4 rounded-lg border bg-black/90 backdrop-blur-md shadow-lg animate-fade-in {}",
                                kind_class(notification.kind),
                            )>
                                <span class="font-bold">{notification.kind.icon()}</span>
                                <p class="flex-1 text-sm text-white">{notification.message}</p>
                                <button
                                    class="text-gray-400 hover:text-white"
                                    aria-label="Dismiss"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
