use std::time::Duration;

use leptos::prelude::*;

use crate::contact::Notice;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Channel for user-facing notices. Anything can publish, `Toasts` renders.
#[derive(Debug, Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    pub fn provide() -> Self {
        let notifications = Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        };
        provide_context(notifications);
        notifications
    }

    pub fn publish(&self, notice: Notice) -> u64 {
        if notice.is_error() {
            log::warn!("notice: {}", notice.message());
        } else {
            log::info!("notice: {}", notice.message());
        }
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        // timers only exist in the browser
        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            set_timeout(move || this.dismiss(id), TOAST_LIFETIME);
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        // the owner may be gone by the time a timeout fires
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    #[cfg(test)]
    pub(super) fn showing(&self) -> Vec<Notice> {
        self.toasts.with_untracked(|toasts| toasts.iter().map(|t| t.notice).collect())
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = expect_context::<Notifications>();

    view! {
        <div
            class="fixed bottom-6 left-1/2 z-50 flex -translate-x-1/2 flex-col items-center gap-3"
            aria-live="polite"
        >
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let accent = if toast.notice.is_error() {
                        "border-red-500/40 text-red-300"
                    } else {
                        "border-green-500/40 text-green-300"
                    };
                    view! {
                        <button
                            type="button"
                            class=format!(
                                "rounded-xl border bg-zinc-950/90 px-6 py-3 text-sm font-bold tracking-wide shadow-lg backdrop-blur-xl {accent}",
                            )
                            role="status"
                            on:click=move |_| notifications.dismiss(toast.id)
                        >
                            {toast.notice.message()}
                        </button>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_dismiss() {
        let owner = Owner::new();
        owner.set();
        let notifications = Notifications::provide();

        let sent = notifications.publish(Notice::Sent);
        let failed = notifications.publish(Notice::Failed);
        assert_ne!(sent, failed);
        assert_eq!(notifications.showing(), vec![Notice::Sent, Notice::Failed]);

        notifications.dismiss(sent);
        assert_eq!(notifications.showing(), vec![Notice::Failed]);

        // dismissing twice is harmless
        notifications.dismiss(sent);
        assert_eq!(notifications.showing(), vec![Notice::Failed]);
    }

    #[test]
    fn test_dismiss_after_owner_is_gone() {
        let owner = Owner::new();
        owner.set();
        let notifications = Notifications::provide();
        let id = notifications.publish(Notice::Sent);
        owner.cleanup();
        notifications.dismiss(id);
    }
}
