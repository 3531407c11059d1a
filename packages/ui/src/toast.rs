//! Transient notifications.
//!
//! [`ToastProvider`] owns the list, [`push_toast`] adds to it, and [`Toaster`]
//! renders whatever is currently showing. Each toast removes itself after
//! [`TOAST_LIFETIME`], even when the view that pushed it has been unmounted.

use std::time::Duration;

use api::{Notice, NoticeLevel};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Add a notice and return the id of its toast.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast { id, notice });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a notice and schedule its removal.
///
/// The removal task runs in the root scope: callers usually navigate away
/// right after pushing, which would cancel a task owned by their page.
pub fn push_toast(toasts: &mut Signal<Toasts>, notice: Notice) {
    let id = toasts.write().push(notice);
    let mut toasts = *toasts;
    spawn_forever(async move {
        sleep(TOAST_LIFETIME).await;
        toasts.write().dismiss(id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
    }
}

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 flex flex-col gap-2 z-50",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.notice.level {
                        NoticeLevel::Success => "toast success px-4 py-3 rounded shadow bg-white text-green-700",
                        NoticeLevel::Error => "toast error px-4 py-3 rounded shadow bg-white text-red-700",
                    },
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.notice.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    thread_local! {
        static SHOWN: Cell<usize> = const { Cell::new(0) };
        static MOST_SHOWN: Cell<usize> = const { Cell::new(0) };
    }

    fn app() -> Element {
        rsx! {
            ToastProvider {
                Page {}
            }
        }
    }

    /// Mounts `Notifier` and unmounts it shortly after, like a page that
    /// navigates away once it has pushed a toast.
    #[component]
    fn Page() -> Element {
        let mut notifier_mounted = use_signal(|| true);
        let toasts = use_toasts();

        let shown = toasts.read().entries.len();
        SHOWN.with(|c| c.set(shown));
        MOST_SHOWN.with(|c| c.set(c.get().max(shown)));

        use_hook(move || {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                notifier_mounted.set(false);
            })
        });

        rsx! {
            if notifier_mounted() {
                Notifier {}
            }
        }
    }

    #[component]
    fn Notifier() -> Element {
        let mut toasts = use_toasts();
        use_effect(move || push_toast(&mut toasts, Notice::success("Account created successfully!")));
        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_pushing_view_unmounts() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let deadline = tokio::time::Instant::now() + TOAST_LIFETIME + Duration::from_secs(2);
        loop {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep_until(deadline) => break,
            }
            dom.render_immediate(&mut NoOpMutations);
        }

        assert_eq!(MOST_SHOWN.with(Cell::get), 1);
        assert_eq!(SHOWN.with(Cell::get), 0);
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(Notice::success("one"));
        let b = toasts.push(Notice::error("two"));
        assert!(b > a);
        assert_eq!(toasts.entries.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let a = toasts.push(Notice::success("one"));
        toasts.push(Notice::error("two"));

        toasts.dismiss(a);

        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].notice.message, "two");

        // Unknown ids are ignored.
        toasts.dismiss(99);
        assert_eq!(toasts.entries.len(), 1);
    }
}
