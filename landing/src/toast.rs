//! Toast notifications.
//!
//! A single queue lives in context; `Toaster` renders it and
//! [`ToastContext::toast`] pushes onto it and schedules the dismissal.

use std::time::Duration;

use leptos::prelude::*;

/// Visible toasts at any one time. Newer toasts evict older ones.
pub const TOAST_LIMIT: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, newest first, dropping anything past [`TOAST_LIMIT`].
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(
            0,
            Toast {
                id,
                title: title.into(),
                description: description.into(),
            },
        );
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Remove a toast. `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle to the page's toast queue.
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
    duration: Duration,
}

impl ToastContext {
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
            duration,
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    /// Show a toast and dismiss it after the configured duration.
    pub fn toast(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self
            .queue
            .try_update(|queue| queue.push(title, description))
            .unwrap_or_default();
        tracing::debug!(id, "toast shown");

        let queue = self.queue;
        set_timeout(
            move || {
                queue.update(|queue| {
                    queue.dismiss(id);
                });
            },
            self.duration,
        );
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

/// Toast handle provided by `App`.
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toast();
    let queue = toasts.queue();

    view! {
        <ol class="toast-viewport" data-testid="toast-viewport">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <li class="toast" role="status" data-testid="toast">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title}</div>
                                <div class="toast-description">{toast.description}</div>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Close"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_increase_from_one() {
        let mut queue = ToastQueue::new();
        assert_eq!(queue.push("a", "first"), 1);
        assert_eq!(queue.push("b", "second"), 2);
    }

    #[test]
    fn newest_toast_evicts_older_ones() {
        let mut queue = ToastQueue::new();
        queue.push("Message sent!", "one");
        queue.push("Message sent!", "two");
        assert_eq!(queue.len(), TOAST_LIMIT);
        assert_eq!(queue.toasts()[0].description, "two");
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::new();
        let id = queue.push("Message sent!", "Thanks");
        assert!(!queue.dismiss(id + 1));
        assert_eq!(queue.len(), 1);
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast() {
        let mut queue = ToastQueue::new();
        let first = queue.push("a", "a");
        let second = queue.push("b", "b");
        // the first toast's timer fires after it was already evicted
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts()[0].id, second);
    }
}
