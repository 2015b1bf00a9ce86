//! Toast notifications.
//!
//! Transient, dismissible feedback messages. The [`NotificationManager`] is
//! the live implementation of the core [`Notifier`] collaborator: submission
//! failures from the auth service surface here, validation errors never do.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::core::Notifier;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// How long an error toast stays up before dismissing itself
const ERROR_DISMISS_MS: u32 = 6000;

/// A single transient error message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    /// Auto-dismiss delay in milliseconds, None keeps the toast until closed
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            auto_dismiss_ms: Some(ERROR_DISMISS_MS),
        }
    }
}

/// Notification with a unique id for tracking dismissal
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Manages the queue of visible notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Signal feeding the container component
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Queue a notification, evicting the oldest past the cap
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    /// Remove a notification by id
    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|n| {
            n.retain(|item| item.id != id);
        });
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationManager {
    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

/// Provide the notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager from the component tree
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

/// Notifications container component, placed once at the app root
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                notifications.get().into_iter().map(|item| {
                    let id = item.id;
                    let notification = item.notification.clone();

                    view! {
                        <NotificationToast
                            notification=notification
                            id=id
                            notifications=notifications
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single notification toast
#[component]
fn NotificationToast(
    notification: Notification,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    // Auto-dismiss if specified
    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                notifications.update(|n| {
                    n.retain(|item| item.id != id);
                });
            });
        }
    }

    let container_class = "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg bg-red-500/10 border-red-500/30";
    let message = notification.message.clone();

    view! {
        <div class=container_class role="alert">
            <div class="text-red-400">
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                          d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
                </svg>
            </div>
            <p class="flex-1 min-w-0 text-sm text-theme-primary">{message}</p>
            <button
                class="text-theme-muted hover:text-theme-primary transition-colors"
                on:click=move |_| {
                    notifications.update(|n| {
                        n.retain(|item| item.id != id);
                    });
                }
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notification_queued_via_notifier() {
        let owner = Owner::new();
        owner.set();
        let manager = NotificationManager::new();

        Notifier::error(&manager, "Invalid credentials");

        let items = manager.notifications().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].notification.message, "Invalid credentials");
        assert!(items[0].notification.auto_dismiss_ms.is_some());
    }

    #[test]
    fn test_queue_evicts_oldest_past_cap() {
        let owner = Owner::new();
        owner.set();
        let manager = NotificationManager::new();

        for i in 0..(MAX_NOTIFICATIONS + 2) {
            manager.notify(Notification::error(format!("error {}", i)));
        }

        let items = manager.notifications().get_untracked();
        assert_eq!(items.len(), MAX_NOTIFICATIONS);
        // The two oldest were evicted
        assert_eq!(items[0].notification.message, "error 2");
    }

    #[test]
    fn test_dismiss_removes_by_id() {
        let owner = Owner::new();
        owner.set();
        let manager = NotificationManager::new();
        manager.notify(Notification::error("first"));
        manager.notify(Notification::error("second"));

        let first_id = manager.notifications().get_untracked()[0].id;
        manager.dismiss(first_id);

        let items = manager.notifications().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].notification.message, "second");
    }
}
