use leptos::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Transient toasts shared by every page.
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notice>> {
        self.items.into()
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.items.get_untracked()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|notice| notice.id != id));
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let Some(id) = self.next_id.try_get_value() else {
            return;
        };
        self.next_id.set_value(id.wrapping_add(1));
        self.items.update(|items| items.push(Notice { id, kind, message }));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            this.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {
        let _ = DISMISS_AFTER_MS;
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    match use_context::<Notifications>() {
        Some(notifications) => notifications,
        None => {
            let notifications = Notifications::new();
            provide_context(notifications);
            notifications
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_keep_order_and_can_be_dismissed() {
        let runtime = create_runtime();
        let notifications = Notifications::new();
        notifications.success("Saved");
        notifications.error("Boom");

        let items = notifications.snapshot();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, NoticeKind::Success);
        assert_eq!(items[1].message, "Boom");
        assert_ne!(items[0].id, items[1].id);

        notifications.dismiss(items[0].id);
        let items = notifications.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].message, "Boom");
        runtime.dispose();
    }

    #[test]
    fn use_notifications_shares_one_instance() {
        let runtime = create_runtime();
        let first = use_notifications();
        let second = use_notifications();
        first.error("Failed to fetch data");
        assert_eq!(second.snapshot().len(), 1);
        runtime.dispose();
    }
}
