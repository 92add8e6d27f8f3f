use crate::state::notifications::{use_notifications, Notice, NoticeKind};
use leptos::*;

fn notice_classes(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "bg-green-50 border-green-200 text-green-800",
        NoticeKind::Error => "bg-red-50 border-red-200 text-red-800",
    }
}

#[component]
pub fn NotificationTray() -> impl IntoView {
    let notifications = use_notifications();
    let items = notifications.items();
    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2" aria-live="polite">
            <For
                each=move || items.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=format!("flex items-start gap-3 border rounded-md shadow px-4 py-3 text-sm {}", notice_classes(notice.kind))
                            role="alert"
                        >
                            <span class="flex-1">{notice.message}</span>
                            <button
                                type="button"
                                class="opacity-60 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn tray_renders_pending_notices() {
        let html = render_to_string(|| {
            let notifications = use_notifications();
            notifications.success("Resignation submitted successfully");
            notifications.error("Failed to fetch data");
            view! { <NotificationTray /> }
        });
        assert!(html.contains("Resignation submitted successfully"));
        assert!(html.contains("Failed to fetch data"));
        assert!(html.contains("bg-red-50"));
    }
}
