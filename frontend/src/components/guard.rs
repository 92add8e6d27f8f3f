use crate::{state::auth::use_auth, utils::navigation};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    create_effect(move |_| {
        if !is_authenticated.get() {
            navigation::redirect(navigation::LOGIN_PATH);
        }
    });
    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}
