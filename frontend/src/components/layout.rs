use crate::{
    components::toast::NotificationTray,
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let logout = auth::use_logout();
    view! {
        <header class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <span class="ml-2 text-xl font-semibold text-gray-900">{title}</span>
                    </div>
                    <div class="flex items-center">
                        <span class="mr-4 text-gray-600">"Welcome, " {username}</span>
                        <button
                            type="button"
                            on:click=move |_| logout.call(())
                            class="inline-flex items-center px-3 py-2 border border-transparent text-sm leading-4 font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <leptos_meta::Title text=title.clone() />
            <Header title=title />
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">{children()}</div>
            </main>
            <NotificationTray />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
