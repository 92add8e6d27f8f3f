use crate::components::{common::Button, error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

/// Username/password form shared by the login and registration pages.
#[component]
pub fn CredentialsForm(
    #[prop(into)] heading: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] pending_label: String,
    #[prop(into)] alternate_prompt: String,
    #[prop(into)] alternate_href: String,
    #[prop(into)] alternate_label: String,
    username: ReadSignal<String>,
    password: ReadSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">{heading}</h2>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="username" class="sr-only">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                required
                                autocomplete="username"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 focus:z-10 sm:text-sm"
                                placeholder="Username"
                                prop:value=username
                                on:input=move |ev| on_username_input.call(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                autocomplete="current-password"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <div>
                        <Button loading=pending>
                            {move || if pending.get() { pending_label.clone() } else { submit_label.clone() }}
                        </Button>
                    </div>
                    <p class="text-center text-sm text-gray-600">
                        {alternate_prompt} " "
                        <a href=alternate_href class="font-medium text-indigo-600 hover:text-indigo-500">
                            {alternate_label}
                        </a>
                    </p>
                </form>
            </div>
        </div>
    }
}
