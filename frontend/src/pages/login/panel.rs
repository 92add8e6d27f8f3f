use crate::{
    pages::login::{components::form::CredentialsForm, utils},
    state::auth,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    navigation::redirect(navigation::DASHBOARD_PATH);
                }
                Err(err) => set_error.set(Some(err.into())),
            }
        }
    });

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match utils::validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                set_error.set(None);
                login_action.dispatch(credentials);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    });

    let username_input = Callback::new(move |value: String| set_username.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));

    view! {
        <CredentialsForm
            heading="Sign in to your account"
            submit_label="Sign in"
            pending_label="Signing in..."
            alternate_prompt="Don't have an account?"
            alternate_href="/register"
            alternate_label="Register"
            username=username
            password=password
            error=error
            pending=pending
            on_username_input=username_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
