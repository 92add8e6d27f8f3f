use crate::{
    pages::login::{components::form::CredentialsForm, utils::validate_credentials},
    state::auth,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, Callback, *};

/// New accounts are signed in straight away and sent to their dashboard.
#[component]
pub fn RegisterPanel() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let register_action = auth::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
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
        match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                set_error.set(None);
                register_action.dispatch(credentials);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    });

    view! {
        <CredentialsForm
            heading="Create your account"
            submit_label="Register"
            pending_label="Creating account..."
            alternate_prompt="Already have an account?"
            alternate_href="/login"
            alternate_label="Sign in"
            username=username
            password=password
            error=error
            pending=pending
            on_username_input=Callback::new(move |value: String| set_username.set(value))
            on_password_input=Callback::new(move |value: String| set_password.set(value))
            on_submit=handle_submit
        />
    }
}
