use crate::{
    api::{ApiClient, ApiError, Credentials, User},
    pages::login::repository::AuthRepository,
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }
}

fn create_auth_context(api_client: &ApiClient) -> AuthContext {
    let initial = api_client
        .stored_user()
        .map(AuthState::signed_in)
        .unwrap_or_default();
    create_signal(initial)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let ctx = create_auth_context(&api_client);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    credentials: Credentials,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let session = repo.login(credentials).await;
    apply_session(session, set_auth_state)
}

pub async fn register_request(
    credentials: Credentials,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let session = repo.register(credentials).await;
    apply_session(session, set_auth_state)
}

fn apply_session(
    result: Result<crate::api::Session, ApiError>,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match result {
        Ok(session) => {
            set_auth_state.set(AuthState::signed_in(session.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.set(AuthState::default());
            Err(error)
        }
    }
}

pub fn logout(repo: &AuthRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::default());
}

fn auth_repository() -> AuthRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AuthRepository::new_with_client(std::rc::Rc::new(api))
}

pub fn use_login_action() -> Action<Credentials, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = auth_repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_register_action() -> Action<Credentials, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = auth_repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let repo = store_value(auth_repository());
    Callback::new(move |_| {
        repo.with_value(|repo| logout(repo, set_auth));
        crate::utils::navigation::redirect(crate::utils::navigation::LOGIN_PATH);
    })
}
