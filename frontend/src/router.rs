use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::RequireAuth,
    pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage},
    state::{auth::AuthProvider, notifications::Notifications},
    utils::navigation::DASHBOARD_PATH,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/register", "/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(Notifications::new());
    leptos_meta::provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomeRedirect/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path=DASHBOARD_PATH/> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}
