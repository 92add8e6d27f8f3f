use crate::{
    pages::{
        dashboard::route::DashboardRoute, employee::EmployeeDashboardPage, hr::HrDashboardPage,
    },
    state::auth::use_auth,
    utils::navigation,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let route = create_memo(move |_| auth.with(|state| DashboardRoute::resolve(state.user.as_ref())));

    create_effect(move |_| {
        if route.get() == DashboardRoute::Login {
            navigation::redirect(navigation::LOGIN_PATH);
        }
    });

    move || match route.get() {
        DashboardRoute::Hr => view! { <HrDashboardPage /> }.into_view(),
        DashboardRoute::Employee => view! { <EmployeeDashboardPage /> }.into_view(),
        DashboardRoute::Login => ().into_view(),
    }
}
