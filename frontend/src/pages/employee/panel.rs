use crate::{
    api::ApiClient,
    components::layout::Layout,
    pages::employee::{
        components::{questionnaire_form::QuestionnaireForm, resignation_form::ResignationForm},
        repository::EmployeeRepository,
        utils::EmployeePhase,
        view_model::EmployeeViewModel,
    },
    state::notifications::use_notifications,
};
use leptos::*;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = EmployeeViewModel::new(EmployeeRepository::new(api), use_notifications());
    let phase = vm.phase;

    view! {
        <Layout title="Employee Dashboard">
            {move || match phase.get() {
                EmployeePhase::Resigning => view! { <ResignationForm vm=vm /> }.into_view(),
                EmployeePhase::Questionnaire => view! { <QuestionnaireForm vm=vm /> }.into_view(),
            }}
        </Layout>
    }
}
