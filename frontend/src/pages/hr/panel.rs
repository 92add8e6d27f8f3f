use crate::{
    api::{ApiClient, ResignationRequest},
    components::layout::{Layout, LoadingSpinner},
    pages::hr::{
        components::{
            exit_responses::ExitResponsesList, resignations_table::ResignationsTable, tabs::HrTabs,
        },
        repository::HrRepository,
        utils::HrTab,
        view_model::HrViewModel,
    },
    state::notifications::use_notifications,
};
use leptos::*;

#[component]
pub fn HrDashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = HrViewModel::new(HrRepository::new(api), use_notifications());

    // Initial load once mounted.
    create_effect(move |loaded: Option<()>| {
        if loaded.is_none() {
            vm.refresh();
        }
    });

    let on_refresh = Callback::new(move |_| vm.refresh());
    let on_conclude = Callback::new(move |(request, approved): (ResignationRequest, bool)| {
        vm.spawn_conclude(request, approved)
    });

    view! {
        <Layout title="HR Dashboard">
            <HrTabs active_tab=vm.active_tab on_refresh=on_refresh />
            {move || {
                if vm.is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    match vm.active_tab.get() {
                        HrTab::Resignations => view! {
                            <ResignationsTable resignations=vm.resignations on_conclude=on_conclude />
                        }
                        .into_view(),
                        HrTab::Responses => view! {
                            <ExitResponsesList responses=vm.exit_responses />
                        }
                        .into_view(),
                    }
                }
            }}
        </Layout>
    }
}
