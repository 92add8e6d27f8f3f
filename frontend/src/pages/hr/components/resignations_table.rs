use crate::{
    api::ResignationRequest,
    components::{common::ButtonVariant, empty_state::EmptyState},
    pages::hr::utils::{can_conclude, status_badge_class},
};
use leptos::*;

const CONCLUDE_BUTTON_CLASS: &str =
    "inline-flex items-center border border-transparent rounded font-medium text-white focus:outline-none focus:ring-2 focus:ring-offset-2";

#[component]
pub fn ResignationsTable(
    #[prop(into)] resignations: Signal<Vec<ResignationRequest>>,
    on_conclude: Callback<(ResignationRequest, bool)>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg overflow-hidden">
            <div class="px-4 py-5 sm:px-6">
                <h2 class="text-lg font-medium text-gray-900">"Resignation Requests"</h2>
            </div>
            <Show
                when=move || !resignations.with(|rows| rows.is_empty())
                fallback=|| view! { <EmptyState title="No resignation requests found" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Employee ID"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Last Working Day"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Status"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || resignations.get()
                                key=|row| (row.id.clone(), row.status)
                                children=move |row| view! { <ResignationRow row=row on_conclude=on_conclude /> }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ResignationRow(
    row: ResignationRequest,
    on_conclude: Callback<(ResignationRequest, bool)>,
) -> impl IntoView {
    let actions = can_conclude(&row).then(|| {
        let approve_row = row.clone();
        let reject_row = row.clone();
        view! {
            <div class="space-x-2">
                <button
                    type="button"
                    data-action="approve"
                    class=format!("{} {}", CONCLUDE_BUTTON_CLASS, ButtonVariant::Approve.classes())
                    on:click=move |_| on_conclude.call((approve_row.clone(), true))
                >
                    "Approve"
                </button>
                <button
                    type="button"
                    data-action="reject"
                    class=format!("{} {}", CONCLUDE_BUTTON_CLASS, ButtonVariant::Reject.classes())
                    on:click=move |_| on_conclude.call((reject_row.clone(), false))
                >
                    "Reject"
                </button>
            </div>
        }
    });

    view! {
        <tr data-id=row.id.clone()>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.employee_id.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.display_lwd()}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!(
                    "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
                    status_badge_class(row.status),
                )>{row.status.as_str()}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">{actions}</td>
        </tr>
    }
}
