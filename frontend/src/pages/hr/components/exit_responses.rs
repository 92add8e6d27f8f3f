use crate::{api::ExitQuestionnaire, components::empty_state::EmptyState};
use leptos::*;

#[component]
pub fn ExitResponsesList(#[prop(into)] responses: Signal<Vec<ExitQuestionnaire>>) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg overflow-hidden">
            <div class="px-4 py-5 sm:px-6">
                <h2 class="text-lg font-medium text-gray-900">"Exit Interview Responses"</h2>
            </div>
            <Show
                when=move || !responses.with(|items| items.is_empty())
                fallback=|| view! { <EmptyState title="No exit interview responses found" /> }
            >
                <div class="divide-y divide-gray-200">
                    {move || {
                        responses
                            .get()
                            .into_iter()
                            .map(|questionnaire| {
                                view! {
                                    <div class="p-6">
                                        <h3 class="text-lg font-medium text-gray-900 mb-4">
                                            "Employee ID: " {questionnaire.employee_id}
                                        </h3>
                                        <div class="space-y-4">
                                            {questionnaire
                                                .responses
                                                .into_iter()
                                                .map(|entry| {
                                                    view! {
                                                        <div class="bg-gray-50 p-4 rounded-lg">
                                                            <p class="text-sm font-medium text-gray-700 mb-2">{entry.question_text}</p>
                                                            <p class="text-sm text-gray-600">{entry.response}</p>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ExitResponse;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn responses_are_grouped_by_employee() {
        let html = render_to_string(|| {
            let items = create_rw_signal(vec![ExitQuestionnaire {
                employee_id: "emp-7".into(),
                responses: vec![ExitResponse {
                    question_text: "Primary reason".into(),
                    response: "Relocation".into(),
                }],
            }]);
            view! { <ExitResponsesList responses=items /> }
        });
        assert!(html.contains("Employee ID: "));
        assert!(html.contains("emp-7"));
        assert!(html.contains("Primary reason"));
        assert!(html.contains("Relocation"));
    }

    #[test]
    fn no_responses_shows_placeholder() {
        let html = render_to_string(|| {
            let items = create_rw_signal(Vec::<ExitQuestionnaire>::new());
            view! { <ExitResponsesList responses=items /> }
        });
        assert!(html.contains("No exit interview responses found"));
    }
}
