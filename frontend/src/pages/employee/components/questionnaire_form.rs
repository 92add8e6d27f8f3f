use crate::{
    components::common::Button,
    pages::employee::{utils::EXIT_QUESTIONS, view_model::EmployeeViewModel},
};
use leptos::*;

#[component]
pub fn QuestionnaireForm(vm: EmployeeViewModel) -> impl IntoView {
    let form = vm.questionnaire_form;
    let is_submitting = vm.is_submitting;
    let incomplete = Signal::derive(move || !form.is_complete());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.spawn_submit_questionnaire();
    };

    let questions = EXIT_QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, question)| {
            view! {
                <div>
                    <label for=format!("question-{index}") class="block text-sm font-medium text-gray-700 mb-2">
                        {*question}
                    </label>
                    <textarea
                        id=format!("question-{index}")
                        required
                        rows="3"
                        class="w-full rounded-md border-gray-300 shadow-sm focus:border-indigo-500 focus:ring-indigo-500 sm:text-sm"
                        prop:value=move || form.answer(index)
                        on:input=move |ev| form.set_answer(index, event_target_value(&ev))
                    ></textarea>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-6">"Exit Questionnaire"</h2>
            <form class="space-y-6" on:submit=on_submit>
                {questions}
                <Button loading=is_submitting disabled=incomplete>
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit Questionnaire" }}
                </Button>
            </form>
        </div>
    }
}
