use crate::{
    components::common::Button, pages::employee::view_model::EmployeeViewModel, utils::time,
};
use leptos::*;

#[component]
pub fn ResignationForm(vm: EmployeeViewModel) -> impl IntoView {
    let lwd = vm.resignation_form.lwd_signal();
    let is_submitting = vm.is_submitting;
    let min_date = time::date_input_value(time::today());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.spawn_submit_resignation();
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-4">"Submit Resignation"</h2>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="lwd" class="block text-sm font-medium text-gray-700">
                        "Last Working Day"
                    </label>
                    <input
                        type="date"
                        id="lwd"
                        name="lwd"
                        required
                        min=min_date
                        class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-indigo-500 focus:ring-indigo-500 sm:text-sm"
                        prop:value=move || lwd.get()
                        on:input=move |ev| lwd.set(event_target_value(&ev))
                    />
                </div>
                <Button loading=is_submitting>
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit Resignation" }}
                </Button>
            </form>
        </div>
    }
}
