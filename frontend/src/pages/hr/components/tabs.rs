use crate::pages::hr::utils::HrTab;
use leptos::*;

#[component]
pub fn HrTabs(active_tab: RwSignal<HrTab>, on_refresh: Callback<()>) -> impl IntoView {
    let tab_button = move |tab: HrTab| {
        let class = move || {
            if active_tab.get() == tab {
                "px-3 py-2 rounded-md text-sm font-medium bg-indigo-100 text-indigo-700"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-500 hover:text-gray-700"
            }
        };
        view! {
            <button type="button" class=class on:click=move |_| active_tab.set(tab)>
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="mb-6 flex items-center justify-between">
            <nav class="flex space-x-4">
                {HrTab::ALL.into_iter().map(tab_button).collect_view()}
            </nav>
            <button
                type="button"
                class="px-3 py-2 rounded-md text-sm font-medium text-indigo-600 hover:text-indigo-800"
                on:click=move |_| on_refresh.call(())
            >
                "Refresh"
            </button>
        </div>
    }
}
