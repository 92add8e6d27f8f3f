use leptos::*;

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="text-center py-4 text-gray-500">{title}</div>
    }
}
