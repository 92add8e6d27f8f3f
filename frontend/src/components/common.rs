use leptos::*;

const BUTTON_BASE_CLASS: &str = "inline-flex items-center justify-center border border-transparent rounded-md font-medium text-white shadow-sm focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Approve,
    Reject,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "w-full py-2 px-4 text-sm bg-indigo-600 hover:bg-indigo-700 focus:ring-indigo-500",
            ButtonVariant::Approve => "px-2.5 py-1.5 text-xs bg-green-600 hover:bg-green-700 focus:ring-green-500",
            ButtonVariant::Reject => "px-2.5 py-1.5 text-xs bg-red-600 hover:bg-red-700 focus:ring-red-500",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!("{} {}", BUTTON_BASE_CLASS, ButtonVariant::Primary.classes())
            disabled=move || disabled.get() || loading.get()
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_use_distinct_colours() {
        assert!(ButtonVariant::Primary.classes().contains("bg-indigo-600"));
        assert!(ButtonVariant::Approve.classes().contains("bg-green-600"));
        assert!(ButtonVariant::Reject.classes().contains("bg-red-600"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_button_is_disabled_and_spins() {
        let html = render_to_string(|| {
            view! { <Button loading=true>"Submitting..."</Button> }
        });
        assert!(html.contains("disabled"));
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Submitting..."));
        assert!(html.contains("bg-indigo-600"));
    }
}
