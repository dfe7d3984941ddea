use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] loading: Option<Signal<bool>>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center px-5 py-2.5 text-sm font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-900";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-blue-500 to-indigo-500 text-white hover:from-blue-600 hover:to-indigo-600 hover:shadow-lg hover:shadow-blue-500/25 focus:ring-blue-500",
        ButtonVariant::Ghost => "border border-slate-600 text-slate-300 hover:border-slate-400 hover:text-white hover:bg-slate-800/50 focus:ring-slate-500",
        ButtonVariant::Danger => "bg-red-600/80 text-white hover:bg-red-600 focus:ring-red-500",
    };

    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    let loading_text_display = if loading_text.is_empty() {
        "Saving...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "button".to_string()
    } else {
        button_type
    };

    let label = children();
    let loading = move || loading.is_some_and(|signal| signal.get());

    view! {
        <button
            type=button_type_val
            class=classes
            disabled=loading
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            <span class=move || if loading() { "hidden" } else { "" }>{label}</span>
            <Show when=loading>
                <span class="flex items-center justify-center gap-2">
                    <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                    {loading_text_display.clone()}
                </span>
            </Show>
        </button>
    }
}
