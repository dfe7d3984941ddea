use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    /// Something the admin can still fix, e.g. content text that does not parse.
    #[default]
    Warning,
    Error,
}

impl AlertVariant {
    fn role(self) -> &'static str {
        match self {
            Self::Warning => "status",
            Self::Error => "alert",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Warning => "border-amber-400 bg-amber-500/10 text-amber-200",
            Self::Error => "border-red-500 bg-red-500/10 text-red-200",
        }
    }
}

/// Inline notice with an optional retry action.
#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            role=variant.role()
            class=format!("my-4 flex items-start justify-between gap-4 border-l-4 px-4 py-3 text-sm {}", variant.classes())
        >
            <p>{message}</p>
            {on_retry.map(|retry| view! {
                <button
                    type="button"
                    class="shrink-0 font-semibold underline underline-offset-2"
                    on:click=move |_| retry.run(())
                >
                    "Try again"
                </button>
            })}
        </div>
    }
}

#[component]
pub fn WarningAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Warning /> }
}

#[component]
pub fn ErrorAlert(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    match on_retry {
        Some(retry) => view! { <Alert message=message variant=AlertVariant::Error on_retry=retry /> }.into_any(),
        None => view! { <Alert message=message variant=AlertVariant::Error /> }.into_any(),
    }
}
